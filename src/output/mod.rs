//! Wordlist output: plain or gzip files, one candidate per line

mod buffer;

pub use buffer::{collect_buffered, dedup_in_order};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{ForgeError, Result};
use crate::types::is_gzip_path;

/// Progress callback fires every this many written lines
pub const PROGRESS_INTERVAL: u64 = 1000;

/// File writer, optionally wrapped in gzip
pub enum OutputWriter {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputWriter {
    /// Create (or truncate) `path`; `.gz` paths are compressed
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let file = File::create(path).map_err(|e| {
            ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;
        let writer = BufWriter::new(file);

        if is_gzip_path(path) {
            Ok(Self::Gzip(GzEncoder::new(writer, Compression::default())))
        } else {
            Ok(Self::Plain(writer))
        }
    }

    /// Flush buffers and write the gzip trailer
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Plain(mut w) => w.flush(),
            Self::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(w) => w.write(buf),
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(w) => w.flush(),
            Self::Gzip(w) => w.flush(),
        }
    }
}

/// Write candidates as lines, returning how many were written.
///
/// With `unique`, repeats are skipped and do not count toward `limit`
/// (0 = unbounded). `on_progress` receives the running count every
/// [`PROGRESS_INTERVAL`] lines.
pub fn write_candidates<I, W, F>(
    candidates: I,
    writer: &mut W,
    unique: bool,
    limit: usize,
    mut on_progress: F,
) -> Result<u64>
where
    I: IntoIterator<Item = String>,
    W: Write,
    F: FnMut(u64),
{
    let mut seen = HashSet::new();
    let mut written: u64 = 0;

    for line in candidates {
        if unique && !seen.insert(line.clone()) {
            continue;
        }

        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        written += 1;

        if written % PROGRESS_INTERVAL == 0 {
            on_progress(written);
        }
        if limit > 0 && written >= limit as u64 {
            break;
        }
    }

    Ok(written)
}

/// Stream candidates into the file at `path`.
///
/// The file is created even when there is nothing to write.
pub fn write_output<I, F>(candidates: I, path: &Path, unique: bool, limit: usize, on_progress: F) -> Result<u64>
where
    I: IntoIterator<Item = String>,
    F: FnMut(u64),
{
    let mut writer = OutputWriter::create(path)?;
    let written = write_candidates(candidates, &mut writer, unique, limit, on_progress)
        .map_err(|e| with_path(e, path))?;
    writer
        .finish()
        .map_err(|e| ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string())))?;

    tracing::info!(path = %path.display(), written, unique, limit, "Wordlist written");
    Ok(written)
}

/// Read a wordlist back, decompressing `.gz` files. Invalid UTF-8 is replaced.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| {
        ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let mut bytes = Vec::new();
    let read = if is_gzip_path(path) {
        MultiGzDecoder::new(file).read_to_end(&mut bytes)
    } else {
        io::BufReader::new(file).read_to_end(&mut bytes)
    };
    read.map_err(|e| ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string())))?;

    Ok(String::from_utf8_lossy(&bytes).lines().map(str::to_string).collect())
}

fn with_path(err: ForgeError, path: &Path) -> ForgeError {
    match err {
        ForgeError::Io { message, path: None } => {
            ForgeError::io(message, Some(path.to_string_lossy().to_string()))
        }
        other => other,
    }
}
