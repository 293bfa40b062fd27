//! End-to-end run: generate candidates and write them out

use rand::Rng;

use crate::error::Result;
use crate::forge::{self, estimate};
use crate::output::{collect_buffered, write_output};
use crate::types::{GenerationConfig, OutputDescriptor, TokenSets};

/// Result of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub written: u64,
    /// Whether candidates were held in memory before writing
    pub buffered: bool,
}

/// Rough size of the run, for the banner
pub fn estimate_run(base_words: &[String], tokens: &TokenSets, config: &GenerationConfig) -> u64 {
    estimate(
        forge::dedup_words(base_words).len(),
        tokens.numbers.len(),
        tokens.symbols.len(),
        tokens.prefixes.len(),
        tokens.suffixes.len(),
        tokens.year_tokens.len(),
        config.mode,
    )
}

/// Generate every candidate for `base_words` and write it to `output.path`.
///
/// Plain runs stream straight to disk. Unique or shuffled runs collect the
/// candidates first, so memory grows with the output size.
pub fn run<R, F>(
    base_words: &[String],
    tokens: &TokenSets,
    config: &GenerationConfig,
    output: &OutputDescriptor,
    rng: &mut R,
    on_progress: F,
) -> Result<RunSummary>
where
    R: Rng + ?Sized,
    F: FnMut(u64),
{
    let candidates = forge::generate(base_words, tokens, config);

    let (written, buffered) = if output.needs_buffering() {
        tracing::info!(unique = output.unique, shuffle = output.shuffle, "Buffering candidates in memory");
        let collected = collect_buffered(candidates, output.unique, output.shuffle, output.limit, rng);
        (write_output(collected, &output.path, false, 0, on_progress)?, true)
    } else {
        (write_output(candidates, &output.path, false, output.limit, on_progress)?, false)
    };

    Ok(RunSummary { written, buffered })
}
