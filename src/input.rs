//! Base word collection: files, piped stdin and interactive prompts

use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::error::{ForgeError, Result};
use crate::output::read_lines;

/// Split a comma-separated answer into trimmed, non-empty words
pub fn parse_word_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split text into trimmed, non-empty lines
pub fn parse_word_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read base words from a file, one per line (`.gz` files are decompressed)
pub fn read_word_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ForgeError::input(
            "Input file not found",
            Some(path.to_string_lossy().to_string()),
        ));
    }

    let lines = read_lines(path).map_err(|e| match e {
        ForgeError::Io { message, path } => ForgeError::Input { message, path },
        other => other,
    })?;
    let words = parse_word_lines(&lines.join("\n"));
    tracing::debug!(path = %path.display(), words = words.len(), "Read base word file");
    Ok(words)
}

/// Read base words from stdin when it is piped; `None` for a terminal
pub fn read_piped_stdin() -> Result<Option<Vec<String>>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes)?;
    let words = parse_word_lines(&String::from_utf8_lossy(&bytes));
    Ok(if words.is_empty() { None } else { Some(words) })
}

/// Ask for comma-separated base words. An empty answer returns `None`.
///
/// Ctrl-C or Esc surfaces as [`ForgeError::Interrupted`].
pub fn prompt_base_words() -> Result<Option<Vec<String>>> {
    let answer = inquire::Text::new("Base words:")
        .with_help_message("Separate words with commas, or press Enter to use the defaults")
        .prompt()?;

    let words = parse_word_list(&answer);
    Ok(if words.is_empty() { None } else { Some(words) })
}
