//! Core types and structures for wordlist-forge

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::forge::tokens;

/// Generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Common combos: numbers and dates, no symbols
    #[default]
    Basic,
    /// Numbers, dates and symbol insertions
    Full,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Basic => write!(f, "basic"),
            GenerationMode::Full => write!(f, "full"),
        }
    }
}

/// Configuration for candidate generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub mode: GenerationMode,
    pub min_len: usize,
    pub max_len: usize,
    pub use_leet: bool,
    pub max_leet_variants: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Basic,
            min_len: 4,
            max_len: 64,
            use_leet: false,
            max_leet_variants: crate::forge::variants::DEFAULT_MAX_LEET_VARIANTS,
        }
    }
}

impl GenerationConfig {
    /// Whether a candidate passes the length filter (measured in chars)
    pub fn accepts(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        self.min_len <= len && len <= self.max_len
    }
}

/// Token tables joined onto each word variant.
///
/// An empty string in any table means "nothing inserted here".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSets {
    pub numbers: Vec<String>,
    pub symbols: Vec<String>,
    pub separators: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub year_tokens: Vec<String>,
}

impl Default for TokenSets {
    fn default() -> Self {
        Self {
            numbers: tokens::to_owned(tokens::DEFAULT_NUMBERS),
            symbols: tokens::to_owned(tokens::DEFAULT_SYMBOLS),
            separators: tokens::to_owned(tokens::DEFAULT_SEPARATORS),
            prefixes: vec![String::new()],
            suffixes: vec![String::new()],
            year_tokens: tokens::current_year_tokens(),
        }
    }
}

impl TokenSets {
    /// Token sets that add nothing: only the bare core is produced
    pub fn empty() -> Self {
        Self {
            numbers: Vec::new(),
            symbols: Vec::new(),
            separators: Vec::new(),
            prefixes: vec![String::new()],
            suffixes: vec![String::new()],
            year_tokens: Vec::new(),
        }
    }
}

/// Where and how the wordlist is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDescriptor {
    pub path: PathBuf,
    pub unique: bool,
    pub shuffle: bool,
    /// Maximum lines written, 0 means unbounded
    pub limit: usize,
    pub quiet: bool,
}

impl OutputDescriptor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            unique: false,
            shuffle: false,
            limit: 0,
            quiet: true,
        }
    }

    /// Output goes through gzip when the path ends in `.gz`
    pub fn compressed(&self) -> bool {
        is_gzip_path(&self.path)
    }

    /// Unique or shuffled output needs the whole candidate set in memory
    pub fn needs_buffering(&self) -> bool {
        self.unique || self.shuffle
    }
}

pub(crate) fn is_gzip_path(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_filter_counts_chars() {
        let config = GenerationConfig {
            min_len: 4,
            max_len: 5,
            ..Default::default()
        };
        assert!(config.accepts("ädmin"));
        assert!(!config.accepts("adm"));
        assert!(!config.accepts("admin1"));
    }

    #[test]
    fn test_inverted_bounds_reject_everything() {
        let config = GenerationConfig {
            min_len: 10,
            max_len: 2,
            ..Default::default()
        };
        assert!(!config.accepts("password12"));
        assert!(!config.accepts(""));
    }

    #[test]
    fn test_output_descriptor_compression() {
        assert!(OutputDescriptor::new("out/list.txt.gz").compressed());
        assert!(!OutputDescriptor::new("list.txt").compressed());
        assert!(!OutputDescriptor::new("gz").compressed());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(GenerationMode::Basic.to_string(), "basic");
        assert_eq!(GenerationMode::Full.to_string(), "full");
    }
}
