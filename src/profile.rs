//! Reusable generation profiles stored as JSON

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ForgeError, Result};
use crate::forge::{build_year_tokens, tokens};
use crate::types::{GenerationConfig, GenerationMode, TokenSets};

/// Generation settings loaded from a profile file.
///
/// Every field is optional; missing fields fall back to built-in defaults
/// and command line flags override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Base words used when none are given on the command line
    pub base_words: Vec<String>,
    pub mode: Option<GenerationMode>,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub leet: Option<bool>,
    pub max_leet_variants: Option<usize>,
    /// Inclusive year range for date tokens
    pub years: Option<(i32, i32)>,
    pub numbers: Option<Vec<String>>,
    pub symbols: Option<Vec<String>>,
    pub separators: Option<Vec<String>>,
    pub prefixes: Option<Vec<String>>,
    pub suffixes: Option<Vec<String>>,
}

impl Profile {
    /// Load profile from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ForgeError::parse(e.to_string(), Some(content))
        })
    }

    /// Save profile to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ForgeError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let content = serde_json::to_string_pretty(self).map_err(|e| {
            ForgeError::internal(format!("Failed to serialize profile: {}", e))
        })?;

        std::fs::write(path, content).map_err(|e| {
            ForgeError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Generation settings with profile values over the defaults
    pub fn generation_config(&self) -> GenerationConfig {
        let defaults = GenerationConfig::default();
        GenerationConfig {
            mode: self.mode.unwrap_or(defaults.mode),
            min_len: self.min_len.unwrap_or(defaults.min_len),
            max_len: self.max_len.unwrap_or(defaults.max_len),
            use_leet: self.leet.unwrap_or(defaults.use_leet),
            max_leet_variants: self.max_leet_variants.unwrap_or(defaults.max_leet_variants),
        }
    }

    /// Token tables with profile values over the defaults
    pub fn token_sets(&self) -> TokenSets {
        let defaults = TokenSets::default();
        TokenSets {
            numbers: self.numbers.clone().unwrap_or(defaults.numbers),
            symbols: self.symbols.clone().unwrap_or(defaults.symbols),
            separators: self.separators.clone().unwrap_or(defaults.separators),
            prefixes: self.prefixes.clone().map(affixes_or_blank).unwrap_or(defaults.prefixes),
            suffixes: self.suffixes.clone().map(affixes_or_blank).unwrap_or(defaults.suffixes),
            year_tokens: match self.years {
                Some((start, end)) => build_year_tokens(start, end),
                None => defaults.year_tokens,
            },
        }
    }

    /// Profile base words, or the built-in defaults
    pub fn base_words_or_default(&self) -> Vec<String> {
        if self.base_words.is_empty() {
            tokens::to_owned(tokens::DEFAULT_BASE_WORDS)
        } else {
            self.base_words.clone()
        }
    }
}

/// An empty prefix/suffix list would suppress every candidate; treat it as
/// "no affix" instead.
pub fn affixes_or_blank(list: Vec<String>) -> Vec<String> {
    if list.is_empty() {
        vec![String::new()]
    } else {
        list
    }
}
