//! Candidate generation
//!
//! Base words are expanded into case/leet variants, then crossed with
//! prefixes, suffixes, separators, numbers, symbols and date tokens.

mod combinations;
mod estimate;
pub mod tokens;
pub mod variants;

pub use combinations::Combinations;
pub use estimate::estimate;
pub use tokens::{build_year_tokens, default_year_tokens};
pub use variants::{capitalize, case_variants, expand, leet_variants, LeetVariants};

use crate::types::{GenerationConfig, TokenSets};

/// Lazily generate every candidate for `base_words`
pub fn generate<I, S>(base_words: I, tokens: &TokenSets, config: &GenerationConfig) -> Combinations
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Combinations::new(base_words, tokens, config)
}

/// Deduplicate trimmed, non-empty words keeping first occurrence order
pub fn dedup_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_string())
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
