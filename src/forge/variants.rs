//! Case and leet-speak variants of a base word

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Upper bound on leet products per word
pub const DEFAULT_MAX_LEET_VARIANTS: usize = 32;

/// Leet substitution table. Characters not listed map only to themselves.
pub const LEET_MAP: &[(char, &[char])] = &[
    ('a', &['a', '4', '@']),
    ('e', &['e', '3']),
    ('i', &['i', '1', '!']),
    ('o', &['o', '0']),
    ('s', &['s', '5', '$']),
    ('t', &['t', '7']),
];

fn delimiter_regex() -> &'static Regex {
    static DELIMITERS: OnceLock<Regex> = OnceLock::new();
    DELIMITERS.get_or_init(|| Regex::new(r"[-._\s]+").expect("delimiter pattern is valid"))
}

/// First character uppercased, the rest lowercased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

/// Camel form of a delimited word ("blue-sky_2" -> "BlueSky2")
fn camel_join(word: &str) -> Option<String> {
    let parts: Vec<&str> = delimiter_regex().split(word).filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.into_iter().map(capitalize).collect())
}

/// Original, lower, upper, capitalized and (for `-`/`_` words) camel forms.
///
/// Duplicates are collapsed; first-seen order is kept.
pub fn case_variants(word: &str) -> Vec<String> {
    let mut variants = VariantSet::default();
    variants.insert(word.to_string());
    variants.insert(word.to_lowercase());
    variants.insert(word.to_uppercase());
    variants.insert(capitalize(word));

    if word.contains('-') || word.contains('_') {
        if let Some(camel) = camel_join(word) {
            variants.insert(camel);
        }
    }

    variants.into_vec()
}

/// Every variant of `word` fed to the combination engine.
///
/// With `use_leet`, each leet product (at most `max_leet_variants` of them)
/// is added along with its capitalized form.
pub fn expand(word: &str, use_leet: bool, max_leet_variants: usize) -> Vec<String> {
    let mut variants = VariantSet::default();
    for variant in case_variants(word) {
        variants.insert(variant);
    }

    if use_leet {
        for leet in leet_variants(word, max_leet_variants) {
            let capitalized = capitalize(&leet);
            variants.insert(leet);
            variants.insert(capitalized);
        }
    }

    variants.into_vec()
}

/// Lazily enumerate leet substitutions of `word`, capped at `max_variants`
pub fn leet_variants(word: &str, max_variants: usize) -> LeetVariants {
    LeetVariants::new(word, max_variants)
}

/// Insertion ordered set of variants
#[derive(Default)]
struct VariantSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl VariantSet {
    fn insert(&mut self, variant: String) {
        if self.seen.insert(variant.clone()) {
            self.ordered.push(variant);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Cartesian product over per-character substitution pools.
///
/// Odometer order: the last character varies fastest.
pub struct LeetVariants {
    pools: Vec<&'static [char]>,
    /// Characters without a table entry, indexed like `pools`
    literals: Vec<char>,
    counters: Vec<usize>,
    emitted: usize,
    max_variants: usize,
    exhausted: bool,
}

impl LeetVariants {
    fn new(word: &str, max_variants: usize) -> Self {
        let mut pools = Vec::new();
        let mut literals = Vec::new();
        for ch in word.to_lowercase().chars() {
            let pool = LEET_MAP
                .iter()
                .find(|(key, _)| *key == ch)
                .map(|(_, subs)| *subs)
                .unwrap_or(&[]);
            pools.push(pool);
            literals.push(ch);
        }
        let counters = vec![0; pools.len()];

        Self {
            pools,
            literals,
            counters,
            emitted: 0,
            max_variants,
            exhausted: false,
        }
    }

    fn current(&self) -> String {
        self.pools
            .iter()
            .zip(&self.literals)
            .zip(&self.counters)
            .map(|((pool, literal), &idx)| pool.get(idx).copied().unwrap_or(*literal))
            .collect()
    }

    /// Advance the odometer; returns false once every product was produced
    fn advance(&mut self) -> bool {
        for pos in (0..self.counters.len()).rev() {
            let size = self.pools[pos].len().max(1);
            self.counters[pos] += 1;
            if self.counters[pos] < size {
                return true;
            }
            self.counters[pos] = 0;
        }
        false
    }
}

impl Iterator for LeetVariants {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.emitted >= self.max_variants {
            return None;
        }

        let variant = self.current();
        self.emitted += 1;
        if !self.advance() {
            self.exhausted = true;
        }
        Some(variant)
    }
}
