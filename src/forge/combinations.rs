//! Lazy cross product of word variants and token sets

use super::variants;
use crate::types::{GenerationConfig, GenerationMode, TokenSets};

/// Outcome of looking up one slot of the current core
enum Slot {
    /// Past the last slot for this core
    End,
    /// Slot exists but produces nothing (empty symbol)
    Skip,
    Candidate(String),
}

/// Iterator over every length-filtered candidate.
///
/// Walks word -> variant -> prefix -> suffix to build a core, then walks the
/// token slots of that core by index. Only one word's variants are held at
/// a time.
pub struct Combinations {
    words: Vec<String>,
    tokens: TokenSets,
    config: GenerationConfig,
    word_idx: usize,
    variants: Vec<String>,
    variant_idx: usize,
    prefix_idx: usize,
    suffix_idx: usize,
    core: Option<String>,
    slot: usize,
}

impl Combinations {
    pub fn new<I, S>(base_words: I, tokens: &TokenSets, config: &GenerationConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = super::dedup_words(base_words);
        tracing::debug!(
            words = words.len(),
            mode = %config.mode,
            leet = config.use_leet,
            "Starting candidate generation"
        );

        Self {
            words,
            tokens: tokens.clone(),
            config: config.clone(),
            word_idx: 0,
            variants: Vec::new(),
            variant_idx: 0,
            prefix_idx: 0,
            suffix_idx: 0,
            core: None,
            slot: 0,
        }
    }

    /// Number of distinct base words being expanded
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Build the next `prefix + variant + suffix`, loading words as needed
    fn next_core(&mut self) -> Option<String> {
        if self.tokens.prefixes.is_empty() || self.tokens.suffixes.is_empty() {
            return None;
        }

        while self.variant_idx >= self.variants.len() {
            let word = self.words.get(self.word_idx)?;
            self.variants = variants::expand(word, self.config.use_leet, self.config.max_leet_variants);
            self.word_idx += 1;
            self.variant_idx = 0;
            self.prefix_idx = 0;
            self.suffix_idx = 0;
        }

        let core = format!(
            "{}{}{}",
            self.tokens.prefixes[self.prefix_idx],
            self.variants[self.variant_idx],
            self.tokens.suffixes[self.suffix_idx]
        );

        self.suffix_idx += 1;
        if self.suffix_idx >= self.tokens.suffixes.len() {
            self.suffix_idx = 0;
            self.prefix_idx += 1;
            if self.prefix_idx >= self.tokens.prefixes.len() {
                self.prefix_idx = 0;
                self.variant_idx += 1;
            }
        }

        Some(core)
    }

    /// Candidate at `slot` for `core`, before length filtering
    fn candidate_at(&self, core: &str, slot: usize) -> Slot {
        if slot == 0 {
            return Slot::Candidate(core.to_string());
        }

        match self.config.mode {
            GenerationMode::Basic => self.basic_candidate_at(core, slot - 1),
            GenerationMode::Full => self.full_candidate_at(core, slot - 1),
        }
    }

    /// Numbers (outer) x separators (inner), then year tokens
    fn basic_candidate_at(&self, core: &str, index: usize) -> Slot {
        let t = &self.tokens;
        let number_slots = t.numbers.len() * t.separators.len();

        if index < number_slots {
            let sep = &t.separators[index % t.separators.len()];
            let num = &t.numbers[index / t.separators.len()];
            return Slot::Candidate(join_number(core, sep, num));
        }

        match t.year_tokens.get(index - number_slots) {
            Some(year) => Slot::Candidate(format!("{}{}", core, year)),
            None => Slot::End,
        }
    }

    /// Separators (outer) x numbers (inner), each followed by its symbol
    /// insertions; then each year token followed by its symbol suffixes
    fn full_candidate_at(&self, core: &str, index: usize) -> Slot {
        let t = &self.tokens;
        let group = 1 + t.symbols.len();
        let number_slots = t.separators.len() * t.numbers.len() * group;

        if index < number_slots {
            let pair = index / group;
            let sep = &t.separators[pair / t.numbers.len()];
            let num = &t.numbers[pair % t.numbers.len()];
            return match index % group {
                0 => Slot::Candidate(join_number(core, sep, num)),
                sub => symbol_slot(&t.symbols[sub - 1], |sym| {
                    if num.is_empty() {
                        format!("{}{}", core, sym)
                    } else {
                        format!("{}{}{}{}", core, sym, sep, num)
                    }
                }),
            };
        }

        let index = index - number_slots;
        let year = match t.year_tokens.get(index / group) {
            Some(year) => year,
            None => return Slot::End,
        };
        match index % group {
            0 => Slot::Candidate(format!("{}{}", core, year)),
            sub => symbol_slot(&t.symbols[sub - 1], |sym| format!("{}{}{}", core, year, sym)),
        }
    }
}

/// `core + sep + num`, or the bare core when there is no number
fn join_number(core: &str, sep: &str, num: &str) -> String {
    if num.is_empty() {
        core.to_string()
    } else {
        format!("{}{}{}", core, sep, num)
    }
}

fn symbol_slot(sym: &str, build: impl FnOnce(&str) -> String) -> Slot {
    if sym.is_empty() {
        Slot::Skip
    } else {
        Slot::Candidate(build(sym))
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.core.is_none() {
                let core = self.next_core()?;
                self.core = Some(core);
                self.slot = 0;
            }

            let slot = self.slot;
            self.slot += 1;

            let outcome = match &self.core {
                Some(core) => self.candidate_at(core, slot),
                None => Slot::End,
            };

            match outcome {
                Slot::End => self.core = None,
                Slot::Skip => {}
                Slot::Candidate(candidate) => {
                    if self.config.accepts(&candidate) {
                        return Some(candidate);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn config(mode: GenerationMode, min_len: usize, max_len: usize) -> GenerationConfig {
        GenerationConfig {
            mode,
            min_len,
            max_len,
            ..Default::default()
        }
    }

    #[test]
    fn test_basic_admin_scenario() {
        let tokens = TokenSets {
            numbers: strings(&["", "123"]),
            separators: strings(&[""]),
            ..TokenSets::empty()
        };
        let out: Vec<String> =
            Combinations::new(["admin"], &tokens, &config(GenerationMode::Basic, 4, 64)).collect();

        assert_eq!(
            out,
            vec![
                "admin", "admin", "admin123",
                "ADMIN", "ADMIN", "ADMIN123",
                "Admin", "Admin", "Admin123",
            ]
        );
    }

    #[test]
    fn test_basic_ignores_symbols_and_appends_years() {
        let tokens = TokenSets {
            numbers: strings(&["1"]),
            symbols: strings(&["!"]),
            separators: strings(&["", "-"]),
            year_tokens: strings(&["2024"]),
            ..TokenSets::empty()
        };
        let out: Vec<String> =
            Combinations::new(["abc"], &tokens, &config(GenerationMode::Basic, 1, 64)).take(4).collect();

        assert_eq!(out, vec!["abc", "abc1", "abc-1", "abc2024"]);
        let all: Vec<String> =
            Combinations::new(["abc"], &tokens, &config(GenerationMode::Basic, 1, 64)).collect();
        assert!(all.iter().all(|c| !c.contains('!')));
    }

    #[test]
    fn test_full_mode_order() {
        let tokens = TokenSets {
            numbers: strings(&["", "1"]),
            symbols: strings(&["", "!"]),
            separators: strings(&["", "-"]),
            year_tokens: strings(&["99"]),
            ..TokenSets::empty()
        };
        let out: Vec<String> =
            Combinations::new(["ab"], &tokens, &config(GenerationMode::Full, 0, 64)).take(11).collect();

        assert_eq!(
            out,
            vec!["ab", "ab", "ab!", "ab1", "ab!1", "ab", "ab!", "ab-1", "ab!-1", "ab99", "ab99!"]
        );
    }

    #[test]
    fn test_prefix_suffix_nesting() {
        let tokens = TokenSets {
            prefixes: strings(&["", "x"]),
            suffixes: strings(&["", "y"]),
            ..TokenSets::empty()
        };
        let out: Vec<String> =
            Combinations::new(["ab"], &tokens, &config(GenerationMode::Basic, 0, 64)).take(4).collect();
        assert_eq!(out, vec!["ab", "aby", "xab", "xaby"]);
    }

    #[test]
    fn test_empty_inputs_yield_nothing() {
        let tokens = TokenSets::default();
        let empty: Vec<&str> = Vec::new();
        assert_eq!(Combinations::new(empty, &tokens, &GenerationConfig::default()).count(), 0);
        assert_eq!(Combinations::new(["", "  "], &tokens, &GenerationConfig::default()).count(), 0);

        let no_prefixes = TokenSets {
            prefixes: Vec::new(),
            ..TokenSets::default()
        };
        assert_eq!(Combinations::new(["admin"], &no_prefixes, &GenerationConfig::default()).count(), 0);
    }

    #[test]
    fn test_length_filter_holds() {
        let tokens = TokenSets::default();
        let cfg = GenerationConfig {
            mode: GenerationMode::Full,
            min_len: 6,
            max_len: 9,
            use_leet: true,
            ..Default::default()
        };
        let mut count = 0;
        for candidate in Combinations::new(["admin", "root"], &tokens, &cfg) {
            let len = candidate.chars().count();
            assert!((6..=9).contains(&len), "{} out of range", candidate);
            count += 1;
        }
        assert!(count > 0);
    }

    #[test]
    fn test_inverted_bounds_yield_nothing() {
        let tokens = TokenSets::default();
        assert_eq!(
            Combinations::new(["admin"], &tokens, &config(GenerationMode::Full, 10, 3)).count(),
            0
        );
    }

    #[test]
    fn test_duplicate_base_words_are_expanded_once() {
        let tokens = TokenSets::empty();
        let cfg = config(GenerationMode::Basic, 0, 64);
        let once: Vec<String> = Combinations::new(["root"], &tokens, &cfg).collect();
        let twice: Vec<String> = Combinations::new(["root", " root "], &tokens, &cfg).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_deterministic() {
        let tokens = TokenSets::default();
        let cfg = GenerationConfig {
            mode: GenerationMode::Full,
            use_leet: true,
            ..Default::default()
        };
        let a: Vec<String> = Combinations::new(["blue-sky", "admin"], &tokens, &cfg).collect();
        let b: Vec<String> = Combinations::new(["blue-sky", "admin"], &tokens, &cfg).collect();
        assert_eq!(a, b);
        assert!(a.contains(&"BlueSky".to_string()));
    }
}
