//! Rough output size estimate for progress display

use crate::types::GenerationMode;

/// Closed-form approximation of the number of candidates.
///
/// Ignores variant multiplication, separators and length filtering, so it is
/// only good for a banner.
pub fn estimate(
    base_words: usize,
    numbers: usize,
    symbols: usize,
    prefixes: usize,
    suffixes: usize,
    year_tokens: usize,
    mode: GenerationMode,
) -> u64 {
    let cores = (base_words as u64)
        .saturating_mul(prefixes as u64)
        .saturating_mul(suffixes as u64);
    let (n, s, y) = (numbers as u64, symbols as u64, year_tokens as u64);

    let per_core = match mode {
        GenerationMode::Basic => 1u64.saturating_add(n).saturating_add(y),
        GenerationMode::Full => {
            let with_symbols = 1u64.saturating_add(s);
            1u64.saturating_add(n.saturating_mul(with_symbols))
                .saturating_add(y.saturating_mul(with_symbols))
        }
    };

    cores.saturating_mul(per_core)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_estimate() {
        // 7 * 1 * 1 * (1 + 12 + 5)
        assert_eq!(estimate(7, 12, 11, 1, 1, 5, GenerationMode::Basic), 126);
    }

    #[test]
    fn test_full_estimate() {
        // 2 * 2 * 1 * (1 + 3*5 + 2*5)
        assert_eq!(estimate(2, 3, 4, 2, 1, 2, GenerationMode::Full), 104);
    }

    #[test]
    fn test_zero_words() {
        assert_eq!(estimate(0, 12, 11, 1, 1, 5, GenerationMode::Full), 0);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(
            estimate(usize::MAX, usize::MAX, usize::MAX, 2, 2, 1, GenerationMode::Full),
            u64::MAX
        );
    }
}
