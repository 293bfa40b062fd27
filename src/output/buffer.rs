//! Buffered output path for unique and shuffled wordlists
//!
//! Memory use is proportional to the number of candidates kept.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Drop repeats, keeping the first occurrence of each line
pub fn dedup_in_order<I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    lines.into_iter().filter(|l| seen.insert(l.clone())).collect()
}

/// Materialize candidates for the buffered write path.
///
/// Without shuffling, collection stops as soon as `limit` lines (distinct
/// lines when `unique`) are held, so the result has exactly
/// `min(limit, available)` entries. Shuffling needs the whole sequence to
/// draw a uniform permutation, and only then truncates to `limit`.
pub fn collect_buffered<I, R>(candidates: I, unique: bool, shuffle: bool, limit: usize, rng: &mut R) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    R: Rng + ?Sized,
{
    let bounded = limit > 0 && !shuffle;
    let mut seen = HashSet::new();
    let mut collected = Vec::new();

    for candidate in candidates {
        if bounded && collected.len() >= limit {
            break;
        }
        if unique && !seen.insert(candidate.clone()) {
            continue;
        }
        collected.push(candidate);
    }

    tracing::debug!(collected = collected.len(), unique, shuffle, "Buffered candidates");

    if shuffle {
        collected.shuffle(rng);
    }
    if limit > 0 {
        collected.truncate(limit);
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_in_order_is_idempotent() {
        let once = dedup_in_order(lines(&["b", "a", "b", "c", "a"]));
        assert_eq!(once, vec!["b", "a", "c"]);
        assert_eq!(dedup_in_order(once.clone()), once);
    }

    #[test]
    fn test_unique_limit_is_exact() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = lines(&["a", "a", "a", "a", "b", "b", "c", "d"]);
        let out = collect_buffered(input, true, false, 3, &mut rng);
        assert_eq!(out, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_limit_without_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = collect_buffered(lines(&["a", "a", "b"]), false, false, 2, &mut rng);
        assert_eq!(out, vec!["a", "a"]);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let input: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let mut out = collect_buffered(input.clone(), false, true, 0, &mut rng);
        assert_eq!(out.len(), 100);
        out.sort_by_key(|s| s.parse::<u32>().unwrap());
        assert_eq!(out, input);
    }

    #[test]
    fn test_shuffle_with_unique_and_limit() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = lines(&["x", "y", "x", "z", "y", "w"]);
        let out = collect_buffered(input, true, true, 3, &mut rng);
        assert_eq!(out.len(), 3);
        let distinct: HashSet<&String> = out.iter().collect();
        assert_eq!(distinct.len(), 3);
    }

    #[test]
    fn test_shuffle_is_seed_dependent_only() {
        let input: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let a = collect_buffered(input.clone(), false, true, 0, &mut StdRng::seed_from_u64(9));
        let b = collect_buffered(input, false, true, 0, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
