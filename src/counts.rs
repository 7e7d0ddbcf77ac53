//! Term-count aggregation
//!
//! Collapses a token stream into `token -> occurrences`, the input every
//! weighting scheme starts from.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence count per distinct token.
pub type TermCounts<T> = HashMap<T, u64>;

/// Count how many times each distinct token appears in `tokens`.
///
/// One pass over the input. Tokens that never appear get no entry (there
/// are no zero counts in the result).
///
/// # Example
///
/// ```
/// use termvec::counts::term_counts;
///
/// let counts = term_counts(["a", "a", "b"]);
/// assert_eq!(counts["a"], 2);
/// assert_eq!(counts["b"], 1);
/// assert_eq!(counts.len(), 2);
/// ```
pub fn term_counts<T, I>(tokens: I) -> TermCounts<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let tokens = tokens.into_iter();
    let mut counts = HashMap::with_capacity(tokens.size_hint().0);
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_duplicates() {
        let counts = term_counts(["the", "cat", "the", "hat", "the"]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts["the"], 3);
        assert_eq!(counts["cat"], 1);
        assert_eq!(counts["hat"], 1);
    }

    #[test]
    fn test_counts_empty() {
        let counts = term_counts(Vec::<String>::new());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_counts_owned_strings() {
        let tokens: Vec<String> = "to be or not to be"
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let counts = term_counts(tokens);
        assert_eq!(counts.get("to"), Some(&2));
        assert_eq!(counts.get("be"), Some(&2));
        assert_eq!(counts.get("or"), Some(&1));
        assert_eq!(counts.get("missing"), None);
    }

    #[test]
    fn test_counts_sum_matches_input_len() {
        let tokens = [1u32, 2, 3, 1, 2, 1, 7];
        let counts = term_counts(tokens);
        assert_eq!(counts.values().sum::<u64>(), tokens.len() as u64);
    }
}
