//! Math utilities for sparse vector operations
//!
//! L2 norm and sparse dot product over `token -> weight` maps. Everything
//! accumulates in `f64`.

use std::collections::HashMap;
use std::hash::Hash;

use crate::vector::WeightedVector;

/// Cosine similarity of two weighted vectors.
///
/// Both vectors are already unit length, so this is the sparse dot product
/// of their weight maps. Only tokens present in both vectors contribute;
/// cost is `O(min(|a|, |b|))` lookups.
///
/// Returns `0.0` when either vector is empty or all-zero, or when the
/// vocabularies are disjoint. The result is clamped to `[-1.0, 1.0]` to absorb
/// rounding (a self-similarity can otherwise come out as `1.0000000000000002`).
///
/// Exactly symmetric: `cosine_similarity(a, b) == cosine_similarity(b, a)`.
pub fn cosine_similarity<T: Eq + Hash>(a: &WeightedVector<T>, b: &WeightedVector<T>) -> f64 {
    let score = sparse_dot(a.weights(), b.weights()).clamp(-1.0, 1.0);
    tracing::trace!(a_len = a.len(), b_len = b.len(), score, "cosine similarity");
    score
}

/// Dot product of two sparse vectors keyed by token.
///
/// Iterates the smaller map and looks tokens up in the larger one. The map
/// to iterate is picked independently of argument order (size first, then
/// address), so swapping the arguments sums the same products in the same
/// order and gives a bit-identical result.
pub fn sparse_dot<T: Eq + Hash>(a: &HashMap<T, f64>, b: &HashMap<T, f64>) -> f64 {
    let (small, large) = if iterate_first(a, b) { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(token, weight)| large.get(token).map(|other| weight * other))
        .sum()
}

fn iterate_first<T>(a: &HashMap<T, f64>, b: &HashMap<T, f64>) -> bool {
    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => std::ptr::from_ref(a) <= std::ptr::from_ref(b),
    }
}

/// Euclidean length of a weight sequence.
///
/// Scales by the largest magnitude before squaring so huge weights don't
/// overflow to infinity and tiny ones don't underflow to zero. Returns `0.0`
/// for an empty or all-zero sequence. Inputs must be finite.
pub fn l2_norm<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let values = values.into_iter();
    let scale = values.clone().fold(0.0f64, |max, w| max.max(w.abs()));
    if scale == 0.0 {
        return 0.0;
    }
    let sum_sq: f64 = values
        .map(|w| {
            let s = w / scale;
            s * s
        })
        .sum();
    scale * sum_sq.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&'static str, f64)]) -> HashMap<&'static str, f64> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_l2_norm_basic() {
        assert!((l2_norm([3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert!((l2_norm([2.0, 1.0]) - 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_l2_norm_zero_and_empty() {
        assert_eq!(l2_norm([0.0, 0.0, -0.0]), 0.0);
        assert_eq!(l2_norm(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_l2_norm_no_overflow() {
        let norm = l2_norm([1e200, 1e200]);
        assert!(norm.is_finite());
        assert!((norm / 1e200 - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_l2_norm_no_underflow() {
        let norm = l2_norm([3e-200, 4e-200]);
        assert!(norm > 0.0);
        assert!((norm / 1e-200 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_sparse_dot_shared_only() {
        let a = map(&[("x", 0.5), ("y", 2.0)]);
        let b = map(&[("y", 3.0), ("z", 100.0)]);
        assert_eq!(sparse_dot(&a, &b), 6.0);
    }

    #[test]
    fn test_sparse_dot_disjoint_is_zero() {
        let a = map(&[("x", 1.0)]);
        let b = map(&[("y", 1.0), ("z", 1.0)]);
        assert_eq!(sparse_dot(&a, &b), 0.0);
    }

    #[test]
    fn test_sparse_dot_empty() {
        let a = map(&[]);
        let b = map(&[("y", 1.0)]);
        assert_eq!(sparse_dot(&a, &b), 0.0);
        assert_eq!(sparse_dot(&b, &a), 0.0);
        assert_eq!(sparse_dot(&a, &a), 0.0);
    }

    #[test]
    fn test_sparse_dot_symmetric_equal_sizes() {
        let a = map(&[("p", 0.1), ("q", 0.7), ("r", 0.3), ("s", 0.9)]);
        let b = map(&[("p", 0.4), ("q", 0.2), ("r", 0.8), ("t", 0.6)]);
        assert_eq!(sparse_dot(&a, &b).to_bits(), sparse_dot(&b, &a).to_bits());
    }

    #[test]
    fn test_iterate_first_prefers_smaller() {
        let small = map(&[("a", 1.0)]);
        let large = map(&[("a", 1.0), ("b", 1.0)]);
        assert!(iterate_first(&small, &large));
        assert!(!iterate_first(&large, &small));
        // Ties resolve the same way regardless of argument order
        let other = map(&[("c", 1.0)]);
        assert_ne!(iterate_first(&small, &other), iterate_first(&other, &small));
    }
}
