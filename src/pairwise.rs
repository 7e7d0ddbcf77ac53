//! Bulk similarity scoring
//!
//! Vectors are immutable and `Sync`, so many comparisons fan out over rayon
//! without locking. Scores come back in input order; nothing here sorts,
//! filters or truncates.

use std::hash::Hash;

use rayon::prelude::*;

use crate::math::cosine_similarity;
use crate::vector::WeightedVector;

/// Score `query` against every candidate.
///
/// `result[i]` is the cosine similarity between `query` and `candidates[i]`.
pub fn similarities<T>(query: &WeightedVector<T>, candidates: &[WeightedVector<T>]) -> Vec<f64>
where
    T: Eq + Hash + Send + Sync,
{
    let _span = tracing::info_span!("similarities", candidates = candidates.len()).entered();
    candidates
        .par_iter()
        .map(|candidate| cosine_similarity(query, candidate))
        .collect()
}

/// Full symmetric similarity matrix for `vectors`.
///
/// `matrix[i][j] == matrix[j][i]` is the cosine similarity of vectors `i` and
/// `j`. Each unordered pair is scored once (rows of the upper triangle run in
/// parallel). The diagonal is `1.0` for normal vectors and `0.0` for
/// degenerate all-zero ones.
pub fn similarity_matrix<T>(vectors: &[WeightedVector<T>]) -> Vec<Vec<f64>>
where
    T: Eq + Hash + Send + Sync,
{
    let n = vectors.len();
    let _span = tracing::info_span!("similarity_matrix", vectors = n).entered();

    let upper: Vec<Vec<f64>> = vectors
        .par_iter()
        .enumerate()
        .map(|(i, a)| vectors[i..].iter().map(|b| cosine_similarity(a, b)).collect())
        .collect();

    let mut matrix = vec![vec![0.0; n]; n];
    for (i, row) in upper.into_iter().enumerate() {
        for (offset, score) in row.into_iter().enumerate() {
            let j = i + offset;
            matrix[i][j] = score;
            matrix[j][i] = score;
        }
    }

    tracing::debug!(pairs = n * (n + 1) / 2, "Similarity matrix complete");
    matrix
}
