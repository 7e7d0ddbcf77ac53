//! Weighted, L2-normalized sparse token vectors
//!
//! A [`WeightedVector`] is built once from a token sequence and a
//! [`WeightFunction`], then never changes. Building it:
//!
//! 1. counts each distinct token,
//! 2. asks the weight function for a raw weight per distinct token,
//! 3. divides every weight by the L2 norm of the raw weights.
//!
//! If every raw weight is zero there is no direction to normalize to; the
//! [`ZeroNormPolicy`] decides whether that yields an all-zero vector or an
//! error. Weights are never NaN.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use crate::counts::term_counts;
use crate::math::{cosine_similarity, l2_norm};
use crate::weighting::WeightFunction;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("All raw weights are zero; vector cannot be normalized")]
    ZeroNorm,
    #[error("Weight function returned non-finite weight {weight}")]
    NonFiniteWeight { weight: f64 },
}

/// What construction does when the raw weights have zero length.
///
/// Happens for an empty token sequence, or when the weight function returns
/// `0.0` for every token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroNormPolicy {
    /// Keep every token with weight `0.0`. The vector is not unit length and
    /// scores `0.0` against everything, itself included.
    #[default]
    Zero,
    /// Fail with [`VectorError::ZeroNorm`].
    Reject,
}

/// Unit-length sparse vector of token weights for one document.
///
/// Holds exactly one entry per distinct input token. Immutable after
/// construction, so it can be shared across threads and compared
/// concurrently without locking.
#[derive(Debug, Clone)]
pub struct WeightedVector<T> {
    weights: HashMap<T, f64>,
    /// Key set of `weights`, materialized on first [`tokens`](Self::tokens) call
    tokens: OnceCell<Vec<T>>,
}

impl<T: Eq + Hash> WeightedVector<T> {
    /// Build a vector from `tokens`, weighting each distinct token with
    /// `weighting`.
    ///
    /// Zero-norm input produces an all-zero vector ([`ZeroNormPolicy::Zero`]).
    ///
    /// # Panics
    ///
    /// If `weighting` returns NaN or an infinity. Use
    /// [`with_policy`](Self::with_policy) to get that as an error instead.
    ///
    /// # Example
    ///
    /// ```
    /// use termvec::{TermFrequency, WeightedVector};
    ///
    /// let v = WeightedVector::new(["a", "a", "b"], &TermFrequency);
    /// assert!((v.weight("a").unwrap() - 2.0 / 5f64.sqrt()).abs() < 1e-12);
    /// assert!((v.weight("b").unwrap() - 1.0 / 5f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn new<I, W>(tokens: I, weighting: &W) -> Self
    where
        I: IntoIterator<Item = T>,
        W: WeightFunction<T> + ?Sized,
    {
        let raw = Self::raw_weights(tokens, |token, count| {
            Ok::<_, Infallible>(weighting.weight(token, count))
        })
        .unwrap_or_else(|never| match never {});
        Self::normalize_or_panic(raw)
    }

    /// Build a vector with a fallible weight function.
    ///
    /// The first error returned by `weight` aborts construction and is
    /// returned unchanged; no partial vector is produced. Zero-norm input
    /// produces an all-zero vector.
    ///
    /// # Panics
    ///
    /// If `weight` returns `Ok` with NaN or an infinity.
    pub fn try_new<I, F, E>(tokens: I, weight: F) -> Result<Self, E>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T, u64) -> Result<f64, E>,
    {
        let raw = Self::raw_weights(tokens, weight)?;
        Ok(Self::normalize_or_panic(raw))
    }

    /// Build a vector with an explicit zero-norm policy.
    ///
    /// Contract violations by `weighting` (non-finite weights) come back as
    /// [`VectorError::NonFiniteWeight`] rather than panicking.
    pub fn with_policy<I, W>(
        tokens: I,
        weighting: &W,
        policy: ZeroNormPolicy,
    ) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = T>,
        W: WeightFunction<T> + ?Sized,
    {
        let raw = Self::raw_weights(tokens, |token, count| {
            Ok::<_, Infallible>(weighting.weight(token, count))
        })
        .unwrap_or_else(|never| match never {});
        Self::normalized(raw, policy)
    }

    /// Build a vector with the weighting scheme and zero-norm policy from
    /// `config`.
    pub fn from_config<I>(tokens: I, config: &Config) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_policy(tokens, &config.weighting, config.zero_norm)
    }

    fn raw_weights<I, F, E>(tokens: I, mut weight: F) -> Result<HashMap<T, f64>, E>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T, u64) -> Result<f64, E>,
    {
        let counts = term_counts(tokens);
        let mut weights = HashMap::with_capacity(counts.len());
        for (token, count) in counts {
            let w = weight(&token, count)?;
            weights.insert(token, w);
        }
        Ok(weights)
    }

    fn normalize_or_panic(raw: HashMap<T, f64>) -> Self {
        match Self::normalized(raw, ZeroNormPolicy::Zero) {
            Ok(vector) => vector,
            Err(e) => panic!("weight function broke its contract: {}", e),
        }
    }

    fn normalized(mut weights: HashMap<T, f64>, policy: ZeroNormPolicy) -> Result<Self, VectorError> {
        if let Some(&weight) = weights.values().find(|w| !w.is_finite()) {
            return Err(VectorError::NonFiniteWeight { weight });
        }

        let norm = l2_norm(weights.values().copied());
        if norm == 0.0 {
            match policy {
                ZeroNormPolicy::Zero => {
                    tracing::debug!(tokens = weights.len(), "Zero-norm input, keeping all-zero vector");
                    // -0.0 from the weight function would otherwise leak through
                    weights.values_mut().for_each(|w| *w = 0.0);
                }
                ZeroNormPolicy::Reject => {
                    tracing::debug!(tokens = weights.len(), "Zero-norm input rejected");
                    return Err(VectorError::ZeroNorm);
                }
            }
        } else {
            weights.values_mut().for_each(|w| *w /= norm);
            tracing::debug!(tokens = weights.len(), norm, "Built weighted vector");
        }

        Ok(Self {
            weights,
            tokens: OnceCell::new(),
        })
    }

    /// Read-only view of `token -> normalized weight`.
    pub fn weights(&self) -> &HashMap<T, f64> {
        &self.weights
    }

    /// Normalized weight of `token`, or `None` if it wasn't in the input.
    pub fn weight<Q>(&self, token: &Q) -> Option<f64>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.weights.get(token).copied()
    }

    pub fn contains<Q>(&self, token: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.weights.contains_key(token)
    }

    /// Iterate `(token, weight)` pairs in the same order as [`tokens`](Self::tokens).
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.weights.iter().map(|(token, &w)| (token, w))
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// True for the degenerate vector (empty, or every weight `0.0`).
    pub fn is_zero(&self) -> bool {
        self.weights.values().all(|&w| w == 0.0)
    }

    /// L2 norm of the stored weights: `1.0` up to rounding, `0.0` for the
    /// degenerate vector.
    pub fn norm(&self) -> f64 {
        l2_norm(self.weights.values().copied())
    }

    /// Cosine similarity with `other`. See [`crate::cosine_similarity`].
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        cosine_similarity(self, other)
    }
}

impl<T: Eq + Hash + Clone> WeightedVector<T> {
    /// Distinct tokens in this vector (the key set of [`weights`](Self::weights)).
    ///
    /// Computed on first call and cached; later calls return the same slice.
    pub fn tokens(&self) -> &[T] {
        self.tokens
            .get_or_init(|| self.weights.keys().cloned().collect())
    }
}
