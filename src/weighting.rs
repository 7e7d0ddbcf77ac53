//! Weighting strategies
//!
//! A [`WeightFunction`] turns `(token, count)` into a raw, un-normalized
//! weight. Any `Fn(&T, u64) -> f64` closure is one; the built-in schemes
//! cover the usual term-frequency variants, and [`TfIdf`] wraps a
//! caller-supplied document-frequency table.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Maps a token and its occurrence count to a raw weight.
///
/// Called exactly once per distinct token during vector construction. Must
/// be deterministic for a given `(token, count)` within one construction and
/// must return a finite value.
pub trait WeightFunction<T> {
    fn weight(&self, token: &T, count: u64) -> f64;
}

impl<T, F> WeightFunction<T> for F
where
    F: Fn(&T, u64) -> f64,
{
    fn weight(&self, token: &T, count: u64) -> f64 {
        self(token, count)
    }
}

/// Raw count: `weight = count`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermFrequency;

impl<T> WeightFunction<T> for TermFrequency {
    fn weight(&self, _token: &T, count: u64) -> f64 {
        count as f64
    }
}

/// Presence only: every token present weighs `1.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

impl<T> WeightFunction<T> for Binary {
    fn weight(&self, _token: &T, count: u64) -> f64 {
        if count == 0 {
            0.0
        } else {
            1.0
        }
    }
}

/// Sublinear frequency: `weight = 1 + ln(count)`.
///
/// Dampens long documents that repeat a handful of tokens many times.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFrequency;

impl<T> WeightFunction<T> for LogFrequency {
    fn weight(&self, _token: &T, count: u64) -> f64 {
        if count == 0 {
            0.0
        } else {
            1.0 + (count as f64).ln()
        }
    }
}

/// Token-independent schemes selectable by name (see [`crate::Config`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightingScheme {
    #[default]
    TermFrequency,
    Binary,
    LogFrequency,
}

impl<T> WeightFunction<T> for WeightingScheme {
    fn weight(&self, token: &T, count: u64) -> f64 {
        match self {
            WeightingScheme::TermFrequency => TermFrequency.weight(token, count),
            WeightingScheme::Binary => Binary.weight(token, count),
            WeightingScheme::LogFrequency => LogFrequency.weight(token, count),
        }
    }
}

impl std::fmt::Display for WeightingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightingScheme::TermFrequency => write!(f, "term-frequency"),
            WeightingScheme::Binary => write!(f, "binary"),
            WeightingScheme::LogFrequency => write!(f, "log-frequency"),
        }
    }
}

/// TF-IDF over a caller-supplied document-frequency table.
///
/// `weight = tf(count) * idf(token)` with smoothed
/// `idf = ln((N + 1) / (df + 1)) + 1`, where `N` is the corpus size. Tokens
/// missing from the table are treated as `df = 0` (rarest possible), so
/// out-of-corpus tokens still get a positive weight.
///
/// Building the table is the caller's job; this type only reads it.
#[derive(Debug, Clone)]
pub struct TfIdf<T> {
    doc_freq: HashMap<T, u64>,
    total_docs: u64,
    tf: WeightingScheme,
}

impl<T: Eq + Hash> TfIdf<T> {
    /// `doc_freq[token]` is the number of documents containing `token`;
    /// `total_docs` is the number of documents in the corpus.
    pub fn new(doc_freq: HashMap<T, u64>, total_docs: u64) -> Self {
        Self {
            doc_freq,
            total_docs,
            tf: WeightingScheme::TermFrequency,
        }
    }

    /// Use a different term-frequency component (e.g. log frequency for
    /// sublinear TF-IDF).
    pub fn with_tf(mut self, tf: WeightingScheme) -> Self {
        self.tf = tf;
        self
    }

    pub fn idf(&self, token: &T) -> f64 {
        let df = self.doc_freq.get(token).copied().unwrap_or(0);
        let n = self.total_docs as f64;
        ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0
    }

    pub fn total_docs(&self) -> u64 {
        self.total_docs
    }
}

impl<T: Eq + Hash> WeightFunction<T> for TfIdf<T> {
    fn weight(&self, token: &T, count: u64) -> f64 {
        self.tf.weight(token, count) * self.idf(token)
    }
}
