//! # termvec - Weighted term vectors
//!
//! Turns a tokenized document into a unit-length sparse vector keyed by
//! token, and scores pairs of such vectors by cosine similarity.
//!
//! ## Features
//!
//! - **Pluggable weighting**: any `Fn(&T, u64) -> f64`, or the built-in term
//!   frequency, binary, log frequency and TF-IDF schemes
//! - **Sparse dot product**: cost scales with the smaller vector, not the
//!   vocabulary
//! - **Explicit zero-norm policy**: empty or all-zero documents never
//!   produce NaN weights
//! - **Parallel bulk scoring**: one-vs-many and full similarity matrices via
//!   rayon
//!
//! Tokenization is up to the caller; tokens can be any `Eq + Hash + Clone`
//! type.
//!
//! ## Quick Start
//!
//! ```
//! use termvec::{cosine_similarity, TermFrequency, WeightedVector};
//!
//! let a = WeightedVector::new("x y".split_whitespace(), &TermFrequency);
//! let b = WeightedVector::new("y z".split_whitespace(), &TermFrequency);
//!
//! // Only the shared token "y" contributes: (1/√2)·(1/√2)
//! assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-12);
//! assert!((a.cosine_similarity(&a) - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Custom weighting
//!
//! ```
//! use std::collections::HashMap;
//! use termvec::{TfIdf, WeightedVector};
//!
//! // Document frequencies come from the caller's corpus
//! let df = HashMap::from([("the", 90u64), ("otter", 3)]);
//! let tfidf = TfIdf::new(df, 100);
//! let v = WeightedVector::new(["the", "otter", "the"], &tfidf);
//! assert!(v.weight("otter").unwrap() > v.weight("the").unwrap());
//! ```

pub mod config;
pub mod counts;
pub mod math;
pub mod pairwise;
pub mod vector;
pub mod weighting;

pub use config::{Config, ConfigError};
pub use math::cosine_similarity;
pub use pairwise::{similarities, similarity_matrix};
pub use vector::{VectorError, WeightedVector, ZeroNormPolicy};
pub use weighting::{
    Binary, LogFrequency, TermFrequency, TfIdf, WeightFunction, WeightingScheme,
};
