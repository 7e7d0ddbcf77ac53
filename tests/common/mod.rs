//! Common test fixtures and helpers
//!
//! Usage in test files:
//! ```ignore
//! mod common;
//! use common::{doc, init_tracing};
//! ```

#![allow(dead_code)]

use termvec::{TermFrequency, WeightedVector};

/// Install a test-writer tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Whitespace-split `text` into owned tokens.
pub fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Term-frequency vector over the whitespace tokens of `text`.
pub fn doc(text: &str) -> WeightedVector<String> {
    WeightedVector::new(tokens(text), &TermFrequency)
}

/// Sum of squared weights, square-rooted, computed independently of the crate.
pub fn naive_norm<T>(vector: &WeightedVector<T>) -> f64
where
    T: Eq + std::hash::Hash,
{
    vector.weights().values().map(|w| w * w).sum::<f64>().sqrt()
}
