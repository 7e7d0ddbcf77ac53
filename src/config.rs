//! Configuration file support for termvec
//!
//! Holds the defaults callers usually want to pick once per corpus rather
//! than per call: which built-in weighting scheme to use and what to do with
//! zero-norm documents.
//!
//! # Example
//!
//! ```toml
//! # termvec.toml
//! weighting = "log-frequency"   # term-frequency | binary | log-frequency
//! zero_norm = "reject"          # zero | reject
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vector::ZeroNormPolicy;
use crate::weighting::WeightingScheme;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Vector construction defaults.
///
/// Every field is optional in the file; missing ones take the
/// [`Default`] value (term frequency, all-zero vectors for zero-norm input).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in scheme used by [`crate::WeightedVector::from_config`]
    pub weighting: WeightingScheme,
    /// Zero-norm handling used by [`crate::WeightedVector::from_config`]
    pub zero_norm: ZeroNormPolicy,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error and yields [`Config::default`]. An
    /// unreadable or malformed file is.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return Err(e.into());
            }
        };

        let config = Self::from_toml_str(&content).inspect_err(|e| {
            tracing::warn!("Failed to parse config {}: {}", path.display(), e);
        })?;
        tracing::debug!(
            path = %path.display(),
            weighting = %config.weighting,
            zero_norm = ?config.zero_norm,
            "Loaded config"
        );
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
