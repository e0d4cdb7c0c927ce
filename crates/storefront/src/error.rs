//! Storefront error types.
//!
//! Only loading can fail. Cart, lookup and pipeline operations normalize
//! their inputs instead of returning errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the catalog or configuration.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A catalog or config file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a valid product list.
    #[error("Invalid catalog JSON: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// The storefront config could not be parsed.
    #[error("Invalid config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// The storefront config could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::ser::Error> for StorefrontError {
    fn from(e: toml::ser::Error) -> Self {
        StorefrontError::Serialization(e.to_string())
    }
}
