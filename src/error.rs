//! Error types for the sampler crate.
//!
//! Synthesis itself never fails: unresolved types become warnings in the
//! generated request. Only loading configuration and descriptors can error.

use thiserror::Error;

/// Errors that can occur while loading sampler inputs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SamplerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),
}

pub type Result<T> = std::result::Result<T, SamplerError>;
