// SPDX-License-Identifier: MIT

//! Typed error handling for order-color
//!
//! Evaluation itself never fails. These errors only come out of loading
//! configuration and cart fixtures.

use thiserror::Error;

/// Top-level error type for order-color
#[derive(Debug, Error)]
pub enum ConditionError {
    /// Configuration values that cannot drive a condition (empty codes, empty target)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

impl ConditionError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create from a generic message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<&str> for ConditionError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<String> for ConditionError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

/// Convenience result alias
pub type Result<T> = std::result::Result<T, ConditionError>;
