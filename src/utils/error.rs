//! Error types for save settings.
//!
//! Building settings never fails. These errors come from the opt-in
//! validation layer, format parsing and JSON config loading.

use thiserror::Error;
use serde::Serialize;

/// Validation errors for built settings.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    /// Compression quality outside 0..=100
    #[error("Invalid quality value: {0}. Must be between 0 and 100")]
    Quality(u32),
    /// Unusable render size override
    #[error("Size error: {0}")]
    Size(String),
}

/// Main error type for the crate.
#[derive(Error, Debug, Serialize)]
pub enum SaveError {
    /// Settings validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),

    /// Settings could not be read from or written to JSON
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for save settings operations.
pub type SaveResult<T> = Result<T, SaveError>;

impl SaveError {
    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

impl ValidationError {
    pub fn size(msg: impl Into<String>) -> Self {
        Self::Size(msg.into())
    }
}

// serde_json errors carry line/column info in their Display
impl From<serde_json::Error> for SaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
