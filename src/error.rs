//! Error types shared across the crate.
//!
//! The per-frame simulation itself is infallible; these cover the edges where
//! text or storage comes in from outside.

use std::io;

/// A color string that is not exactly `#RRGGBB`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid hex color: {0:?} (expected #RRGGBB)")]
    InvalidHex(String),
}

/// Errors loading or validating a [`crate::Tuning`] file.
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Tuning parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tuning value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors reading or writing the persisted best score.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed best score record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
