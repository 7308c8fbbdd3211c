//! Error types for dial construction.

use thiserror::Error;

/// Errors raised while building a dial.
#[derive(Debug, Error)]
pub enum DialError {
    #[error("Symbol set is empty")]
    EmptySymbols,
    #[error("Duplicate symbol label: {0}")]
    DuplicateLabel(String),
    #[error("Invalid dial size: {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

/// Result type for dial operations.
pub type DialResult<T> = Result<T, DialError>;
