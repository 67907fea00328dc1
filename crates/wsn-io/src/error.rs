//! Error types for wsn-io.

use thiserror::Error;

/// Errors raised while reading node lists or writing round logs.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: unknown node role {role:?} (expected sensor, base or relay)")]
    UnknownRole { line: u64, role: String },
}

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;
