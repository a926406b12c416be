//! Network-subsystem error type.

use thiserror::Error;

use mv_core::CoreError;

/// Errors produced by `mv-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The name is not a key of the station table.  Callers are expected to
    /// offer only known names, so this usually indicates a programming error.
    #[error("unknown station {0:?}")]
    UnknownStation(String),

    #[error("station {0:?} defined more than once")]
    DuplicateStation(String),

    #[error("line {0:?} defined more than once")]
    DuplicateLine(String),

    #[error("too many {0} for the id type")]
    Capacity(&'static str),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
