//! Error types for mv-render.

use std::path::PathBuf;

use thiserror::Error;

use mv_network::NetworkError;

/// Errors that can occur when building or writing map layers.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("{} already holds a layer document", .0.display())]
    AlreadyWritten(PathBuf),

    #[error("layer writer used after finish()")]
    Finished,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, RenderError>`.
pub type RenderResult<T> = Result<T, RenderError>;
