use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("snapshot directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read snapshot directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read snapshot {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot {path} must be a JSON array of objects ({message})")]
    InvalidShape { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
