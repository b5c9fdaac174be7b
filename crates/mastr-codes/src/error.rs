#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CodesError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse code tables {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("code tables {path}: status code {code} has unknown label '{label}'")]
    UnknownStatusLabel {
        path: PathBuf,
        code: String,
        label: String,
    },

    #[error("code tables {path}: status table is empty")]
    EmptyStatusTable { path: PathBuf },
}

impl CodesError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodesError>;
