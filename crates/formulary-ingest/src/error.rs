use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("source document not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("no text backend for {path} (supported: .pdf, .txt)")]
    MissingBackend { path: PathBuf },

    #[error("failed to extract text from {path}: {message}")]
    Extraction { path: PathBuf, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
