use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CombineError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Not a text file: {path}")]
    NotText { path: PathBuf },
}
impl CombineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CombineError::Io {
            path: path.into(),
            source,
        }
    }
}
