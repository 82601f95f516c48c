// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GnarlyError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Parse error: source is not syntactically valid (file: {file})")]
    Parse { file: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GnarlyError>;

// Allow `?` on std::io::Error by converting to GnarlyError::Io with unknown path.
impl From<std::io::Error> for GnarlyError {
    fn from(source: std::io::Error) -> Self {
        GnarlyError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for GnarlyError {
    fn from(e: walkdir::Error) -> Self {
        GnarlyError::Other(e.to_string())
    }
}
