use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapTransformError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Malformed quoting: quoted field opened on line {line} is never closed")]
    MalformedQuoting { line: usize },

    #[error("Invalid translation table: {0}")]
    InvalidTranslationTable(String),
}

pub type Result<T> = std::result::Result<T, MapTransformError>;

impl MapTransformError {
    /// Maps a `NotFound` I/O error onto `FileNotFound` carrying the path.
    pub fn from_open(err: std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            MapTransformError::FileNotFound(path.display().to_string())
        } else {
            MapTransformError::IoError(err)
        }
    }
}
