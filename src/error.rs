use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BettiError {
    #[error("Not Found: '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("IO Error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse Error in '{}': token #{position} ('{token}') is not a non-negative integer", path.display())]
    Parse {
        path: PathBuf,
        position: usize,
        token: String,
    },

    #[error("Empty File: '{}' contains no Betti numbers", path.display())]
    EmptyFile { path: PathBuf },

    #[error("Empty Bucket: probability '{bucket}' has no matching result files")]
    EmptyBucket { bucket: String },

    #[error("Dimension Mismatch in '{}': expected {expected} dimensions, found {found}", path.display())]
    DimensionMismatch {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Overflow in '{}': running total for dimension {dimension} exceeds u64", path.display())]
    Overflow { path: PathBuf, dimension: usize },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

impl BettiError {
    /// Maps an I/O failure on `path`, promoting `NotFound` to its own variant.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            BettiError::NotFound { path }
        } else {
            BettiError::Io { path, source }
        }
    }
}

pub type BtResult<T> = Result<T, BettiError>;
