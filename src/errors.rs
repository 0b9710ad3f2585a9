use thiserror::Error;

/// Error type that captures common journal and persistence failures.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("position {position} out of range for {len} entries")]
    OutOfRange { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, JournalError>;
