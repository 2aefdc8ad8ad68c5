use thiserror::Error;

/// Elo tracker error types
#[derive(Error, Debug)]
pub enum EloError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("History file error: {0}")]
    History(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Elo tracker operations
pub type Result<T> = std::result::Result<T, EloError>;
