//! Error types for the engine and its host layer

use thiserror::Error;

/// Result type alias using our EngineError
pub type Result<T> = std::result::Result<T, EngineError>;

/// Main error type for engine and host operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Engine parameters that would make the threshold comparisons meaningless
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// Configuration source errors (file, environment)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Quote or fill for a symbol that is not one of the two tracked legs
    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    /// Quoted or filled prices beyond what `Decimal` arithmetic can hold
    #[error("Price arithmetic overflow: {0}")]
    PriceOverflow(String),

    /// The order transport refused an intent pair
    #[error("Order submission failed: {0}")]
    Submission(String),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O errors from the feed or output streams
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Channel send errors
    #[error("Channel send error: {0}")]
    ChannelSend(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl<T> From<tokio::sync::mpsc::error::TrySendError<T>> for EngineError {
    fn from(err: tokio::sync::mpsc::error::TrySendError<T>) -> Self {
        match err {
            tokio::sync::mpsc::error::TrySendError::Full(_) => {
                EngineError::Submission("intent channel is full".to_string())
            }
            tokio::sync::mpsc::error::TrySendError::Closed(_) => {
                EngineError::Submission("intent channel is closed".to_string())
            }
        }
    }
}
