//! Error types
//!
//! Only configuration loading can fail. Gameplay calls are infallible and
//! treat misuse as a precondition violation instead.

/// Core error type for Brick Drop.
#[derive(thiserror::Error, Debug)]
pub enum BrickDropError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A tunable is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type used throughout the crate.
pub type BrickDropResult<T> = Result<T, BrickDropError>;
