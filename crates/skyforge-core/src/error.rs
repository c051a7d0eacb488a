use thiserror::Error;

/// Core error types for Skyforge domain operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid resource key: {0}")]
    InvalidKey(String),

    #[error("Invalid deployment context: {0}")]
    InvalidContext(String),
}

impl CoreError {
    /// Create a new InvalidKey error
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey(message.into())
    }

    /// Create a new InvalidContext error
    pub fn invalid_context(message: impl Into<String>) -> Self {
        Self::InvalidContext(message.into())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
