//! Domain error types

use thiserror::Error;

/// Errors raised by a [`Generator`](crate::participant::generator::Generator) backend
///
/// The debate core never recovers from these: a failing generator aborts
/// the whole run and the error reaches the caller as-is.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generator unavailable: {0}")]
    Unavailable(String),

    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid generator output: {0}")]
    InvalidOutput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerationError {
    /// Check if the backend could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(self, GenerationError::Unavailable(_))
    }
}
