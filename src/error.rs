//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// The backing list store could not be reached or rejected a command (`redis`).
    #[error("Store unavailable: {0}")]
    Store(Arc<redis::RedisError>),

    /// A command keyword that is not in the command table (the empty line included).
    #[error("command '{0}' not valid")]
    InvalidCommand(String),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),
}

impl AppError {
    /// True when the error came from the backing store rather than from user input.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, AppError::Store(_))
    }
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Store(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redis_errors_map_to_store_unavailable() {
        let redis_err = redis::RedisError::from((redis::ErrorKind::IoError, "connection refused"));
        let err: AppError = redis_err.into();
        assert!(err.is_store_unavailable());
        assert!(err.to_string().starts_with("Store unavailable"));
    }

    #[test]
    fn invalid_command_message_names_the_keyword() {
        let err = AppError::InvalidCommand("frobnicate".to_string());
        assert!(!err.is_store_unavailable());
        assert_eq!(err.to_string(), "command 'frobnicate' not valid");
    }

    #[test]
    fn prompt_failures_map_to_dialoguer() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: AppError = dialoguer::Error::IO(io_err).into();
        assert!(!err.is_store_unavailable());
        assert!(matches!(err, AppError::Dialoguer(_)));
    }
}
