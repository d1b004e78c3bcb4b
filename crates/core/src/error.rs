// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Process outcomes are never errors: a child that fails to launch or exits
/// non-zero is reported through `InvocationResult`. This type only covers
/// requests that cannot be turned into a command line.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
