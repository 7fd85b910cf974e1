// Central Error Type for the Application

use thiserror::Error;

/// Caller-facing text for every failure that is not the caller's fault
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message safe to hand back across the service boundary.
    ///
    /// InvalidArgument and NotFound carry their own text; everything else
    /// collapses to [`INTERNAL_MESSAGE`] so no store error text leaks.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidArgument(msg) | AppError::NotFound(msg) => msg.clone(),
            _ => INTERNAL_MESSAGE.to_string(),
        }
    }
}

impl From<crate::domain::DomainError> for AppError {
    fn from(err: crate::domain::DomainError) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Database(String)
