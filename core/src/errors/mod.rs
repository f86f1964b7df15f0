//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, MailError, RegistrationError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Mail(#[from] MailError),
}

impl DomainError {
    /// Stable machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Database { .. } => "DATABASE_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(err) => err.code(),
            DomainError::Validation(_) => "VALIDATION_ERROR",
            DomainError::Registration(err) => err.code(),
            DomainError::Mail(_) => "MAIL_DELIVERY_FAILED",
        }
    }

    /// Whether the message may leak implementation details to a client
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DomainError::Database { .. } | DomainError::Internal { .. }
        )
    }

    pub(crate) fn internal(message: impl ToString) -> Self {
        DomainError::Internal {
            message: message.to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
