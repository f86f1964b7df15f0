//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the ATOM 2K26 backend.
//! It provides concrete implementations for the repository and mail traits
//! defined in `atom_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool, embedded migrations and repositories using SQLx
//! - **Mail**: SMTP transports built on lettre, a logging transport for development,
//!   and the factory assembling them into a fallback mailer

use atom_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail module - SMTP and logging transports
pub mod mail;

pub use database::{DatabasePool, MySqlRegistrationRepository, MySqlUserRepository};
pub use mail::{create_mailer, LogMailTransport, SmtpMailTransport};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail transport setup error
    #[error("Mail error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Database {
            message: err.to_string(),
        }
    }
}
