//! Shared utilities and common types for the ATOM 2K26 server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures and error codes
//! - Input validators and log masking helpers
//! - Common response wrappers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, MailConfig, OtpConfig, ServerConfig,
    SmtpEndpoint, SmtpSecurity,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{CountedResponse, HealthResponse, MessageResponse};
pub use utils::{masking, validation};
