//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Session cookie and admin credential configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `mail` - SMTP fallback transports and sender identity
//! - `otp` - One-time password lifetime and sweeping
//! - `server` - HTTP server configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod mail;
pub mod otp;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::{MailConfig, SmtpEndpoint, SmtpSecurity};
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Session and admin configuration
    pub auth: AuthConfig,

    /// One-time password configuration
    pub otp: OtpConfig,

    /// Outbound mail configuration
    pub mail: MailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            otp: OtpConfig::default(),
            mail: MailConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Callers are expected to load any `.env` file before calling this.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(environment),
            otp: OtpConfig::from_env(),
            mail: MailConfig::from_env(),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is missing or malformed.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Read a non-empty environment variable.
pub(crate) fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
