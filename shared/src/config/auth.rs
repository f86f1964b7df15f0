//! Session and admin authentication configuration

use serde::{Deserialize, Serialize};

use super::{env_opt, env_or, Environment};

/// Name of the session cookie issued on signup/login
pub const SESSION_COOKIE_NAME: &str = "atom_session";

/// Session cookie and admin guard configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign session cookies
    #[serde(skip_serializing)]
    pub session_secret: String,

    /// Session lifetime in hours
    pub session_max_age_hours: i64,

    /// Whether the session cookie carries the `Secure` flag
    pub secure_cookies: bool,

    /// Bcrypt hash of the admin panel password
    #[serde(skip_serializing)]
    pub admin_password_hash: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: String::from("dev-session-secret-change-in-production"),
            session_max_age_hours: 24,
            secure_cookies: false,
            admin_password_hash: None,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// `Secure` cookies are enabled in production.
    pub fn from_env(environment: Environment) -> Self {
        let defaults = Self::default();
        Self {
            session_secret: env_opt("SESSION_SECRET").unwrap_or(defaults.session_secret),
            session_max_age_hours: env_or("SESSION_MAX_AGE_HOURS", defaults.session_max_age_hours),
            secure_cookies: environment.is_production(),
            admin_password_hash: env_opt("ADMIN_PASSWORD_HASH"),
        }
    }

    /// Session lifetime in seconds
    pub fn session_max_age_seconds(&self) -> i64 {
        self.session_max_age_hours * 3600
    }
}
