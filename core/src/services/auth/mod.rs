//! Authentication service module
//!
//! This module provides:
//! - Signup and login with bcrypt password hashing
//! - OTP-based password reset delivered by email
//! - Admin-initiated password reset

mod config;
pub mod password;
mod service;
mod templates;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::{AuthService, SignupInput};
pub use templates::{password_reset_email, PASSWORD_RESET_SUBJECT};
