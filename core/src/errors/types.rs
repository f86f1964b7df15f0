//! Error types for authentication, validation, event registration and mail delivery
//!
//! Display strings are the exact messages returned to API clients.

use atom_shared::validation::PasswordRule;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already exists. Please login instead.")]
    EmailAlreadyExists,

    #[error("Mobile number already registered.")]
    MobileAlreadyRegistered,

    #[error("Email not found. Please register first.")]
    EmailNotRegistered,

    #[error("No account found with that email.")]
    AccountNotFound,

    #[error("Invalid password. Please try again.")]
    InvalidPassword,

    #[error("Invalid OTP. Please check and try again.")]
    OtpInvalid,

    #[error("OTP has expired. Please request a new one.")]
    OtpExpired,

    #[error("Invalid OTP.")]
    ResetOtpInvalid,

    #[error("OTP expired. Please restart the reset process.")]
    ResetOtpExpired,

    #[error("Not authenticated. Please log in.")]
    NotAuthenticated,

    #[error("Admin password required.")]
    AdminPasswordRequired,

    #[error("Invalid admin credentials.")]
    InvalidAdminCredentials,
}

impl AuthError {
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            AuthError::MobileAlreadyRegistered => "MOBILE_ALREADY_REGISTERED",
            AuthError::EmailNotRegistered | AuthError::AccountNotFound => "USER_NOT_FOUND",
            AuthError::InvalidPassword => "INVALID_PASSWORD",
            AuthError::OtpInvalid | AuthError::ResetOtpInvalid => "OTP_INVALID",
            AuthError::OtpExpired | AuthError::ResetOtpExpired => "OTP_EXPIRED",
            AuthError::NotAuthenticated | AuthError::AdminPasswordRequired => "UNAUTHORIZED",
            AuthError::InvalidAdminCredentials => "FORBIDDEN",
        }
    }
}

/// Request validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{message}")]
    MissingFields { message: String },

    #[error("Username must be at least 4 characters.")]
    InvalidUsername,

    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Mobile number must be exactly 10 digits.")]
    InvalidMobile,

    #[error("{}", .0.message())]
    WeakPassword(PasswordRule),
}

impl ValidationError {
    pub fn missing(message: impl Into<String>) -> Self {
        ValidationError::MissingFields {
            message: message.into(),
        }
    }
}

/// Event registration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("No event name provided.")]
    MissingEvent,

    #[error("You are already registered for this event.")]
    AlreadyRegistered,
}

impl RegistrationError {
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationError::MissingEvent => "VALIDATION_ERROR",
            RegistrationError::AlreadyRegistered => "CONFLICT",
        }
    }
}

/// Mail delivery errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    #[error("Mail transport {transport} failed: {message}")]
    Transport { transport: String, message: String },

    #[error("Mail transport {transport} timed out after {seconds}s")]
    Timeout { transport: String, seconds: u64 },

    #[error("No mail transports configured")]
    NoTransports,

    #[error("Failed to build mail message: {message}")]
    Build { message: String },
}

impl MailError {
    pub fn transport(transport: impl Into<String>, message: impl ToString) -> Self {
        MailError::Transport {
            transport: transport.into(),
            message: message.to_string(),
        }
    }
}
