//! Tests for domain error conversion and client-facing messages

use atom_shared::validation::PasswordRule;

use crate::errors::{AuthError, DomainError, MailError, RegistrationError, ValidationError};

#[test]
fn test_auth_error_bridges_into_domain_error() {
    let err: DomainError = AuthError::OtpExpired.into();
    assert_eq!(err.to_string(), "OTP has expired. Please request a new one.");
    assert_eq!(err.code(), "OTP_EXPIRED");
    assert!(!err.is_internal());
}

#[test]
fn test_weak_password_uses_rule_message() {
    let err: DomainError = ValidationError::WeakPassword(PasswordRule::Digit).into();
    assert_eq!(err.to_string(), "Password must contain at least 1 number.");
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[test]
fn test_missing_fields_message_is_verbatim() {
    let err = ValidationError::missing("Email is required.");
    assert_eq!(err.to_string(), "Email is required.");
}

#[test]
fn test_registration_conflict_code() {
    let err: DomainError = RegistrationError::AlreadyRegistered.into();
    assert_eq!(err.code(), "CONFLICT");
    assert_eq!(err.to_string(), "You are already registered for this event.");
}

#[test]
fn test_mail_and_internal_errors() {
    let err: DomainError =
        MailError::transport("smtp.example.com:25 (plain)", "connection refused").into();
    assert_eq!(err.code(), "MAIL_DELIVERY_FAILED");
    assert!(err.to_string().contains("connection refused"));

    let err = DomainError::Database {
        message: "pool timed out".to_string(),
    };
    assert!(err.is_internal());
    assert_eq!(err.code(), "DATABASE_ERROR");
}
