//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("mobile pattern is valid"));

/// Minimum accepted username length
pub const MIN_USERNAME_LENGTH: usize = 4;

/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Lowercase and trim an email so it can be used as a lookup key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check if an email address looks deliverable (`something@host.tld`)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check if a mobile number is exactly ten digits
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile)
}

/// Check if a username is long enough
pub fn is_valid_username(username: &str) -> bool {
    username.trim().chars().count() >= MIN_USERNAME_LENGTH
}

/// A single password complexity rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    MinLength,
    Digit,
    Uppercase,
    Lowercase,
    Special,
}

/// Rules enforced when an account is created
pub const SIGNUP_PASSWORD_RULES: [PasswordRule; 5] = [
    PasswordRule::MinLength,
    PasswordRule::Digit,
    PasswordRule::Uppercase,
    PasswordRule::Lowercase,
    PasswordRule::Special,
];

/// Rules enforced when a password is reset
pub const RESET_PASSWORD_RULES: [PasswordRule; 4] = [
    PasswordRule::MinLength,
    PasswordRule::Uppercase,
    PasswordRule::Digit,
    PasswordRule::Special,
];

impl PasswordRule {
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            PasswordRule::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "Password must be at least 8 characters.",
            PasswordRule::Digit => "Password must contain at least 1 number.",
            PasswordRule::Uppercase => "Password must contain at least 1 uppercase letter.",
            PasswordRule::Lowercase => "Password must contain at least 1 lowercase letter.",
            PasswordRule::Special => "Password must contain at least 1 special character.",
        }
    }
}

/// Return the first rule, in order, that the password breaks
pub fn first_failed_rule(password: &str, rules: &[PasswordRule]) -> Option<PasswordRule> {
    rules.iter().copied().find(|rule| !rule.is_satisfied_by(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("student@psgtech.ac.in"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("student@psgtech"));
        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
    }

    #[test]
    fn test_mobile_validation() {
        assert!(is_valid_mobile("9876543210"));
        assert!(!is_valid_mobile("987654321"));
        assert!(!is_valid_mobile("98765432100"));
        assert!(!is_valid_mobile("98765abcde"));
    }

    #[test]
    fn test_mobile_rejects_non_ascii_digits() {
        assert!(!is_valid_mobile("٠١٢٣٤٥٦٧٨٩"));
        assert!(!is_valid_mobile("９８７６５４３２１０"));
    }

    #[test]
    fn test_username_validation() {
        assert!(is_valid_username("ravi"));
        assert!(!is_valid_username(" ab "));
    }

    #[test]
    fn test_signup_rules_report_in_order() {
        assert_eq!(first_failed_rule("Ab1!", &SIGNUP_PASSWORD_RULES), Some(PasswordRule::MinLength));
        assert_eq!(first_failed_rule("Abcdefgh!", &SIGNUP_PASSWORD_RULES), Some(PasswordRule::Digit));
        assert_eq!(first_failed_rule("abcdefg1!", &SIGNUP_PASSWORD_RULES), Some(PasswordRule::Uppercase));
        assert_eq!(first_failed_rule("ABCDEFG1!", &SIGNUP_PASSWORD_RULES), Some(PasswordRule::Lowercase));
        assert_eq!(first_failed_rule("Abcdefg12", &SIGNUP_PASSWORD_RULES), Some(PasswordRule::Special));
        assert_eq!(first_failed_rule("Abcdefg1!", &SIGNUP_PASSWORD_RULES), None);
    }

    #[test]
    fn test_reset_rules_skip_lowercase() {
        assert_eq!(first_failed_rule("ABCDEFG1!", &RESET_PASSWORD_RULES), None);
        assert_eq!(first_failed_rule("abcdefg1!", &RESET_PASSWORD_RULES), Some(PasswordRule::Uppercase));
    }
}
