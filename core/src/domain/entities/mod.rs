//! Domain entities representing core business objects.

pub mod otp;
pub mod registration;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use otp::{OtpEntry, CODE_LENGTH, OTP_TTL_MINUTES};
pub use registration::{Registration, EVENT_SEPARATOR};
pub use user::{atom_id_for, User, ATOM_ID_PREFIX, DEFAULT_COLLEGE};
