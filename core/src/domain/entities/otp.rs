//! One-time password entry held by the in-memory OTP store.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;

/// Length of the one-time password
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a one-time password
pub const OTP_TTL_MINUTES: i64 = 10;

/// A live one-time password for a single email address
///
/// Entries are created and mutated only by the OTP store; outside the crate
/// they can be inspected but not constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    code: String,
    expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Creates a fresh entry with a random code expiring `ttl` after `issued_at`
    pub(crate) fn issue(issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            code: Self::generate_code(),
            expires_at: issued_at + ttl,
        }
    }

    /// Generates a uniformly random 6-digit code in `100000..=999999`
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        rng.gen_range(100_000..=999_999).to_string()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// An entry is expired strictly after its expiry instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Compares a submitted code (surrounding whitespace ignored) in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), submitted.trim().as_bytes())
    }
}
