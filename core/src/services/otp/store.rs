//! One-time password store keyed by normalized email

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

use atom_shared::masking::mask_email;
use atom_shared::validation::normalize_email;
use atom_shared::OtpConfig;

use crate::domain::entities::otp::{OtpEntry, OTP_TTL_MINUTES};

use super::clock::{Clock, SystemClock};

/// Result of checking a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpVerification {
    /// The code matches a live entry
    Ok,
    /// The entry outlived its TTL; it has been removed
    Expired,
    /// No entry, or the code does not match
    Invalid,
}

impl OtpVerification {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpVerification::Ok => "ok",
            OtpVerification::Expired => "expired",
            OtpVerification::Invalid => "invalid",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, OtpVerification::Ok)
    }
}

/// Single-process store holding at most one live code per email
///
/// Every operation holds the lock for its whole read-modify-write, so
/// concurrent `issue` calls for one email are last-writer-wins and
/// `consume` is idempotent. Codes are lost on restart.
pub struct OtpStore {
    entries: Mutex<HashMap<String, OtpEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl OtpStore {
    /// Create a store using the wall clock
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    /// Create a store driven by the given clock
    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Create a store from configuration
    pub fn from_config(config: &OtpConfig) -> Self {
        Self::new(Duration::minutes(config.ttl_minutes))
    }

    /// Lifetime of an issued code
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Generate and store a fresh code, replacing any previous one
    pub fn issue(&self, email: &str) -> String {
        let key = normalize_email(email);
        let entry = OtpEntry::issue(self.clock.now(), self.ttl);
        let code = entry.code().to_string();

        let replaced = self.entries().insert(key, entry).is_some();
        debug!(email = %mask_email(email), replaced, "Issued one-time password");

        code
    }

    /// Check a submitted code without consuming it
    ///
    /// The first check after expiry removes the entry and reports `Expired`;
    /// later checks report `Invalid`.
    pub fn verify(&self, email: &str, submitted: &str) -> OtpVerification {
        let key = normalize_email(email);
        let now = self.clock.now();
        let mut entries = self.entries();

        let Some(entry) = entries.get(&key) else {
            return OtpVerification::Invalid;
        };

        if entry.is_expired_at(now) {
            entries.remove(&key);
            debug!(email = %mask_email(email), "One-time password expired");
            return OtpVerification::Expired;
        }

        if entry.matches(submitted) {
            OtpVerification::Ok
        } else {
            OtpVerification::Invalid
        }
    }

    /// Remove the entry for an email; a no-op when there is none
    pub fn consume(&self, email: &str) {
        let key = normalize_email(email);
        self.entries().remove(&key);
    }

    /// Remove every entry that would report `Expired`, returning how many went
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    /// Number of stored entries, live or not yet swept
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, OtpEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for OtpStore {
    fn default() -> Self {
        Self::new(Duration::minutes(OTP_TTL_MINUTES))
    }
}

impl std::fmt::Debug for OtpStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpStore")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}
