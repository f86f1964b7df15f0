//! One-time password configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// One-time password store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes before an issued code expires
    pub ttl_minutes: i64,

    /// Seconds between background sweeps of expired codes (0 = disabled)
    #[serde(default)]
    pub sweep_interval_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: 10,
            sweep_interval_secs: 0,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_minutes: env_or("OTP_TTL_MINUTES", defaults.ttl_minutes),
            sweep_interval_secs: env_or("OTP_SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs),
        }
    }

    /// Whether the background sweep is enabled
    pub fn sweep_enabled(&self) -> bool {
        self.sweep_interval_secs > 0
    }
}
