//! Periodic removal of expired one-time passwords
//!
//! Expiry is lazy by default; the sweeper only bounds memory held by codes
//! that are never checked again.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use super::store::OtpStore;

/// Background task calling `OtpStore::purge_expired` on an interval
pub struct OtpSweeper {
    store: Arc<OtpStore>,
    interval: Duration,
}

impl OtpSweeper {
    pub fn new(store: Arc<OtpStore>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run a single sweep
    pub fn run_once(&self) -> usize {
        let purged = self.store.purge_expired();
        if purged > 0 {
            debug!("Purged {} expired one-time passwords", purged);
        }
        purged
    }

    /// Spawn the sweep loop on the current tokio runtime
    pub fn spawn(self) -> JoinHandle<()> {
        info!("Starting OTP sweeper every {:?}", self.interval);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                self.run_once();
            }
        })
    }
}
