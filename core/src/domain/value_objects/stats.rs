//! Aggregate counters for the admin panel and the landing page.

use serde::{Deserialize, Serialize};

/// Counters shown in the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_registrations: u64,
    /// Distinct emails with at least one event
    pub users_with_events: u64,
}

/// Counters safe to show without authentication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicStats {
    pub total_users: u64,
    pub total_registrations: u64,
}

impl From<AdminStats> for PublicStats {
    fn from(stats: AdminStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_registrations: stats.total_registrations,
        }
    }
}
