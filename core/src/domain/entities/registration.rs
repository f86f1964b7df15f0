//! Event registration entity.
//!
//! A participant has at most one registration row; every event they sign up
//! for is appended to `evname` as a comma separated list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atom_shared::validation::normalize_email;

/// Separator used when appending events to a registration
pub const EVENT_SEPARATOR: &str = ", ";

/// Event registration row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    /// Comma separated event names, e.g. `"Hackathon, Quiz"`
    pub evname: String,
    pub mobile: String,
    pub registration_date: DateTime<Utc>,
}

impl Registration {
    /// Creates a registration for the participant's first event
    pub fn new(user_id: Uuid, username: &str, email: &str, event: &str, mobile: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            username: username.trim().to_string(),
            email: normalize_email(email),
            evname: event.trim().to_string(),
            mobile: mobile.to_string(),
            registration_date: Utc::now(),
        }
    }

    /// Event names in registration order
    pub fn events(&self) -> Vec<&str> {
        self.evname
            .split(',')
            .map(str::trim)
            .filter(|event| !event.is_empty())
            .collect()
    }

    /// Exact (case-sensitive) membership test on the event list
    pub fn has_event(&self, event: &str) -> bool {
        let event = event.trim();
        self.events().iter().any(|e| *e == event)
    }

    /// Appends an event and refreshes the registration date and mobile
    pub fn append_event(&mut self, event: &str, mobile: &str) {
        let event = event.trim();
        if self.evname.trim().is_empty() {
            self.evname = event.to_string();
        } else {
            self.evname = format!("{}{}{}", self.evname, EVENT_SEPARATOR, event);
        }
        self.mobile = mobile.to_string();
        self.registration_date = Utc::now();
    }

    /// Copy of the row showing only the given event
    pub fn for_event(&self, event: &str) -> Self {
        Self {
            evname: event.to_string(),
            ..self.clone()
        }
    }
}
