//! Participant views used by event and admin services.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::User;

/// The logged-in participant performing an event action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub mobile: String,
}

impl From<&User> for Participant {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            mobile: user.mobile.clone(),
        }
    }
}

/// Whether an event registration created a new row or extended an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationOutcome {
    Created,
    Appended,
}

/// Contact details of a user as listed in the admin panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
    pub mobile: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            mobile: user.mobile.clone(),
        }
    }
}
