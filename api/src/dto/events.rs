use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::middleware::SessionUser;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterEventRequest {
    /// Event name as shown on the events page
    #[serde(alias = "event")]
    #[validate(length(max = 100, message = "Event name is too long."))]
    pub evname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyEventsResponse {
    pub events: Vec<String>,
}

/// `GET /api/events/profile` body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub atom_id: String,
    pub college: String,
}

impl From<SessionUser> for ProfileResponse {
    fn from(session: SessionUser) -> Self {
        Self {
            atom_id: session.atom_id(),
            user_id: session.user_id,
            username: session.username,
            email: session.email,
            mobile: session.mobile,
            college: session.college,
        }
    }
}
