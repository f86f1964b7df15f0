use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use atom_core::domain::entities::{Registration, User};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationsQuery {
    #[serde(default)]
    pub event: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminResetPasswordRequest {
    #[validate(length(max = 254, message = "Email is too long."))]
    pub email: String,

    #[serde(alias = "new_password")]
    #[validate(length(max = 128, message = "Password is too long."))]
    pub new_password: String,
}

/// Registration row as listed in the admin panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub evname: String,
    pub registration_date: DateTime<Utc>,
    pub mobile: String,
}

impl From<Registration> for RegistrationRow {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id,
            username: registration.username,
            email: registration.email,
            evname: registration.evname,
            registration_date: registration.registration_date,
            mobile: registration.mobile,
        }
    }
}

/// User row returned by the admin search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub college: String,
    pub atom_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            atom_id: user.atom_id(),
            id: user.id,
            username: user.username,
            email: user.email,
            mobile: user.mobile,
            college: user.college,
            created_at: user.created_at,
        }
    }
}
