//! User entity representing a registered participant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use atom_shared::validation::normalize_email;

/// College recorded when the participant does not provide one
pub const DEFAULT_COLLEGE: &str = "PSG College of Technology";

/// Prefix of the public participant identifier
pub const ATOM_ID_PREFIX: &str = "ATOM25";

/// User entity representing a registered participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name (at least 4 characters, trimmed)
    pub username: String,

    /// Lowercased, trimmed email address (unique)
    pub email: String,

    /// Ten digit mobile number (unique)
    pub mobile: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// College the participant belongs to
    pub college: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance, normalizing the username and email
    pub fn new(
        username: &str,
        email: &str,
        mobile: &str,
        password_hash: String,
        college: Option<&str>,
    ) -> Self {
        let now = Utc::now();
        let college = college
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COLLEGE);

        Self {
            id: Uuid::new_v4(),
            username: username.trim().to_string(),
            email: normalize_email(email),
            mobile: mobile.trim().to_string(),
            password_hash,
            college: college.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Public participant identifier shown on tickets and the profile page
    pub fn atom_id(&self) -> String {
        atom_id_for(self.id)
    }

    /// Replaces the password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive substring match on username, email or mobile
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.username.to_lowercase().contains(&needle)
            || self.email.contains(&needle)
            || self.mobile.contains(&needle)
    }
}

/// Builds the public participant identifier for a user id
pub fn atom_id_for(id: Uuid) -> String {
    format!("{}{}", ATOM_ID_PREFIX, id)
}
