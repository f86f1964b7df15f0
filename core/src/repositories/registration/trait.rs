//! Registration repository trait defining the interface for event registration persistence.

use async_trait::async_trait;

use crate::domain::entities::Registration;
use crate::errors::DomainError;

/// Repository trait for Registration persistence operations
///
/// There is at most one registration row per (normalized) email.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Find the registration row of a participant
    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError>;

    /// Insert a new registration row
    async fn create(&self, registration: Registration) -> Result<Registration, DomainError>;

    /// Persist the event list, mobile and date of an existing row
    async fn update(&self, registration: Registration) -> Result<Registration, DomainError>;

    /// List every registration row, oldest first
    async fn list_all(&self) -> Result<Vec<Registration>, DomainError>;

    /// Rows whose event list contains `event` as a case-insensitive substring
    ///
    /// This is a coarse pre-filter; callers narrow it to exact event matches.
    async fn find_mentioning(&self, event: &str) -> Result<Vec<Registration>, DomainError>;

    /// Distinct emails that have a registration row
    async fn registered_emails(&self) -> Result<Vec<String>, DomainError>;

    /// Count all registration rows
    async fn count(&self) -> Result<u64, DomainError>;

    /// Count distinct emails with a registration row
    async fn count_distinct_emails(&self) -> Result<u64, DomainError>;
}
