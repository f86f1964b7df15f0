//! In-memory implementation of RegistrationRepository

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Registration;
use crate::errors::DomainError;

use super::trait_::RegistrationRepository;

/// In-memory registration repository
#[derive(Clone)]
pub struct MockRegistrationRepository {
    registrations: Arc<RwLock<HashMap<Uuid, Registration>>>,
}

impl MockRegistrationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            registrations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository pre-populated with registrations
    pub fn with_registrations(registrations: Vec<Registration>) -> Self {
        let map = registrations.into_iter().map(|r| (r.id, r)).collect();
        Self {
            registrations: Arc::new(RwLock::new(map)),
        }
    }

    fn sorted(rows: impl Iterator<Item = Registration>) -> Vec<Registration> {
        let mut rows: Vec<Registration> = rows.collect();
        rows.sort_by_key(|r| r.registration_date);
        rows
    }
}

impl Default for MockRegistrationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationRepository for MockRegistrationRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Registration>, DomainError> {
        let rows = self.registrations.read().await;
        Ok(rows.values().find(|r| r.email == email).cloned())
    }

    async fn create(&self, registration: Registration) -> Result<Registration, DomainError> {
        let mut rows = self.registrations.write().await;
        rows.insert(registration.id, registration.clone());
        Ok(registration)
    }

    async fn update(&self, registration: Registration) -> Result<Registration, DomainError> {
        let mut rows = self.registrations.write().await;

        if !rows.contains_key(&registration.id) {
            return Err(DomainError::NotFound {
                resource: "Registration".to_string(),
            });
        }

        rows.insert(registration.id, registration.clone());
        Ok(registration)
    }

    async fn list_all(&self) -> Result<Vec<Registration>, DomainError> {
        let rows = self.registrations.read().await;
        Ok(Self::sorted(rows.values().cloned()))
    }

    async fn find_mentioning(&self, event: &str) -> Result<Vec<Registration>, DomainError> {
        let needle = event.to_lowercase();
        let rows = self.registrations.read().await;
        Ok(Self::sorted(
            rows.values()
                .filter(|r| r.evname.to_lowercase().contains(&needle))
                .cloned(),
        ))
    }

    async fn registered_emails(&self) -> Result<Vec<String>, DomainError> {
        let rows = self.registrations.read().await;
        let emails: BTreeSet<String> = rows.values().map(|r| r.email.clone()).collect();
        Ok(emails.into_iter().collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let rows = self.registrations.read().await;
        Ok(rows.len() as u64)
    }

    async fn count_distinct_emails(&self) -> Result<u64, DomainError> {
        Ok(self.registered_emails().await?.len() as u64)
    }
}
