//! Read-only admin queries over users and registrations

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Registration, User};
use crate::domain::value_objects::{AdminStats, PublicStats, UserSummary};
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::{RegistrationRepository, UserRepository};

/// Service backing the admin panel
pub struct AdminService<U, R>
where
    U: UserRepository,
    R: RegistrationRepository,
{
    user_repository: Arc<U>,
    registration_repository: Arc<R>,
}

impl<U, R> AdminService<U, R>
where
    U: UserRepository,
    R: RegistrationRepository,
{
    pub fn new(user_repository: Arc<U>, registration_repository: Arc<R>) -> Self {
        Self {
            user_repository,
            registration_repository,
        }
    }

    /// All registrations, or those containing exactly `event`
    ///
    /// When filtering, each returned row shows only the requested event.
    pub async fn registrations(&self, event: Option<&str>) -> DomainResult<Vec<Registration>> {
        let event = event.map(str::trim).filter(|e| !e.is_empty());

        let Some(event) = event else {
            return self.registration_repository.list_all().await;
        };

        let rows = self
            .registration_repository
            .find_mentioning(event)
            .await?
            .into_iter()
            .filter(|row| row.has_event(event))
            .map(|row| row.for_event(event))
            .collect();
        Ok(rows)
    }

    /// Counters for the admin dashboard
    pub async fn stats(&self) -> DomainResult<AdminStats> {
        Ok(AdminStats {
            total_users: self.user_repository.count().await?,
            total_registrations: self.registration_repository.count().await?,
            users_with_events: self.registration_repository.count_distinct_emails().await?,
        })
    }

    /// Counters shown on the public landing page
    pub async fn public_stats(&self) -> DomainResult<PublicStats> {
        Ok(PublicStats {
            total_users: self.user_repository.count().await?,
            total_registrations: self.registration_repository.count().await?,
        })
    }

    /// Users who signed up but never registered for an event
    pub async fn unregistered_users(&self) -> DomainResult<Vec<UserSummary>> {
        let registered: HashSet<String> = self
            .registration_repository
            .registered_emails()
            .await?
            .into_iter()
            .collect();

        let users = self
            .user_repository
            .list_all()
            .await?
            .iter()
            .filter(|user| !registered.contains(&user.email))
            .map(UserSummary::from)
            .collect();
        Ok(users)
    }

    /// Case-insensitive search on username, email and mobile
    pub async fn search_users(&self, query: &str) -> DomainResult<Vec<User>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::missing("Search query is required.").into());
        }
        self.user_repository.search(query).await
    }
}
