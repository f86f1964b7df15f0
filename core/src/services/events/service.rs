//! Event registration use cases for logged-in participants

use std::sync::Arc;
use tracing::info;

use atom_shared::masking::mask_email;
use atom_shared::validation::normalize_email;

use crate::domain::entities::Registration;
use crate::domain::value_objects::{Participant, RegistrationOutcome};
use crate::errors::{DomainResult, RegistrationError};
use crate::repositories::RegistrationRepository;

/// Service managing a participant's event list
pub struct EventService<R>
where
    R: RegistrationRepository,
{
    registration_repository: Arc<R>,
}

impl<R> EventService<R>
where
    R: RegistrationRepository,
{
    pub fn new(registration_repository: Arc<R>) -> Self {
        Self {
            registration_repository,
        }
    }

    /// Register a participant for an event
    ///
    /// The first event creates the participant's registration row; later
    /// events are appended to it. Registering twice for the same event is
    /// rejected.
    pub async fn register_for_event(
        &self,
        participant: &Participant,
        event: &str,
    ) -> DomainResult<RegistrationOutcome> {
        let event = event.trim();
        if event.is_empty() {
            return Err(RegistrationError::MissingEvent.into());
        }

        let email = normalize_email(&participant.email);
        match self.registration_repository.find_by_email(&email).await? {
            Some(mut registration) => {
                if registration.has_event(event) {
                    return Err(RegistrationError::AlreadyRegistered.into());
                }

                registration.append_event(event, &participant.mobile);
                self.registration_repository.update(registration).await?;

                info!(email = %mask_email(&email), event, "Event appended to registration");
                Ok(RegistrationOutcome::Appended)
            }
            None => {
                let registration = Registration::new(
                    participant.user_id,
                    &participant.username,
                    &email,
                    event,
                    &participant.mobile,
                );
                self.registration_repository.create(registration).await?;

                info!(email = %mask_email(&email), event, "Registration created");
                Ok(RegistrationOutcome::Created)
            }
        }
    }

    /// Events the participant is registered for, in registration order
    pub async fn my_events(&self, email: &str) -> DomainResult<Vec<String>> {
        let email = normalize_email(email);
        let events = self
            .registration_repository
            .find_by_email(&email)
            .await?
            .map(|registration| {
                registration
                    .events()
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(events)
    }
}
