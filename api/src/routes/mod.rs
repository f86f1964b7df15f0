//! HTTP route handlers grouped by area
//!
//! - `auth` - signup, login, session and password reset
//! - `events` - event registration for logged-in participants
//! - `admin` - admin panel listings, search and password resets
//! - `stats` - public counters for the landing page

pub mod admin;
pub mod auth;
pub mod events;
pub mod stats;

use std::sync::Arc;

use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::{
    AdminService, AuthService, AuthServiceConfig, EventService, MailServiceTrait, OtpStore,
};

/// Application state that holds shared services
pub struct AppState<U, R, M>
where
    U: UserRepository,
    R: RegistrationRepository,
    M: MailServiceTrait,
{
    pub auth_service: Arc<AuthService<U, M>>,
    pub event_service: Arc<EventService<R>>,
    pub admin_service: Arc<AdminService<U, R>>,
}

impl<U, R, M> AppState<U, R, M>
where
    U: UserRepository,
    R: RegistrationRepository,
    M: MailServiceTrait,
{
    /// Wire the services over the given repositories, mailer and OTP store
    pub fn new(
        user_repository: Arc<U>,
        registration_repository: Arc<R>,
        mailer: Arc<M>,
        otp_store: Arc<OtpStore>,
        auth_config: AuthServiceConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(
                user_repository.clone(),
                otp_store,
                mailer,
                auth_config,
            )),
            event_service: Arc::new(EventService::new(registration_repository.clone())),
            admin_service: Arc::new(AdminService::new(user_repository, registration_repository)),
        }
    }
}
