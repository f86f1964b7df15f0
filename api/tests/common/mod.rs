//! Shared fixtures for HTTP tests
//!
//! Builds the real application over in-memory repositories and a mailer
//! that records what it would have sent.

#![allow(dead_code)]

use actix_web::{
    cookie::Cookie,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use atom_api::middleware::{AdminCredentials, SessionManager, SessionUser};
use atom_api::{create_app, AppState};
use atom_core::domain::entities::User;
use atom_core::domain::value_objects::{DeliveryReceipt, OutboundMessage};
use atom_core::errors::MailError;
use atom_core::repositories::{MockRegistrationRepository, MockUserRepository, UserRepository};
use atom_core::services::{AuthServiceConfig, MailServiceTrait, OtpStore};
use atom_shared::AuthConfig;

pub const ADMIN_PASSWORD: &str = "Adm1n!secret";
pub const PASSWORD: &str = "Secr3t!pass";

/// Mail service recording every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundMessage>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// The six digit code in the most recent message
    pub fn last_code(&self) -> Option<String> {
        let sent = self.sent.lock().unwrap();
        sent.last()?
            .html_body
            .split(|c: char| !c.is_ascii_digit())
            .find(|chunk| chunk.len() == 6)
            .map(str::to_string)
    }
}

#[async_trait]
impl MailServiceTrait for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<DeliveryReceipt, MailError> {
        if self.fail {
            return Err(MailError::transport("smtp.test:25 (plain)", "connection refused"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(DeliveryReceipt::new("recording", None, "250 OK"))
    }
}

pub type TestState = AppState<MockUserRepository, MockRegistrationRepository, RecordingMailer>;

/// Everything a test needs to drive the application and inspect its effects
pub struct TestContext {
    pub users: Arc<MockUserRepository>,
    pub registrations: Arc<MockRegistrationRepository>,
    pub mailer: Arc<RecordingMailer>,
    pub otp_store: Arc<OtpStore>,
    pub state: web::Data<TestState>,
    pub sessions: web::Data<SessionManager>,
    pub admin: web::Data<AdminCredentials>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_parts(RecordingMailer::default(), OtpStore::default())
    }

    pub fn with_parts(mailer: RecordingMailer, otp_store: OtpStore) -> Self {
        let admin_hash = bcrypt::hash(ADMIN_PASSWORD, 4).unwrap();
        Self::with_admin_hash(mailer, otp_store, Some(admin_hash))
    }

    pub fn with_admin_hash(
        mailer: RecordingMailer,
        otp_store: OtpStore,
        admin_hash: Option<String>,
    ) -> Self {
        let users = Arc::new(MockUserRepository::new());
        let registrations = Arc::new(MockRegistrationRepository::new());
        let mailer = Arc::new(mailer);
        let otp_store = Arc::new(otp_store);

        let state = web::Data::new(AppState::new(
            users.clone(),
            registrations.clone(),
            mailer.clone(),
            otp_store.clone(),
            AuthServiceConfig { bcrypt_cost: 4 },
        ));
        let sessions = web::Data::new(SessionManager::new(&AuthConfig {
            session_secret: "test-session-secret".to_string(),
            ..Default::default()
        }));

        Self {
            users,
            registrations,
            mailer,
            otp_store,
            state,
            sessions,
            admin: web::Data::new(AdminCredentials::new(admin_hash)),
        }
    }

    /// The application under test
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), self.sessions.clone(), self.admin.clone())
    }

    /// Store a user whose password is [`PASSWORD`]
    pub async fn seed_user(&self, username: &str, email: &str, mobile: &str) -> User {
        let hash = bcrypt::hash(PASSWORD, 4).unwrap();
        let user = User::new(username, email, mobile, hash, None);
        self.users.create(user).await.unwrap()
    }

    /// A valid session cookie for `user`
    pub fn session_cookie(&self, user: &User) -> Cookie<'static> {
        self.sessions.issue(&SessionUser::from(user)).unwrap()
    }
}
