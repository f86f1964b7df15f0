//! Session cookie handling.
//!
//! A session is a signed JWT stored in the `atom_session` cookie. It carries
//! the participant's identity so protected routes need no database lookup.
//! The cookie is HttpOnly and SameSite=Lax, and `Secure` in production.

use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    dev::Payload,
    web, FromRequest, HttpRequest,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use tracing::debug;
use uuid::Uuid;

use atom_core::domain::entities::{atom_id_for, User};
use atom_core::domain::value_objects::Participant;
use atom_core::errors::{AuthError, DomainError};
use atom_shared::config::auth::SESSION_COOKIE_NAME;
use atom_shared::AuthConfig;

use crate::handlers::ApiError;

/// Identity of the logged-in participant, as stored in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub college: String,
}

impl SessionUser {
    /// Public participant identifier
    pub fn atom_id(&self) -> String {
        atom_id_for(self.user_id)
    }

    /// The participant acting in event routes
    pub fn participant(&self) -> Participant {
        Participant {
            user_id: self.user_id,
            username: self.username.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
        }
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            mobile: user.mobile.clone(),
            college: user.college.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    #[serde(flatten)]
    user: SessionUser,
    iat: i64,
    exp: i64,
}

/// Issues, reads and clears session cookies
#[derive(Clone)]
pub struct SessionManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    max_age_seconds: i64,
    secure: bool,
}

impl SessionManager {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.session_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            max_age_seconds: config.session_max_age_seconds(),
            secure: config.secure_cookies,
        }
    }

    /// Build the cookie that logs `user` in
    pub fn issue(&self, user: &SessionUser) -> Result<Cookie<'static>, ApiError> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            user: user.clone(),
            iat: now,
            exp: now + self.max_age_seconds,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| DomainError::Internal {
                message: format!("Failed to sign session: {}", e),
            },
        )?;

        Ok(self
            .cookie_builder(token)
            .max_age(CookieDuration::seconds(self.max_age_seconds))
            .finish())
    }

    /// Build a cookie that removes the session from the browser
    pub fn clear(&self) -> Cookie<'static> {
        let mut cookie = self.cookie_builder(String::new()).finish();
        cookie.make_removal();
        cookie
    }

    /// The session attached to the request, if present and valid
    pub fn read(&self, req: &HttpRequest) -> Option<SessionUser> {
        let cookie = req.cookie(SESSION_COOKIE_NAME)?;
        let validation = Validation::new(Algorithm::HS256);

        match decode::<SessionClaims>(cookie.value(), &self.decoding_key, &validation) {
            Ok(data) => Some(data.claims.user),
            Err(e) => {
                debug!(error = %e, "Ignoring invalid session cookie");
                None
            }
        }
    }

    fn cookie_builder(&self, value: String) -> actix_web::cookie::CookieBuilder<'static> {
        Cookie::build(SESSION_COOKIE_NAME, value)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
    }
}

fn session_from_request(req: &HttpRequest) -> Result<Option<SessionUser>, ApiError> {
    let manager = req
        .app_data::<web::Data<SessionManager>>()
        .ok_or_else(|| DomainError::Internal {
            message: "Session manager is not configured".to_string(),
        })?;
    Ok(manager.read(req))
}

/// Extractor for routes that require a logged-in participant
impl FromRequest for SessionUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(session_from_request(req).and_then(|session| {
            session.ok_or_else(|| AuthError::NotAuthenticated.into())
        }))
    }
}

/// Extractor for routes that behave differently when logged in
pub struct OptionalSession(pub Option<SessionUser>);

impl FromRequest for OptionalSession {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(session_from_request(req).map(OptionalSession))
    }
}
