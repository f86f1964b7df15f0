//! Mapping of domain errors to HTTP responses
//!
//! Every handler returns [`ApiResult`]; actix renders failures through the
//! [`ResponseError`] impl below as `{"error": <message>, "code": <CODE>}`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, error};

use atom_core::errors::{AuthError, DomainError, MailError, RegistrationError, ValidationError};
use atom_shared::{error_codes, ErrorResponse};

/// Message shown instead of internal error details in production
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Message shown when no mail transport accepted a reset code
pub const MAIL_FAILURE_MESSAGE: &str = "Could not send the OTP email. Please try again later.";

static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(false);

/// Choose whether database and internal error messages reach clients.
///
/// Off until enabled; the server binary turns it on outside production.
pub fn expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::Relaxed);
}

/// Result type returned by route handlers
pub type ApiResult<T = HttpResponse> = Result<T, ApiError>;

/// Error returned from route handlers and extractors
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl ApiError {
    /// Request-level validation failure with a client-facing message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(ValidationError::missing(message).into())
    }

    /// The wrapped domain error
    pub fn domain(&self) -> &DomainError {
        &self.0
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        self.0.code()
    }

    /// Message returned in the `error` field
    pub fn client_message(&self) -> String {
        match &self.0 {
            DomainError::Mail(_) => MAIL_FAILURE_MESSAGE.to_string(),
            DomainError::NotFound { resource } => format!("{} not found.", resource),
            err if err.is_internal() && !EXPOSE_INTERNAL_ERRORS.load(Ordering::Relaxed) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            err => err.to_string(),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        Self(err.into())
    }
}

impl From<MailError> for ApiError {
    fn from(err: MailError) -> Self {
        Self(err.into())
    }
}

fn auth_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::EmailAlreadyExists | AuthError::MobileAlreadyRegistered => StatusCode::CONFLICT,
        AuthError::EmailNotRegistered | AuthError::AccountNotFound => StatusCode::NOT_FOUND,
        AuthError::InvalidPassword
        | AuthError::NotAuthenticated
        | AuthError::AdminPasswordRequired => StatusCode::UNAUTHORIZED,
        AuthError::OtpInvalid | AuthError::ResetOtpInvalid => StatusCode::BAD_REQUEST,
        AuthError::OtpExpired | AuthError::ResetOtpExpired => StatusCode::GONE,
        AuthError::InvalidAdminCredentials => StatusCode::FORBIDDEN,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Auth(err) => auth_status(err),
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Registration(RegistrationError::MissingEvent) => StatusCode::BAD_REQUEST,
            DomainError::Registration(RegistrationError::AlreadyRegistered) => StatusCode::CONFLICT,
            DomainError::Mail(_) => StatusCode::BAD_GATEWAY,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Database { .. } | DomainError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!(code = self.code(), error = %self.0, "Request failed");
        } else {
            debug!(code = self.code(), error = %self.0, "Request rejected");
        }

        HttpResponse::build(status).json(ErrorResponse::new(self.code(), self.client_message()))
    }
}

/// JSON 404 body for unknown routes
pub fn not_found_response() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found.",
    ))
}
