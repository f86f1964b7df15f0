//! Password reset by one-time code
//!
//! The flow is forgot-password (code mailed), verify-otp (optional check
//! that leaves the code usable), then reset-password (code checked again and
//! consumed once the new password is stored).

use actix_web::{web, HttpResponse};

use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::MailServiceTrait;
use atom_shared::MessageResponse;

use crate::dto::auth::{ForgotPasswordRequest, ResetPasswordRequest, VerifyOtpRequest};
use crate::dto::validate_request;
use crate::handlers::ApiResult;
use crate::routes::AppState;

/// Handler for POST /api/auth/forgot-password
///
/// ## Errors
/// - 400 Bad Request: email missing
/// - 404 Not Found: no account for the email
/// - 502 Bad Gateway: every mail transport failed
pub async fn forgot_password<U, R, M>(
    state: web::Data<AppState<U, R, M>>,
    request: web::Json<ForgotPasswordRequest>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    validate_request(&request.0)?;
    state.auth_service.forgot_password(&request.email).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("OTP sent to your email.")))
}

/// Handler for POST /api/auth/verify-otp
///
/// ## Errors
/// - 400 Bad Request: fields missing, or the code does not match
/// - 410 Gone: the code has expired
pub async fn verify_otp<U, R, M>(
    state: web::Data<AppState<U, R, M>>,
    request: web::Json<VerifyOtpRequest>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    validate_request(&request.0)?;
    state
        .auth_service
        .verify_otp(&request.email, &request.otp)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("OTP verified.")))
}

/// Handler for POST /api/auth/reset-password
///
/// ## Errors
/// - 400 Bad Request: fields missing, wrong code, or weak password
/// - 410 Gone: the code has expired
pub async fn reset_password<U, R, M>(
    state: web::Data<AppState<U, R, M>>,
    request: web::Json<ResetPasswordRequest>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    validate_request(&request.0)?;
    state
        .auth_service
        .reset_password(&request.email, &request.otp, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(
        "Password reset successfully. You can now log in.",
    )))
}
