use actix_web::{web, HttpResponse};

use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::MailServiceTrait;

use crate::dto::auth::{AccountView, AuthResponse, LoginRequest};
use crate::dto::validate_request;
use crate::handlers::ApiResult;
use crate::middleware::{SessionManager, SessionUser};
use crate::routes::AppState;

/// Handler for POST /api/auth/login
///
/// ## Errors
/// - 400 Bad Request: email or password missing
/// - 404 Not Found: no account for the email
/// - 401 Unauthorized: wrong password
pub async fn login<U, R, M>(
    state: web::Data<AppState<U, R, M>>,
    sessions: web::Data<SessionManager>,
    request: web::Json<LoginRequest>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    validate_request(&request.0)?;

    let user = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;
    let cookie = sessions.issue(&SessionUser::from(&user))?;

    Ok(HttpResponse::Ok().cookie(cookie).json(AuthResponse::new(
        "Login successful!",
        AccountView::from_user(&user, false),
    )))
}
