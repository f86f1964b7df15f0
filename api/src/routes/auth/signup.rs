use actix_web::{web, HttpResponse};

use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::MailServiceTrait;

use crate::dto::auth::{AccountView, AuthResponse, SignupRequest};
use crate::dto::validate_request;
use crate::handlers::ApiResult;
use crate::middleware::{SessionManager, SessionUser};
use crate::routes::AppState;

/// Handler for POST /api/auth/signup
///
/// Creates the account and logs the new participant in.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Arun",
///     "email": "arun@example.com",
///     "mobile": "9876543210",
///     "password": "Secr3t!pass",
///     "college": "PSG College of Technology"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "status": 1,
///     "message": "Registration successful!",
///     "user": { "id": "...", "username": "Arun", "email": "arun@example.com", "atomId": "ATOM25..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: a field fails validation (first failure is reported)
/// - 409 Conflict: email or mobile already registered
pub async fn signup<U, R, M>(
    state: web::Data<AppState<U, R, M>>,
    sessions: web::Data<SessionManager>,
    request: web::Json<SignupRequest>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let request = request.into_inner();
    validate_request(&request)?;

    let user = state.auth_service.signup(request.into()).await?;
    let cookie = sessions.issue(&SessionUser::from(&user))?;

    Ok(HttpResponse::Created().cookie(cookie).json(AuthResponse::new(
        "Registration successful!",
        AccountView::from_user(&user, true),
    )))
}
