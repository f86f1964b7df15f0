//! Event registration route handlers
//!
//! All routes require a session.

use actix_web::{web, HttpResponse};

use atom_core::domain::value_objects::RegistrationOutcome;
use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::MailServiceTrait;
use atom_shared::MessageResponse;

use crate::dto::events::{MyEventsResponse, ProfileResponse, RegisterEventRequest};
use crate::dto::validate_request;
use crate::handlers::ApiResult;
use crate::middleware::SessionUser;
use crate::routes::AppState;

/// Handler for POST /api/events/register
///
/// Answers 201 when the participant's first event creates their
/// registration, 200 when the event is appended to it.
///
/// ## Errors
/// - 400 Bad Request: no event name
/// - 401 Unauthorized: not logged in
/// - 409 Conflict: already registered for the event
pub async fn register<U, R, M>(
    state: web::Data<AppState<U, R, M>>,
    session: SessionUser,
    request: web::Json<RegisterEventRequest>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    validate_request(&request.0)?;

    let outcome = state
        .event_service
        .register_for_event(&session.participant(), &request.evname)
        .await?;

    let body = MessageResponse::new("Event registered successfully.");
    Ok(match outcome {
        RegistrationOutcome::Created => HttpResponse::Created().json(body),
        RegistrationOutcome::Appended => HttpResponse::Ok().json(body),
    })
}

/// Handler for GET /api/events/my-events
pub async fn my_events<U, R, M>(
    state: web::Data<AppState<U, R, M>>,
    session: SessionUser,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let events = state.event_service.my_events(&session.email).await?;
    Ok(HttpResponse::Ok().json(MyEventsResponse { events }))
}

/// Handler for GET /api/events/profile
pub async fn profile(session: SessionUser) -> HttpResponse {
    HttpResponse::Ok().json(ProfileResponse::from(session))
}
