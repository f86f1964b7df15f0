use actix_web::HttpResponse;

use crate::dto::auth::SessionResponse;
use crate::middleware::OptionalSession;

/// Handler for GET /api/auth/session
///
/// Reports whether the caller is logged in and, if so, who they are.
pub async fn session(OptionalSession(session): OptionalSession) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        logged_in: session.is_some(),
        user: session.map(Into::into),
    })
}
