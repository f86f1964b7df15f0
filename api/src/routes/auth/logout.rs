use actix_web::{web, HttpResponse};

use atom_shared::MessageResponse;

use crate::middleware::SessionManager;

/// Handler for POST /api/auth/logout
///
/// Always succeeds; the session cookie is replaced by an expired one.
pub async fn logout(sessions: web::Data<SessionManager>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(sessions.clear())
        .json(MessageResponse::new("Logged out successfully."))
}
