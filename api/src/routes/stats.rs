use actix_web::{web, HttpResponse};

use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::MailServiceTrait;

use crate::handlers::ApiResult;
use crate::routes::AppState;

/// Handler for GET /api/public-stats
///
/// Counters shown on the landing page; no authentication.
pub async fn public_stats<U, R, M>(state: web::Data<AppState<U, R, M>>) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let stats = state.admin_service.public_stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
