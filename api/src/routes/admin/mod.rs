//! Admin panel route handlers
//!
//! The scope is wrapped in [`RequireAdmin`](crate::middleware::RequireAdmin),
//! which checks the password before any extractor runs. Every handler also
//! takes an [`AdminGuard`], so it cannot be mounted outside that scope.

use actix_web::{web, HttpResponse};

use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::MailServiceTrait;
use atom_shared::{CountedResponse, MessageResponse};

use crate::dto::admin::{
    AdminResetPasswordRequest, RegistrationRow, RegistrationsQuery, SearchUsersQuery, UserRow,
};
use crate::dto::validate_request;
use crate::handlers::ApiResult;
use crate::middleware::AdminGuard;
use crate::routes::AppState;

/// Handler for GET /api/admin/registrations?event=NAME
///
/// Without `event` every registration is listed. With it, only rows whose
/// event list contains exactly that event are returned, each showing just
/// that event.
pub async fn registrations<U, R, M>(
    _admin: AdminGuard,
    state: web::Data<AppState<U, R, M>>,
    query: web::Query<RegistrationsQuery>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let rows = state
        .admin_service
        .registrations(query.event.as_deref())
        .await?
        .into_iter()
        .map(RegistrationRow::from)
        .collect();

    Ok(HttpResponse::Ok().json(CountedResponse::new(rows)))
}

/// Handler for GET /api/admin/stats
pub async fn stats<U, R, M>(_admin: AdminGuard, state: web::Data<AppState<U, R, M>>) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let stats = state.admin_service.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Handler for GET /api/admin/unregistered
///
/// Users who signed up but never registered for an event.
pub async fn unregistered<U, R, M>(
    _admin: AdminGuard,
    state: web::Data<AppState<U, R, M>>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let users = state.admin_service.unregistered_users().await?;
    Ok(HttpResponse::Ok().json(CountedResponse::new(users)))
}

/// Handler for GET /api/admin/search-users?q=TEXT
pub async fn search_users<U, R, M>(
    _admin: AdminGuard,
    state: web::Data<AppState<U, R, M>>,
    query: web::Query<SearchUsersQuery>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let users = state
        .admin_service
        .search_users(&query.q)
        .await?
        .into_iter()
        .map(UserRow::from)
        .collect();

    Ok(HttpResponse::Ok().json(CountedResponse::new(users)))
}

/// Handler for POST /api/admin/reset-password
///
/// Sets a participant's password without an OTP. Any outstanding reset
/// code for the account is discarded.
pub async fn reset_password<U, R, M>(
    _admin: AdminGuard,
    state: web::Data<AppState<U, R, M>>,
    request: web::Json<AdminResetPasswordRequest>,
) -> ApiResult
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    validate_request(&request.0)?;
    state
        .auth_service
        .admin_reset_password(&request.email, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Password updated successfully.")))
}
