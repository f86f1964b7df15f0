//! Admin panel guard.
//!
//! The admin password travels in the `x-admin-password` header and is
//! checked against a bcrypt hash from configuration. It is never read from
//! the query string.
//!
//! [`RequireAdmin`] wraps the whole `/api/admin` scope, so the password is
//! checked before any handler extracts its query or body. Handlers take an
//! [`AdminGuard`] to prove they run behind it.

use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use tracing::warn;

use atom_core::errors::AuthError;
use atom_core::services::auth::password::verify_password;

use crate::handlers::ApiError;

/// Header carrying the admin password
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Bcrypt hash the admin password is checked against
#[derive(Debug, Clone, Default)]
pub struct AdminCredentials {
    password_hash: Option<String>,
}

impl AdminCredentials {
    pub fn new(password_hash: Option<String>) -> Self {
        Self { password_hash }
    }
}

/// Marker left in the request extensions by [`RequireAdmin`]
///
/// Extracting it outside the admin scope fails with 401.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

impl FromRequest for AdminGuard {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let admitted = req.extensions().get::<AdminGuard>().copied();
        ready(admitted.ok_or_else(|| AuthError::AdminPasswordRequired.into()))
    }
}

/// Middleware admitting only requests with the correct admin password
///
/// A missing header is answered with 401, a wrong password (or no
/// configured hash) with 403.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAdmin;

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAdminMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAdminMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let password = req
            .headers()
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let password_hash = req
            .app_data::<web::Data<AdminCredentials>>()
            .and_then(|credentials| credentials.password_hash.clone());

        Box::pin(async move {
            let guard = check_admin_password(password, password_hash).await?;
            req.extensions_mut().insert(guard);
            service.call(req).await
        })
    }
}

async fn check_admin_password(
    password: Option<String>,
    password_hash: Option<String>,
) -> Result<AdminGuard, ApiError> {
    let password = password.ok_or(AuthError::AdminPasswordRequired)?;

    let Some(password_hash) = password_hash else {
        warn!("Admin request rejected: ADMIN_PASSWORD_HASH is not configured");
        return Err(AuthError::InvalidAdminCredentials.into());
    };

    if verify_password(&password, &password_hash).await? {
        Ok(AdminGuard)
    } else {
        warn!("Admin request rejected: wrong password");
        Err(AuthError::InvalidAdminCredentials.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App, HttpResponse};

    async fn guarded(_admin: AdminGuard) -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_guard_without_middleware_is_unauthorized() {
        let app = test::init_service(
            App::new().route("/guarded", web::get().to(guarded)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/guarded")
            .insert_header((ADMIN_PASSWORD_HEADER, "anything"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_check_without_configured_hash() {
        let err = check_admin_password(Some("secret".to_string()), None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");

        let err = check_admin_password(None, Some("hash".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
    }
}
