//! Application factory
//!
//! Builds the Actix-web application from already-wired services. The binary
//! and the HTTP tests both go through [`create_app`].

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, HttpResponse,
};

use atom_core::repositories::{RegistrationRepository, UserRepository};
use atom_core::services::MailServiceTrait;
use atom_shared::HealthResponse;

use crate::handlers::{error::not_found_response, ApiError};
use crate::middleware::{AdminCredentials, RequireAdmin, SessionManager};
use crate::routes::{admin, auth, events, stats, AppState};

/// Largest accepted JSON body
const JSON_BODY_LIMIT: usize = 16 * 1024;

/// Create and configure the application with all dependencies
pub fn create_app<U, R, M>(
    app_state: web::Data<AppState<U, R, M>>,
    sessions: web::Data<SessionManager>,
    admin_credentials: web::Data<AdminCredentials>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RegistrationRepository + 'static,
    M: MailServiceTrait + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| {
            ApiError::bad_request(format!("Invalid request body: {}", err)).into()
        });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        ApiError::bad_request(format!("Invalid query string: {}", err)).into()
    });

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(sessions)
        .app_data(admin_credentials)
        .app_data(json_config)
        .app_data(query_config)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup::<U, R, M>))
                        .route("/login", web::post().to(auth::login::<U, R, M>))
                        .route("/logout", web::post().to(auth::logout))
                        .route("/session", web::get().to(auth::session))
                        .route("/forgot-password", web::post().to(auth::forgot_password::<U, R, M>))
                        .route("/verify-otp", web::post().to(auth::verify_otp::<U, R, M>))
                        .route("/reset-password", web::post().to(auth::reset_password::<U, R, M>)),
                )
                .service(
                    web::scope("/events")
                        .route("/register", web::post().to(events::register::<U, R, M>))
                        .route("/my-events", web::get().to(events::my_events::<U, R, M>))
                        .route("/profile", web::get().to(events::profile)),
                )
                .service(
                    web::scope("/admin")
                        .wrap(RequireAdmin)
                        .route("/registrations", web::get().to(admin::registrations::<U, R, M>))
                        .route("/stats", web::get().to(admin::stats::<U, R, M>))
                        .route("/unregistered", web::get().to(admin::unregistered::<U, R, M>))
                        .route("/search-users", web::get().to(admin::search_users::<U, R, M>))
                        .route("/reset-password", web::post().to(admin::reset_password::<U, R, M>)),
                )
                .route("/public-stats", web::get().to(stats::public_stats::<U, R, M>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "atom-backend",
        env!("CARGO_PKG_VERSION"),
    ))
}

async fn not_found() -> HttpResponse {
    not_found_response()
}
