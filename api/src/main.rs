use actix_web::{web, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use atom_api::handlers::expose_internal_errors;
use atom_api::middleware::{AdminCredentials, SessionManager};
use atom_api::{create_app, AppState};
use atom_core::services::{AuthServiceConfig, OtpStore, OtpSweeper};
use atom_infra::{create_mailer, DatabasePool, MySqlRegistrationRepository, MySqlUserRepository};
use atom_shared::{AppConfig, AuthConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!(environment = %config.environment, "Starting ATOM 2K26 API server");

    expose_internal_errors(!config.environment.is_production());
    warn_on_weak_auth_config(&config);

    // Database
    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    pool.ping().await.context("database is not reachable")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let registration_repository =
        Arc::new(MySqlRegistrationRepository::new(pool.get_pool().clone()));

    // One-time codes and mail
    let otp_store = Arc::new(OtpStore::from_config(&config.otp));
    if config.otp.sweep_enabled() {
        OtpSweeper::new(
            otp_store.clone(),
            Duration::from_secs(config.otp.sweep_interval_secs),
        )
        .spawn();
    }
    let mailer = Arc::new(create_mailer(&config.mail));

    let app_state = web::Data::new(AppState::new(
        user_repository,
        registration_repository,
        mailer,
        otp_store,
        AuthServiceConfig::default(),
    ));
    let sessions = web::Data::new(SessionManager::new(&config.auth));
    let admin_credentials = web::Data::new(AdminCredentials::new(
        config.auth.admin_password_hash.clone(),
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(
            app_state.clone(),
            sessions.clone(),
            admin_credentials.clone(),
        )
        .wrap(TracingLogger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

fn warn_on_weak_auth_config(config: &AppConfig) {
    if config.auth.admin_password_hash.is_none() {
        warn!("ADMIN_PASSWORD_HASH is not set; admin routes will reject every request");
    }
    if config.environment.is_production()
        && config.auth.session_secret == AuthConfig::default().session_secret
    {
        warn!("SESSION_SECRET is not set; sessions are signed with the development secret");
    }
    if !config.mail.is_configured() {
        warn!("SMTP credentials are not set; reset codes will only be logged");
    }
}
