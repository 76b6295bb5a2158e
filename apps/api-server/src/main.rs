//! # Arena Bulls API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use arena_core::ports::{PasswordService, TokenService};
use arena_infra::auth::{Argon2PasswordService, JwtTokenService, UserDirectory};

mod config;
mod handlers;
mod importer;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Arena Bulls API server on {}:{}",
        config.host,
        config.port
    );

    let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());

    let users = UserDirectory::seeded(
        &config.admin_password,
        &config.editor_password,
        password_service.as_ref(),
    )
    .map_err(|e| std::io::Error::other(format!("failed to seed user directory: {e}")))?;

    // Build application state
    let state = AppState::new(&config, users).await;

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_service.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
