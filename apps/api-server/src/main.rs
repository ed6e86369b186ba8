//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;
mod templates;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::{AppState, StartupError};
use telemetry::TelemetryConfig;
use templates::Templates;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let (config, state, pages) = match bootstrap().await {
        Ok(parts) => parts,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(std::io::Error::other(e));
        }
    };

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let state = web::Data::new(state);
    let pages = web::Data::new(pages);
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::not_found_handlers())
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .app_data(pages.clone())
            .configure(handlers::configure_routes)
            .service(Files::new("/frontend", &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Everything that must succeed before the server binds.
async fn bootstrap() -> Result<(AppConfig, AppState, Templates), StartupError> {
    let config = AppConfig::from_env()?;

    let pages = Templates::load(&config.template_dir)
        .map_err(|e| StartupError::Templates(e.to_string()))?;

    let state = AppState::new(&config).await?;

    Ok((config, state, pages))
}
