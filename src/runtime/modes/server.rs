//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::middleware::{RequestIdMiddleware, SessionMiddleware};
use crate::api::services::{AppStartTime, api_v1_routes, frontend_routes, health_routes};
use crate::config::AppConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// This function:
/// 1. Records startup time
/// 2. Builds the session registry and bookmark service
/// 3. Configures and starts the HTTP server
/// 4. Listens for Ctrl+C
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &AppConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(config);
    let registry = startup.registry.clone();
    let bookmark_service = startup.bookmark_service.clone();

    let api_prefix = config.routes.api_prefix.clone();
    let health_prefix = config.routes.health_prefix.clone();
    let session_config = config.session.clone();

    // Multipart uploads are bounded by the handler, JSON bodies by JsonConfig
    let payload_limit = usize::try_from(config.upload.max_size_bytes()).unwrap_or(usize::MAX);

    let workers = config.server.workers.clamp(1, 32);
    warn!("Using {} worker(s) for the server", workers);

    let registry_for_shutdown = registry.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(bookmark_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(payload_limit))
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .service(
                web::scope(&api_prefix)
                    .wrap(SessionMiddleware::new(registry.clone(), &session_config))
                    .service(api_v1_routes()),
            )
            .service(web::scope(&health_prefix).service(health_routes()))
            .service(frontend_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(registry_for_shutdown) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
