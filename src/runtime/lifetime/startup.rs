use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::services::BookmarkService;
use crate::session::SessionRegistry;

/// Shared state handed to every worker
#[derive(Clone)]
pub struct StartupContext {
    pub registry: Arc<SessionRegistry>,
    pub bookmark_service: Arc<BookmarkService>,
}

/// Build the session registry and service layer from configuration
pub fn prepare_server_startup(config: &AppConfig) -> StartupContext {
    let registry = Arc::new(SessionRegistry::new(&config.session));
    info!(
        "Session registry ready (idle timeout {}s, capacity {})",
        config.session.idle_timeout_secs, config.session.max_sessions
    );

    let bookmark_service = Arc::new(BookmarkService::from_config(config));
    info!(
        "Uploads limited to {} MB ({})",
        config.upload.max_size_mb,
        config.upload.allowed_extensions.join(", ")
    );

    StartupContext {
        registry,
        bookmark_service,
    }
}
