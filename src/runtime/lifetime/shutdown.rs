use std::sync::Arc;

use tokio::signal;
use tracing::{info, warn};

use crate::session::SessionRegistry;

/// 等待 Ctrl+C，然后报告将被丢弃的会话
///
/// Bookmarks only live in memory, so nothing is flushed.
pub async fn listen_for_shutdown(registry: Arc<SessionRegistry>) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    let live = registry.len();
    if live > 0 {
        warn!("Discarding {} active session(s)", live);
    }
}
