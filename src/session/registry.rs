use std::time::Duration;

use moka::sync::Cache;
use tracing::{debug, trace, warn};

use super::{SessionHandle, SessionId};
use crate::config::SessionConfig;

/// All live sessions, bounded and expired after an idle period
///
/// Once `max_sessions` is reached the cache may decline to keep a new
/// session, and that browser gets a fresh empty one on every request.
/// `create` logs a warning whenever the registry is that full.
pub struct SessionRegistry {
    sessions: Cache<String, SessionHandle>,
    capacity: u64,
}

impl SessionRegistry {
    pub fn new(config: &SessionConfig) -> Self {
        let sessions = Cache::builder()
            .max_capacity(config.max_sessions)
            .time_to_idle(Duration::from_secs(config.idle_timeout_secs.max(1)))
            .eviction_listener(|key: std::sync::Arc<String>, _, cause| {
                debug!("Session {} dropped ({:?})", key, cause);
            })
            .build();
        Self {
            sessions,
            capacity: config.max_sessions,
        }
    }

    /// Start a new, empty session
    pub fn create(&self) -> (SessionId, SessionHandle) {
        let id = SessionId::generate();
        let handle = SessionHandle::default();
        self.sessions.insert(id.as_str().to_string(), handle.clone());
        trace!("Session {} created", id);

        if self.sessions.entry_count() >= self.capacity {
            warn!(
                "Session registry is full ({} sessions); new sessions may not be kept",
                self.capacity
            );
        }
        (id, handle)
    }

    pub fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.get(id)
    }

    /// Resolve the cookie value to a session, creating one when it is
    /// missing or expired
    ///
    /// The flag is `true` when a new session was created.
    pub fn get_or_create(&self, id: Option<&str>) -> (SessionId, SessionHandle, bool) {
        if let Some(id) = id
            && let Some(handle) = self.get(id)
        {
            return (SessionId(id.to_string()), handle, false);
        }
        let (id, handle) = self.create();
        (id, handle, true)
    }

    pub fn remove(&self, id: &str) {
        self.sessions.invalidate(id);
    }

    /// Number of live sessions
    pub fn len(&self) -> u64 {
        self.sessions.run_pending_tasks();
        self.sessions.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the configured session limit has been reached
    pub fn is_full(&self) -> bool {
        self.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BookmarkFields;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(&SessionConfig::default())
    }

    #[test]
    fn test_create_and_get() {
        let registry = registry();
        let (id, handle) = registry.create();
        let found = registry.get(id.as_str()).unwrap();
        assert!(found.ptr_eq(&handle));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_or_create_reuses_known_session() {
        let registry = registry();
        let (id, handle) = registry.create();
        let (same_id, same, created) = registry.get_or_create(Some(id.as_str()));
        assert!(!created);
        assert_eq!(same_id, id);
        assert!(same.ptr_eq(&handle));
    }

    #[test]
    fn test_get_or_create_replaces_unknown_session() {
        let registry = registry();
        let (id, _, created) = registry.get_or_create(Some("stale-cookie"));
        assert!(created);
        assert_ne!(id.as_str(), "stale-cookie");

        let (_, _, created) = registry.get_or_create(None);
        assert!(created);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let registry = registry();
        let (_, a) = registry.create();
        let (_, b) = registry.create();
        a.lock().store.add(BookmarkFields::new("0", "1", "only in a"));
        assert_eq!(a.lock().store.len(), 1);
        assert!(b.lock().store.is_empty());
    }

    #[test]
    fn test_is_full_at_capacity() {
        let registry = SessionRegistry::new(&SessionConfig {
            max_sessions: 2,
            ..SessionConfig::default()
        });
        registry.create();
        assert!(!registry.is_full());
        registry.create();
        assert!(registry.is_full());
    }

    #[test]
    fn test_remove() {
        let registry = registry();
        let (id, _) = registry.create();
        registry.remove(id.as_str());
        assert!(registry.get(id.as_str()).is_none());
        assert!(registry.is_empty());
    }
}
