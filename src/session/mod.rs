//! Per-browser sessions
//!
//! Each session owns its own `BookmarkStore`; nothing is shared between
//! sessions and nothing outlives the idle timeout.

mod registry;

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};

use crate::store::BookmarkStore;

pub use registry::SessionRegistry;

/// Opaque session key carried in the session cookie
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub(crate) fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata of the uploaded media file; the bytes are never kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub name: String,
    pub size: u64,
}

/// Everything one user works on
#[derive(Debug, Default)]
pub struct Session {
    pub store: BookmarkStore,
    pub media: Option<MediaInfo>,
}

/// Shared handle to a session
///
/// Requests lock it for one synchronous mutation; the guard must not be
/// held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle(Arc<Mutex<Session>>);

impl SessionHandle {
    pub fn new(session: Session) -> Self {
        Self(Arc::new(Mutex::new(session)))
    }

    pub fn lock(&self) -> MutexGuard<'_, Session> {
        self.0.lock()
    }

    pub fn ptr_eq(&self, other: &SessionHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
