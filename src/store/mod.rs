//! Bookmark storage
//!
//! - `bookmark`: the bookmark record, its id and the edit target
//! - `store`: the ordered per-session list
//! - `view`: serializable snapshots handed to the UI

mod bookmark;
#[allow(clippy::module_inception)]
mod store;
mod view;

pub use bookmark::{Bookmark, BookmarkFields, BookmarkId, EditTarget};
pub use store::BookmarkStore;
pub use view::{BookmarkView, EditTargetView, StoreView};
