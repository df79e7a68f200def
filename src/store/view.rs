//! Render-ready snapshots of a store

use serde::{Deserialize, Serialize};

use super::bookmark::{Bookmark, BookmarkId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkView {
    pub id: BookmarkId,
    /// 1-based display position
    pub position: usize,
    pub start: String,
    pub end: String,
    pub title: String,
}

impl BookmarkView {
    pub fn new(bookmark: &Bookmark, position: usize) -> Self {
        Self {
            id: bookmark.id,
            position,
            start: bookmark.start.clone(),
            end: bookmark.end.clone(),
            title: bookmark.title.clone(),
        }
    }
}

/// Pre-populated values for the edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTargetView {
    pub id: BookmarkId,
    pub position: usize,
    pub start: String,
    pub end: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreView {
    pub bookmarks: Vec<BookmarkView>,
    pub editing: Option<EditTargetView>,
}
