//! Ordered bookmark list for one session

use tracing::trace;

use super::bookmark::{Bookmark, BookmarkFields, BookmarkId, EditTarget};
use super::view::{BookmarkView, EditTargetView, StoreView};
use crate::errors::{BookmarkError, Result};

/// Ordered bookmark sequence plus the currently selected edit target
///
/// Positional operations (`update`, `delete`, `begin_edit`) take a 0-based
/// index; the `*_by_id` variants look bookmarks up by their stable id.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
    editing: Option<EditTarget>,
    next_id: u64,
}

impl Default for BookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self {
            bookmarks: Vec::new(),
            editing: None,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn edit_target(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    /// Append a bookmark to the end of the list
    pub fn add(&mut self, fields: BookmarkFields) -> &Bookmark {
        let id = BookmarkId::new(self.next_id);
        self.next_id += 1;
        trace!("Store: adding bookmark {} at position {}", id, self.len());

        self.bookmarks.push(Bookmark {
            id,
            start: fields.start,
            end: fields.end,
            title: fields.title,
        });
        &self.bookmarks[self.bookmarks.len() - 1]
    }

    pub fn get_at(&self, index: usize) -> Result<&Bookmark> {
        self.check_index(index)?;
        Ok(&self.bookmarks[index])
    }

    pub fn get(&self, id: BookmarkId) -> Result<&Bookmark> {
        let index = self.index_of(id)?;
        Ok(&self.bookmarks[index])
    }

    /// 0-based index of the bookmark with this id
    pub fn index_of(&self, id: BookmarkId) -> Result<usize> {
        self.bookmarks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BookmarkError::not_found(format!("Bookmark {} not found", id)))
    }

    /// Replace the fields of the bookmark at `index`
    ///
    /// Clears the edit target when it points at the replaced bookmark.
    pub fn update(&mut self, index: usize, fields: BookmarkFields) -> Result<&Bookmark> {
        self.check_index(index)?;
        let id = self.bookmarks[index].id;
        trace!("Store: updating bookmark {} at position {}", id, index);

        self.bookmarks[index].assign(fields);
        if self.editing.as_ref().is_some_and(|e| e.id == id) {
            self.editing = None;
        }
        Ok(&self.bookmarks[index])
    }

    pub fn update_by_id(&mut self, id: BookmarkId, fields: BookmarkFields) -> Result<&Bookmark> {
        let index = self.index_of(id)?;
        self.update(index, fields)
    }

    /// Remove the bookmark at `index`; later entries shift left by one
    pub fn delete(&mut self, index: usize) -> Result<Bookmark> {
        self.check_index(index)?;
        let removed = self.bookmarks.remove(index);
        trace!("Store: deleted bookmark {} from position {}", removed.id, index);

        if self.editing.as_ref().is_some_and(|e| e.id == removed.id) {
            self.editing = None;
        }
        Ok(removed)
    }

    pub fn delete_by_id(&mut self, id: BookmarkId) -> Result<Bookmark> {
        let index = self.index_of(id)?;
        self.delete(index)
    }

    /// Select the bookmark at `index` for editing and snapshot its fields
    pub fn begin_edit(&mut self, index: usize) -> Result<&EditTarget> {
        self.check_index(index)?;
        let bookmark = &self.bookmarks[index];
        let target = EditTarget {
            id: bookmark.id,
            snapshot: bookmark.fields(),
        };
        Ok(&*self.editing.insert(target))
    }

    pub fn begin_edit_by_id(&mut self, id: BookmarkId) -> Result<&EditTarget> {
        let index = self.index_of(id)?;
        self.begin_edit(index)
    }

    /// Drop the edit target, returning it if one was set
    pub fn cancel_edit(&mut self) -> Option<EditTarget> {
        self.editing.take()
    }

    /// Render the current list for display
    pub fn view(&self) -> StoreView {
        StoreView {
            bookmarks: self
                .bookmarks
                .iter()
                .enumerate()
                .map(|(i, b)| BookmarkView::new(b, i + 1))
                .collect(),
            editing: self.editing.as_ref().map(|e| EditTargetView {
                id: e.id,
                position: self.index_of(e.id).map(|i| i + 1).unwrap_or(0),
                start: e.snapshot.start.clone(),
                end: e.snapshot.end.clone(),
                title: e.snapshot.title.clone(),
            }),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.bookmarks.len() {
            Ok(())
        } else {
            Err(BookmarkError::out_of_range(format!(
                "Index {} out of range for {} bookmark(s)",
                index,
                self.bookmarks.len()
            )))
        }
    }
}
