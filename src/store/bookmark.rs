use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a bookmark within one store
///
/// Assigned from a per-store counter at creation time and never reused, so
/// a deleted bookmark's id keeps failing lookups instead of silently
/// pointing at whatever moved into its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(u64);

impl BookmarkId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = std::num::ParseIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The three user-editable fields of a bookmark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkFields {
    pub start: String,
    pub end: String,
    pub title: String,
}

impl BookmarkFields {
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            title: title.into(),
        }
    }
}

/// A named time range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub start: String,
    pub end: String,
    pub title: String,
}

impl Bookmark {
    pub fn fields(&self) -> BookmarkFields {
        BookmarkFields {
            start: self.start.clone(),
            end: self.end.clone(),
            title: self.title.clone(),
        }
    }

    pub(crate) fn assign(&mut self, fields: BookmarkFields) {
        self.start = fields.start;
        self.end = fields.end;
        self.title = fields.title;
    }
}

/// Active edit target: which bookmark is being edited and what its fields
/// looked like when editing started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditTarget {
    pub id: BookmarkId,
    pub snapshot: BookmarkFields,
}
