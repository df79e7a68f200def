//! Bookmark API 类型定义

use serde::{Deserialize, Serialize};

use crate::store::BookmarkFields;

/// 统一响应外壳
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// Body of add and update requests
///
/// Missing fields are taken as empty strings.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct BookmarkPayload {
    pub start: String,
    pub end: String,
    pub title: String,
}

impl From<BookmarkPayload> for BookmarkFields {
    fn from(payload: BookmarkPayload) -> Self {
        BookmarkFields::new(payload.start, payload.end, payload.title)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub sessions: u64,
    pub response_time_ms: u32,
}
