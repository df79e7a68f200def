//! Bookmark API 服务模块
//!
//! 该模块包含书签页面使用的全部 JSON 端点：
//! - 书签 CRUD 与编辑状态
//! - 媒体上传
//! - PDF 导出

mod crud;
pub mod error_code;
mod export;
mod helpers;
mod media;
pub mod routes;
mod types;

pub use types::*;

pub use helpers::{api_result, error_from_bookmark, error_response, success_response};

pub use error_code::ErrorCode;
