//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::BookmarkError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 3000-3099: 书签错误
/// - 4000-4099: 上传与导出错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    InternalServerError = 1005,
    FileTooLarge = 1011,

    // 书签错误 3000-3099
    BookmarkNotFound = 3000,
    BookmarkOutOfRange = 3001,
    BookmarkInvalid = 3002,

    // 上传与导出错误 4000-4099
    ExportFailed = 4001,
    InvalidMultipartData = 4002,
    UnsupportedMedia = 4004,
    ExportEncodingError = 4005,
}

impl From<&BookmarkError> for ErrorCode {
    fn from(err: &BookmarkError) -> Self {
        match err {
            BookmarkError::Validation(_) => ErrorCode::BookmarkInvalid,
            BookmarkError::NotFound(_) => ErrorCode::BookmarkNotFound,
            BookmarkError::OutOfRange(_) => ErrorCode::BookmarkOutOfRange,
            BookmarkError::Encoding(_) => ErrorCode::ExportEncodingError,
            BookmarkError::Export(_) => ErrorCode::ExportFailed,
            BookmarkError::Upload(_) => ErrorCode::InvalidMultipartData,
            BookmarkError::UnsupportedMedia(_) => ErrorCode::UnsupportedMedia,
            BookmarkError::FileTooLarge(_) => ErrorCode::FileTooLarge,
            BookmarkError::Config(_)
            | BookmarkError::FileOperation(_)
            | BookmarkError::Serialization(_) => ErrorCode::InternalServerError,
        }
    }
}
