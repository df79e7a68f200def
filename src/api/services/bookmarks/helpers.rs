//! Bookmark API 帮助函数

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::api::constants::MAX_JSON_BODY_BYTES;
use crate::errors::BookmarkError;
use crate::store::BookmarkId;

use super::error_code::ErrorCode;
use super::types::ApiResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    code: ErrorCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code: code as i32,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, ErrorCode::Success, "OK", Some(data))
}

/// 构建 201 响应
pub fn created_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::CREATED, ErrorCode::Success, "Created", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, error_code: ErrorCode, message: &str) -> HttpResponse {
    json_response::<()>(status, error_code, message, None)
}

/// 从 BookmarkError 构建错误响应（自动映射 HTTP 状态码和 ErrorCode）
pub fn error_from_bookmark(err: &BookmarkError) -> HttpResponse {
    error_response(err.http_status(), ErrorCode::from(err), err.message())
}

/// 统一 Result → HttpResponse 转换
pub fn api_result<T: Serialize>(result: crate::errors::Result<T>) -> HttpResponse {
    match result {
        Ok(data) => success_response(data),
        Err(e) => error_from_bookmark(&e),
    }
}

/// Path segment → id; anything that is not a number cannot name a bookmark
pub fn parse_bookmark_id(raw: &str) -> Result<BookmarkId, BookmarkError> {
    raw.parse()
        .map_err(|_| BookmarkError::not_found(format!("Bookmark '{}' not found", raw)))
}

/// JSON 解析错误也走统一外壳
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| {
            let response = error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::BadRequest,
                &format!("Invalid request body: {}", err),
            );
            InternalError::from_response(err, response).into()
        })
}
