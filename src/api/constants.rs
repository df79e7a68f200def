//! API 模块常量定义

/// Versioned scope under the API prefix
pub const API_VERSION_SCOPE: &str = "/v1";

/// Multipart field that carries the media file
pub const MEDIA_FIELD_NAME: &str = "file";

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Maximum accepted JSON body for bookmark payloads
pub const MAX_JSON_BODY_BYTES: usize = 64 * 1024;
