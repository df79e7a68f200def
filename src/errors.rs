use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    Validation(String),
    NotFound(String),
    OutOfRange(String),
    Encoding(String),
    Export(String),
    Upload(String),
    UnsupportedMedia(String),
    FileTooLarge(String),
    Config(String),
    FileOperation(String),
    Serialization(String),
}

impl BookmarkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            BookmarkError::Validation(_) => "E001",
            BookmarkError::NotFound(_) => "E002",
            BookmarkError::OutOfRange(_) => "E003",
            BookmarkError::Encoding(_) => "E004",
            BookmarkError::Export(_) => "E005",
            BookmarkError::Upload(_) => "E006",
            BookmarkError::UnsupportedMedia(_) => "E007",
            BookmarkError::FileTooLarge(_) => "E008",
            BookmarkError::Config(_) => "E009",
            BookmarkError::FileOperation(_) => "E010",
            BookmarkError::Serialization(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            BookmarkError::Validation(_) => "Validation Error",
            BookmarkError::NotFound(_) => "Bookmark Not Found",
            BookmarkError::OutOfRange(_) => "Index Out Of Range",
            BookmarkError::Encoding(_) => "Encoding Error",
            BookmarkError::Export(_) => "Export Error",
            BookmarkError::Upload(_) => "Upload Error",
            BookmarkError::UnsupportedMedia(_) => "Unsupported Media",
            BookmarkError::FileTooLarge(_) => "File Too Large",
            BookmarkError::Config(_) => "Configuration Error",
            BookmarkError::FileOperation(_) => "File Operation Error",
            BookmarkError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            BookmarkError::Validation(msg)
            | BookmarkError::NotFound(msg)
            | BookmarkError::OutOfRange(msg)
            | BookmarkError::Encoding(msg)
            | BookmarkError::Export(msg)
            | BookmarkError::Upload(msg)
            | BookmarkError::UnsupportedMedia(msg)
            | BookmarkError::FileTooLarge(msg)
            | BookmarkError::Config(msg)
            | BookmarkError::FileOperation(msg)
            | BookmarkError::Serialization(msg) => msg,
        }
    }

    /// HTTP status used when the error reaches the API boundary
    pub fn http_status(&self) -> StatusCode {
        match self {
            BookmarkError::Validation(_) => StatusCode::BAD_REQUEST,
            BookmarkError::NotFound(_) => StatusCode::NOT_FOUND,
            BookmarkError::OutOfRange(_) => StatusCode::NOT_FOUND,
            BookmarkError::Encoding(_) => StatusCode::UNPROCESSABLE_ENTITY,
            BookmarkError::Upload(_) => StatusCode::BAD_REQUEST,
            BookmarkError::UnsupportedMedia(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            BookmarkError::FileTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            BookmarkError::Export(_)
            | BookmarkError::Config(_)
            | BookmarkError::FileOperation(_)
            | BookmarkError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 CLI 模式）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BookmarkError {}

// 便捷的构造函数
impl BookmarkError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BookmarkError::NotFound(msg.into())
    }

    pub fn out_of_range<T: Into<String>>(msg: T) -> Self {
        BookmarkError::OutOfRange(msg.into())
    }

    pub fn encoding<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Encoding(msg.into())
    }

    pub fn export<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Export(msg.into())
    }

    pub fn upload<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Upload(msg.into())
    }

    pub fn unsupported_media<T: Into<String>>(msg: T) -> Self {
        BookmarkError::UnsupportedMedia(msg.into())
    }

    pub fn file_too_large<T: Into<String>>(msg: T) -> Self {
        BookmarkError::FileTooLarge(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        BookmarkError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BookmarkError::Serialization(msg.into())
    }
}

impl From<std::io::Error> for BookmarkError {
    fn from(err: std::io::Error) -> Self {
        BookmarkError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for BookmarkError {
    fn from(err: serde_json::Error) -> Self {
        BookmarkError::Serialization(err.to_string())
    }
}

impl From<lopdf::Error> for BookmarkError {
    fn from(err: lopdf::Error) -> Self {
        BookmarkError::Export(err.to_string())
    }
}

impl From<config::ConfigError> for BookmarkError {
    fn from(err: config::ConfigError) -> Self {
        BookmarkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookmarkError>;
