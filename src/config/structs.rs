use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::iter().find(|f| f.as_ref() == wanted).ok_or_else(|| {
            let valid: Vec<String> = Self::iter().map(|f| f.as_ref().to_string()).collect();
            format!("Invalid log format: '{}'. Valid: {}", s, valid.join(", "))
        })
    }
}

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 优先级：ENV > config.toml > 默认值
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub routes: RouteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// 路由前缀配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    #[serde(default = "default_health_prefix")]
    pub health_prefix: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// Per-browser session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Sessions untouched for this long are dropped with their bookmarks
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default)]
    pub cookie_secure: bool,
}

/// 媒体上传配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,
}

/// PDF export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_title")]
    pub title: String,
    #[serde(default = "default_export_filename")]
    pub filename: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

/// Optional input checks, all off by default
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Require `H:MM:SS` for start and end
    #[serde(default)]
    pub time_format: bool,
    /// Reject a range whose end is before its start
    #[serde(default)]
    pub ordered_range: bool,
    #[serde(default)]
    pub non_empty_title: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_health_prefix() -> String {
    "/health".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_idle_timeout_secs() -> u64 {
    4 * 3600
}

fn default_max_sessions() -> u64 {
    10_000
}

fn default_cookie_name() -> String {
    "bookmarker_session".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["mp4".to_string(), "m4a".to_string()]
}

fn default_max_size_mb() -> u64 {
    200
}

fn default_export_title() -> String {
    "Audio Bookmarks".to_string()
}

fn default_export_filename() -> String {
    "bookmarks.pdf".to_string()
}

fn default_font_size() -> f32 {
    12.0
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            workers: default_workers(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            api_prefix: default_api_prefix(),
            health_prefix: default_health_prefix(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: default_idle_timeout_secs(),
            max_sessions: default_max_sessions(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            max_size_mb: default_max_size_mb(),
        }
    }
}

impl UploadConfig {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: default_export_title(),
            filename: default_export_filename(),
            font_size: default_font_size(),
        }
    }
}
