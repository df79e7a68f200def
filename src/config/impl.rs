use std::path::Path;
use std::sync::{Arc, OnceLock};

use config::{Config, Environment, File};

use super::AppConfig;
use crate::errors::{BookmarkError, Result};

/// Default configuration file, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment prefix, e.g. `BM__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "BM";

static CONFIG: OnceLock<Arc<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    pub fn load(path: Option<&str>) -> Result<Self> {
        let explicit = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        if explicit && !Path::new(path).exists() {
            return Err(BookmarkError::config(format!(
                "Configuration file not found: {}",
                path
            )));
        }

        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_extensions"),
            )
            .build()?;

        let config = settings.try_deserialize::<AppConfig>()?;
        if Path::new(path).exists() {
            eprintln!("[INFO] Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BookmarkError::serialization(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Get the global configuration instance
///
/// Falls back to defaults when `init_config` was never called.
pub fn get_config() -> Arc<AppConfig> {
    CONFIG
        .get_or_init(|| Arc::new(AppConfig::default()))
        .clone()
}

/// Initialize the global configuration
///
/// Only the first call has an effect.
pub fn init_config(path: Option<&str>) -> Result<Arc<AppConfig>> {
    if let Some(config) = CONFIG.get() {
        return Ok(config.clone());
    }
    let loaded = Arc::new(AppConfig::load(path)?);
    Ok(CONFIG.get_or_init(|| loaded).clone())
}
