//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. `PORT` 环境变量（仅覆盖 server.port）
//! 2. `POSTS_RELAY_` 前缀的环境变量
//! 3. 配置文件（config.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use reqwest::Url;
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 平台约定的端口环境变量
const PORT_ENV: &str = "PORT";

/// 解析 `PORT` 环境变量
///
/// 只接受非零的 u16；未设置或无效时返回 None，使用配置/默认端口
pub fn port_from_env(raw: Option<&str>) -> Option<u16> {
    raw.and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|port| *port != 0)
}

/// 加载应用配置
///
/// # 环境变量示例
/// - `PORT=8080`
/// - `POSTS_RELAY_SERVER__HOST=127.0.0.1`
/// - `POSTS_RELAY_UPSTREAM__BASE_URL=http://localhost:3000/posts`
/// - `POSTS_RELAY_UPSTREAM__TIMEOUT_SECS=10`
/// - `POSTS_RELAY_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let port = std::env::var(PORT_ENV).ok();
    build_config(config_path, port.as_deref())
}

fn build_config(config_path: Option<&Path>, port_env: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 6060)?
        .set_default("server.max_body_bytes", 100 * 1024)?
        .set_default("upstream.base_url", "https://jsonplaceholder.typicode.com/posts")?
        .set_default("upstream.timeout_secs", 0)?
        .set_default("upstream.mode", "http")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 前缀环境变量
    // 例如: POSTS_RELAY_UPSTREAM__BASE_URL=http://localhost:3000/posts
    builder = builder.add_source(
        Environment::with_prefix("POSTS_RELAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. PORT（最高优先级）
    if let Some(port) = port_from_env(port_env) {
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.upstream.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Upstream base URL cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&config.upstream.base_url).map_err(|e| {
        ConfigError::ValidationError(format!("Invalid upstream base URL: {}", e))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "Upstream base URL must be http or https: {}",
            config.upstream.base_url
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    if let Ok(raw) = std::env::var(PORT_ENV) {
        if port_from_env(Some(&raw)).is_none() {
            tracing::warn!(value = %raw, "Ignoring invalid PORT, falling back to {}", config.server.port);
        }
    }

    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Max Body Size: {} bytes", config.server.max_body_bytes);
    tracing::info!("Upstream Mode: {:?}", config.upstream.mode);
    tracing::info!("Upstream URL: {}", config.upstream.base_url);
    if config.upstream.timeout_secs > 0 {
        tracing::info!("Upstream Timeout: {}s", config.upstream.timeout_secs);
    } else {
        tracing::info!("Upstream Timeout: none");
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamMode;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_port_from_env() {
        assert_eq!(port_from_env(Some("8080")), Some(8080));
        assert_eq!(port_from_env(Some(" 3000 ")), Some(3000));
        assert_eq!(port_from_env(None), None);
        assert_eq!(port_from_env(Some("")), None);
        assert_eq!(port_from_env(Some("abc")), None);
        assert_eq!(port_from_env(Some("0")), None);
        assert_eq!(port_from_env(Some("70000")), None);
    }

    #[test]
    fn test_file_values_are_loaded() {
        let file = write_config(
            r#"
[server]
port = 7070

[upstream]
base_url = "http://localhost:3000/posts"
timeout_secs = 5
mode = "fake"
"#,
        );

        let config = build_config(Some(file.path()), None).unwrap();
        assert_eq!(config.server.port, 7070);
        assert_eq!(config.upstream.base_url, "http://localhost:3000/posts");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(config.upstream.mode, UpstreamMode::Fake);
    }

    #[test]
    fn test_port_env_overrides_file() {
        let file = write_config("[server]\nport = 7070\n");
        let config = build_config(Some(file.path()), Some("9090")).unwrap();
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_invalid_port_env_is_ignored() {
        let file = write_config("[log]\nlevel = \"debug\"\n");
        let config = build_config(Some(file.path()), Some("not-a-port")).unwrap();
        assert_eq!(config.server.port, 6060);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_bad_upstream_url() {
        let mut config = AppConfig::default();
        config.upstream.base_url = String::new();
        assert!(validate_config(&config).is_err());

        config.upstream.base_url = "ftp://example.com/posts".to_string();
        assert!(validate_config(&config).is_err());

        config.upstream.base_url = "no scheme".to_string();
        assert!(validate_config(&config).is_err());
    }
}
