//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 上游配置
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求体大小上限（字节），超出时按空请求体处理
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    6060
}

fn default_max_body_bytes() -> usize {
    100 * 1024 // 100 KB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 上游实现
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpstreamMode {
    /// 通过 HTTP 调用真实上游
    #[default]
    Http,
    /// 内存版上游（离线运行）
    Fake,
}

/// 上游配置
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// posts 资源的基础 URL
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// 请求超时时间（秒），0 表示不设超时
    #[serde(default)]
    pub timeout_secs: u64,

    #[serde(default)]
    pub mode: UpstreamMode,
}

fn default_upstream_url() -> String {
    "https://jsonplaceholder.typicode.com/posts".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_secs: 0,
            mode: UpstreamMode::Http,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 6060);
        assert_eq!(config.server.max_body_bytes, 100 * 1024);
        assert_eq!(
            config.upstream.base_url,
            "https://jsonplaceholder.typicode.com/posts"
        );
        assert_eq!(config.upstream.timeout_secs, 0);
        assert_eq!(config.upstream.mode, UpstreamMode::Http);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:6060");
    }
}
