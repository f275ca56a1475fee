//! Configuration Module
//!
//! 提供应用配置管理功能，支持多层级配置来源：
//! - `PORT` 环境变量（仅服务端口）
//! - `POSTS_RELAY_*` 环境变量
//! - 配置文件（TOML 格式）
//! - 默认值（最低优先级）

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, port_from_env, print_config, ConfigError};
pub use types::{AppConfig, LogConfig, ServerConfig, UpstreamConfig, UpstreamMode};
