//! Posts Relay - posts 资源中继服务
//!
//! 架构设计: Hexagonal Architecture + CQRS
//!
//! 领域层 (domain/):
//! - Post Context: Post 结构与字段转发规则
//!
//! 应用层 (application/):
//! - Ports: PostsApiPort（上游 posts 服务）
//! - Commands: 更新、删除、创建
//! - Queries: 列表、详情
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: Front Door（日志、请求体解析、CORS、路由、404）
//! - Adapters: reqwest 上游客户端、内存版上游

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
