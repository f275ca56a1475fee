//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（PostsApi）
//! - commands: CQRS 命令及处理器（更新、删除、创建）
//! - queries: CQRS 查询及处理器（列表、详情）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CreatePostHandler, DeletePostHandler, UpdatePostHandler},
    CreatePost, DeletePost, UpdatePost,
};

pub use error::ApplicationError;

pub use ports::{PostsApiPort, UpstreamError};

pub use queries::{
    handlers::{GetPostHandler, ListPostsHandler},
    GetPost, ListPosts,
};
