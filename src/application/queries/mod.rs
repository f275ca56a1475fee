//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：列出与读取 Post

mod post_queries;

pub mod handlers;

pub use post_queries::*;
