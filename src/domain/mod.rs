//! Domain Layer - 领域层
//!
//! 只有一个限界上下文:
//! - Post Context: 上游 posts 资源的数据形状与字段转发规则
//!
//! Post 的真实数据归上游 API 所有，本服务不做持久化。

pub mod post;

pub use post::{is_truthy, NewPost, Post, PostChanges, PostFields, PostId};
