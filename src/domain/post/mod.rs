//! Post Context - posts 限界上下文
//!
//! 职责:
//! - 描述上游定义的 Post 结构
//! - 从请求体中挑选需要转发的字段（更新/创建）

mod entities;
mod value_objects;

pub use entities::Post;
pub use value_objects::{is_truthy, NewPost, PostChanges, PostFields, PostId};
