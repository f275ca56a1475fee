//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：更新、删除、创建 Post

mod post_commands;

pub mod handlers;

pub use post_commands::*;
