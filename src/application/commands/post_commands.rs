//! Post Commands

use crate::domain::{NewPost, PostChanges, PostId};

/// 更新 Post 命令
#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub id: PostId,
    pub changes: PostChanges,
}

/// 删除 Post 命令
#[derive(Debug, Clone)]
pub struct DeletePost {
    pub id: PostId,
}

/// 创建 Post 命令
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub post: NewPost,
}
