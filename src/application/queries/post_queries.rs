//! Post Queries

use crate::domain::PostId;

/// 列出所有 Post 查询
#[derive(Debug, Clone)]
pub struct ListPosts;

/// 获取单个 Post 查询
#[derive(Debug, Clone)]
pub struct GetPost {
    pub id: PostId,
}
