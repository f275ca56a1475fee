//! Post Context - Entities

use serde::{Deserialize, Serialize};

/// 上游定义的 Post
///
/// 中继路径把 Post 当作不透明的 JSON 透传，这个结构只在需要落地数据的地方使用
/// （例如内存版上游）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// 上游通过 POST 新建的 Post 不带 userId
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Post {
    pub fn new(user_id: u64, id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
