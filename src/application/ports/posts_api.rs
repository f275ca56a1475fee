//! Posts API Port - 上游 posts 服务抽象
//!
//! 定义中继所需的出站调用接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{NewPost, PostChanges, PostId};

/// 上游调用错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// 上游返回了不被接受的状态码（非 2xx）
    #[error("Upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    /// 上游返回的状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Posts API Port
///
/// 每个方法对应一次上游调用，不重试、不缓存。
/// 成功时返回上游响应体（不透明 JSON）。
#[async_trait]
pub trait PostsApiPort: Send + Sync {
    /// GET /posts
    async fn list_posts(&self) -> Result<Value, UpstreamError>;

    /// GET /posts/{id}
    async fn get_post(&self, id: &PostId) -> Result<Value, UpstreamError>;

    /// PUT /posts/{id}
    async fn update_post(&self, id: &PostId, changes: &PostChanges) -> Result<Value, UpstreamError>;

    /// DELETE /posts/{id}
    ///
    /// 只关心状态码，上游响应体被丢弃
    async fn delete_post(&self, id: &PostId) -> Result<(), UpstreamError>;

    /// POST /posts
    async fn create_post(&self, post: &NewPost) -> Result<Value, UpstreamError>;
}
