//! Post Command Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::commands::{CreatePost, DeletePost, UpdatePost};
use crate::application::error::ApplicationError;
use crate::application::ports::PostsApiPort;

// ============================================================================
// UpdatePost
// ============================================================================

/// UpdatePost Handler
pub struct UpdatePostHandler {
    posts_api: Arc<dyn PostsApiPort>,
}

impl UpdatePostHandler {
    pub fn new(posts_api: Arc<dyn PostsApiPort>) -> Self {
        Self { posts_api }
    }

    /// 只把出现且为真值的字段发给上游，返回上游的更新结果
    pub async fn handle(&self, command: UpdatePost) -> Result<Value, ApplicationError> {
        tracing::debug!(
            post_id = %command.id,
            has_title = command.changes.title.is_some(),
            has_body = command.changes.body.is_some(),
            "Updating post"
        );

        let updated = self
            .posts_api
            .update_post(&command.id, &command.changes)
            .await?;

        Ok(updated)
    }
}

// ============================================================================
// DeletePost
// ============================================================================

/// DeletePost Handler
pub struct DeletePostHandler {
    posts_api: Arc<dyn PostsApiPort>,
}

impl DeletePostHandler {
    pub fn new(posts_api: Arc<dyn PostsApiPort>) -> Self {
        Self { posts_api }
    }

    /// 上游响应体被丢弃
    pub async fn handle(&self, command: DeletePost) -> Result<(), ApplicationError> {
        self.posts_api.delete_post(&command.id).await?;

        tracing::info!(post_id = %command.id, "Post deleted");

        Ok(())
    }
}

// ============================================================================
// CreatePost
// ============================================================================

/// CreatePost Handler
pub struct CreatePostHandler {
    posts_api: Arc<dyn PostsApiPort>,
}

impl CreatePostHandler {
    pub fn new(posts_api: Arc<dyn PostsApiPort>) -> Self {
        Self { posts_api }
    }

    pub async fn handle(&self, command: CreatePost) -> Result<Value, ApplicationError> {
        let created = self.posts_api.create_post(&command.post).await?;

        tracing::info!(
            post_id = ?created.get("id"),
            "Post created"
        );

        Ok(created)
    }
}
