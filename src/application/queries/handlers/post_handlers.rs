//! Post Query Handlers

use serde_json::Value;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::PostsApiPort;
use crate::application::queries::{GetPost, ListPosts};

// ============================================================================
// Handlers
// ============================================================================

/// ListPosts Handler
pub struct ListPostsHandler {
    posts_api: Arc<dyn PostsApiPort>,
}

impl ListPostsHandler {
    pub fn new(posts_api: Arc<dyn PostsApiPort>) -> Self {
        Self { posts_api }
    }

    /// 返回上游的完整列表，不分页
    pub async fn handle(&self, _query: ListPosts) -> Result<Value, ApplicationError> {
        let posts = self.posts_api.list_posts().await?;

        tracing::debug!(
            count = posts.as_array().map(|a| a.len()),
            "Posts listed"
        );

        Ok(posts)
    }
}

/// GetPost Handler
pub struct GetPostHandler {
    posts_api: Arc<dyn PostsApiPort>,
}

impl GetPostHandler {
    pub fn new(posts_api: Arc<dyn PostsApiPort>) -> Self {
        Self { posts_api }
    }

    pub async fn handle(&self, query: GetPost) -> Result<Value, ApplicationError> {
        let post = self.posts_api.get_post(&query.id).await?;
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Post, PostId};
    use crate::infrastructure::adapters::FakePostsClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_returns_every_upstream_post() {
        let fake = Arc::new(FakePostsClient::new(vec![
            Post::new(1, 1, "a", "b"),
            Post::new(1, 2, "c", "d"),
        ]));
        let handler = ListPostsHandler::new(fake);

        let posts = handler.handle(ListPosts).await.unwrap();
        assert_eq!(posts.as_array().map(|a| a.len()), Some(2));
    }

    #[tokio::test]
    async fn test_get_returns_upstream_post() {
        let fake = Arc::new(FakePostsClient::new(vec![Post::new(4, 9, "t", "b")]));
        let handler = GetPostHandler::new(fake);

        let post = handler
            .handle(GetPost { id: PostId::new("9") })
            .await
            .unwrap();
        assert_eq!(post, json!({"userId": 4, "id": 9, "title": "t", "body": "b"}));
    }

    #[tokio::test]
    async fn test_get_unknown_post_is_upstream_error() {
        let fake = Arc::new(FakePostsClient::new(Vec::new()));
        let handler = GetPostHandler::new(fake);

        let err = handler
            .handle(GetPost { id: PostId::new("1") })
            .await
            .unwrap_err();
        let ApplicationError::Upstream(upstream) = err;
        assert_eq!(upstream.status(), Some(404));
    }
}
