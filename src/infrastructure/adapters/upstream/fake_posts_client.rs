//! Fake Posts Client - 内存版上游
//!
//! 模拟 jsonplaceholder 的行为，不发起网络请求；用于测试和离线运行

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::application::ports::{PostsApiPort, UpstreamError};
use crate::domain::{NewPost, Post, PostChanges, PostId};

/// 一次被记录的上游调用
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    /// 请求体（序列化后的 JSON），GET/DELETE 为 None
    pub body: Option<Value>,
}

/// Fake Posts Client
///
/// 未知 id 返回 404 状态错误；`with_failure_status` 让所有调用以指定状态码失败
pub struct FakePostsClient {
    posts: RwLock<Vec<Post>>,
    calls: RwLock<Vec<RecordedCall>>,
    failure_status: Option<u16>,
}

impl FakePostsClient {
    /// 创建新的 FakePostsClient
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
            calls: RwLock::new(Vec::new()),
            failure_status: None,
        }
    }

    /// 带几条示例数据
    pub fn with_sample_posts() -> Self {
        let posts = (1..=5)
            .map(|id| {
                Post::new(
                    1,
                    id,
                    format!("sample post {}", id),
                    format!("body of sample post {}", id),
                )
            })
            .collect();
        tracing::info!("FakePostsClient initialized with sample posts");
        Self::new(posts)
    }

    /// 所有调用都以指定状态码失败
    pub fn with_failure_status(mut self, status: u16) -> Self {
        self.failure_status = Some(status);
        self
    }

    /// 已记录的调用（按发生顺序）
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.read().await.clone()
    }

    async fn record(
        &self,
        method: &'static str,
        path: String,
        body: Option<Value>,
    ) -> Result<(), UpstreamError> {
        tracing::debug!(method, path = %path, "FakePostsClient: recording call");
        self.calls.write().await.push(RecordedCall { method, path, body });

        match self.failure_status {
            Some(status) => Err(UpstreamError::Status {
                status,
                body: "{}".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> UpstreamError {
        UpstreamError::Status {
            status: 404,
            body: "{}".to_string(),
        }
    }

    fn to_value<T: serde::Serialize>(value: &T) -> Result<Value, UpstreamError> {
        serde_json::to_value(value).map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }

    fn find_index(posts: &[Post], id: &PostId) -> Option<usize> {
        let id: u64 = id.as_str().parse().ok()?;
        posts.iter().position(|p| p.id == id)
    }
}

/// 非字符串值按 JSON 文本落地
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl PostsApiPort for FakePostsClient {
    async fn list_posts(&self) -> Result<Value, UpstreamError> {
        self.record("GET", "/posts".to_string(), None).await?;
        let posts = self.posts.read().await;
        Self::to_value(&*posts)
    }

    async fn get_post(&self, id: &PostId) -> Result<Value, UpstreamError> {
        self.record("GET", format!("/posts/{}", id), None).await?;
        let posts = self.posts.read().await;
        let index = Self::find_index(&posts, id).ok_or_else(Self::not_found)?;
        Self::to_value(&posts[index])
    }

    async fn update_post(&self, id: &PostId, changes: &PostChanges) -> Result<Value, UpstreamError> {
        self.record("PUT", format!("/posts/{}", id), Some(Self::to_value(changes)?))
            .await?;
        let mut posts = self.posts.write().await;
        let index = Self::find_index(&posts, id).ok_or_else(Self::not_found)?;
        let post = &mut posts[index];
        if let Some(title) = &changes.title {
            post.title = text_of(title);
        }
        if let Some(body) = &changes.body {
            post.body = text_of(body);
        }
        Self::to_value(&*post)
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), UpstreamError> {
        self.record("DELETE", format!("/posts/{}", id), None).await?;
        let mut posts = self.posts.write().await;
        if let Some(index) = Self::find_index(&posts, id) {
            posts.remove(index);
        }
        Ok(())
    }

    async fn create_post(&self, post: &NewPost) -> Result<Value, UpstreamError> {
        self.record("POST", "/posts".to_string(), Some(Self::to_value(post)?))
            .await?;
        let mut posts = self.posts.write().await;
        let created = Post {
            user_id: None,
            id: posts.len() as u64 + 1,
            title: post.title.as_ref().map(text_of).unwrap_or_default(),
            body: post.body.as_ref().map(text_of).unwrap_or_default(),
        };
        posts.push(created.clone());
        Self::to_value(&created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_sample_posts_are_listed() {
        let fake = FakePostsClient::with_sample_posts();
        let posts = fake.list_posts().await.unwrap();
        assert_eq!(posts.as_array().map(|a| a.len()), Some(5));
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let fake = FakePostsClient::new(vec![Post::new(1, 1, "old", "old body")]);
        let changes = PostChanges {
            title: None,
            body: Some(json!("new body")),
        };

        let updated = fake.update_post(&PostId::new("1"), &changes).await.unwrap();
        assert_eq!(updated["title"], json!("old"));
        assert_eq!(updated["body"], json!("new body"));
        assert_eq!(
            fake.calls().await[0].body,
            Some(json!({"body": "new body"}))
        );
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let fake = FakePostsClient::with_sample_posts();
        let err = fake.get_post(&PostId::new("abc")).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_failure_status_applies_to_every_call() {
        let fake = FakePostsClient::with_sample_posts().with_failure_status(500);
        assert_eq!(fake.list_posts().await.unwrap_err().status(), Some(500));
        assert_eq!(
            fake.delete_post(&PostId::new("1")).await.unwrap_err().status(),
            Some(500)
        );
        assert_eq!(fake.calls().await.len(), 2);
    }
}
