//! HTTP Posts Client - 调用上游 posts REST 服务
//!
//! 实现 PostsApiPort trait，每个方法只发一次请求
//!
//! 上游 API:
//! GET    {base_url}
//! GET    {base_url}/{id}
//! PUT    {base_url}/{id}   Request: {"title"?, "body"?}
//! DELETE {base_url}/{id}
//! POST   {base_url}        Request: {"title", "body"}

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

use crate::application::ports::{PostsApiPort, UpstreamError};
use crate::domain::{NewPost, PostChanges, PostId};

/// 默认上游地址
pub const DEFAULT_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// 上游响应是否被接受
///
/// 只有 2xx 视为成功，其余状态码一律转成 `UpstreamError::Status`。
pub fn is_accepted_status(status: StatusCode) -> bool {
    status.is_success()
}

/// HTTP Posts 客户端配置
#[derive(Debug, Clone)]
pub struct HttpPostsClientConfig {
    /// posts 资源的基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），0 表示不设超时
    pub timeout_secs: u64,
}

impl Default for HttpPostsClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_secs: 0,
        }
    }
}

impl HttpPostsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Posts 客户端
pub struct HttpPostsClient {
    client: Client,
    base_url: Url,
}

impl HttpPostsClient {
    /// 创建新的客户端
    pub fn new(config: HttpPostsClientConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            UpstreamError::InvalidUrl(format!("{}: {}", config.base_url, e))
        })?;

        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| UpstreamError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// 集合 URL
    fn collection_url(&self) -> Url {
        self.base_url.clone()
    }

    /// 单个 Post 的 URL，id 作为一个路径段追加（必要时百分号编码）
    fn item_url(&self, id: &PostId) -> Result<Url, UpstreamError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidId(id.to_string()))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }

    /// 发送请求并按接受阈值检查状态码，返回未读取的响应
    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        request: RequestBuilder,
    ) -> Result<Response, UpstreamError> {
        tracing::debug!(method = %method, url = %url, "Sending upstream request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout
            } else if e.is_connect() {
                UpstreamError::Network(format!("Cannot connect to upstream: {}", e))
            } else {
                UpstreamError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        tracing::debug!(method = %method, url = %url, status = status.as_u16(), "Upstream responded");

        if !is_accepted_status(status) {
            let error_text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: error_text,
            });
        }

        Ok(response)
    }

    /// 发送请求并读取响应体
    async fn send(&self, method: Method, url: Url, request: RequestBuilder) -> Result<Value, UpstreamError> {
        let response = self.dispatch(method, url, request).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        Ok(decode_body(&bytes))
    }
}

/// 解析上游响应体
///
/// 空响应体为 `{}`；不是 JSON 的响应体按文本原样转成 JSON 字符串
fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Object(Default::default());
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[async_trait]
impl PostsApiPort for HttpPostsClient {
    async fn list_posts(&self) -> Result<Value, UpstreamError> {
        let url = self.collection_url();
        let request = self.client.get(url.clone());
        self.send(Method::GET, url, request).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Value, UpstreamError> {
        let url = self.item_url(id)?;
        let request = self.client.get(url.clone());
        self.send(Method::GET, url, request).await
    }

    async fn update_post(&self, id: &PostId, changes: &PostChanges) -> Result<Value, UpstreamError> {
        let url = self.item_url(id)?;
        let request = self.client.put(url.clone()).json(changes);
        self.send(Method::PUT, url, request).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), UpstreamError> {
        let url = self.item_url(id)?;
        let request = self.client.delete(url.clone());
        // 只检查状态码，响应体不读取
        self.dispatch(Method::DELETE, url, request).await?;
        Ok(())
    }

    async fn create_post(&self, post: &NewPost) -> Result<Value, UpstreamError> {
        let url = self.collection_url();
        let request = self.client.post(url.clone()).json(post);
        self.send(Method::POST, url, request).await
    }
}
