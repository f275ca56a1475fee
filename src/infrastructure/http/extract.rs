//! Request Body Extractor
//!
//! 把 JSON 或 URL 编码请求体解析成 `PostFields`。
//! 请求体缺失、格式错误或超过大小限制时得到空映射，不会拒绝请求。

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::{Map, Value};

use crate::domain::PostFields;

/// 宽容的请求体提取器
#[derive(Debug, Clone, Default)]
pub struct ParsedBody(pub PostFields);

fn content_type(request: &Request) -> String {
    request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[async_trait]
impl<S> FromRequest<S> for ParsedBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = content_type(&req);

        let fields = if content_type.starts_with("application/json") {
            match Json::<Map<String, Value>>::from_request(req, state).await {
                Ok(Json(map)) => PostFields::new(map),
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "Ignoring unparsable JSON body");
                    PostFields::empty()
                }
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(form)) => PostFields::new(
                    form.into_iter()
                        .map(|(k, v)| (k, Value::String(v)))
                        .collect(),
                ),
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "Ignoring unparsable form body");
                    PostFields::empty()
                }
            }
        } else {
            PostFields::empty()
        };

        Ok(Self(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use serde_json::json;

    async fn extract(content_type: Option<&str>, body: &'static str) -> PostFields {
        let mut builder = HttpRequest::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let request = builder.body(Body::from(body)).unwrap();
        let ParsedBody(fields) = ParsedBody::from_request(request, &()).await.unwrap();
        fields
    }

    #[tokio::test]
    async fn test_json_object_body() {
        let fields = extract(Some("application/json"), r#"{"title":"a","body":"b"}"#).await;
        assert_eq!(fields.get("title"), Some(&json!("a")));
        assert_eq!(fields.get("body"), Some(&json!("b")));
    }

    #[tokio::test]
    async fn test_json_with_charset() {
        let fields = extract(Some("application/json; charset=utf-8"), r#"{"title":"a"}"#).await;
        assert_eq!(fields.get("title"), Some(&json!("a")));
    }

    #[tokio::test]
    async fn test_urlencoded_body() {
        let fields = extract(
            Some("application/x-www-form-urlencoded"),
            "title=hello+there&body=world",
        )
        .await;
        assert_eq!(fields.get("title"), Some(&json!("hello there")));
        assert_eq!(fields.get("body"), Some(&json!("world")));
    }

    #[tokio::test]
    async fn test_malformed_json_is_empty() {
        let fields = extract(Some("application/json"), "{not json").await;
        assert!(fields.is_empty());
    }

    #[tokio::test]
    async fn test_non_object_json_is_empty() {
        let fields = extract(Some("application/json"), r#"["title"]"#).await;
        assert!(fields.is_empty());
    }

    #[tokio::test]
    async fn test_missing_body_is_empty() {
        let fields = extract(Some("application/json"), "").await;
        assert!(fields.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_content_type_is_empty() {
        let fields = extract(Some("text/plain"), "title=x").await;
        assert!(fields.is_empty());

        let fields = extract(None, r#"{"title":"x"}"#).await;
        assert!(fields.is_empty());
    }
}
