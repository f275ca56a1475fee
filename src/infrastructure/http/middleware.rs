//! HTTP Middleware
//!
//! - CORS 响应头与 OPTIONS 预检短路
//! - HTTP 状态码错误日志
//! - handler panic 兜底

use std::any::Any;

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use http::{HeaderValue, Method};

use super::dto::Empty;
use super::error::ApiError;

/// `Access-Control-Allow-Headers` 的固定取值
pub const ALLOWED_HEADERS: &str = "origin, X-Requested-With,Content-Type,Accept, Authorization";

/// 预检响应中的 `Access-Control-Allow-Methods`
pub const ALLOWED_METHODS: &str = "GET, PATCH, DELETE, POST";

/// CORS 中间件
///
/// 每个响应都带上 `Access-Control-Allow-Origin: *` 和允许的请求头。
/// `OPTIONS` 请求直接返回 200 和 `{}`，不进入路由。
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        let mut preflight = Json(Empty {}).into_response();
        preflight.headers_mut().insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        preflight
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );

    response
}

/// HTTP 状态码错误日志中间件
///
/// 拦截 HTTP 响应，当状态码为 4xx 或 5xx 时记录日志
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// handler panic 时返回结构化的 500
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");

    ApiError::Internal("internal server error".to_string()).into_response()
}
