//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::MessageResponse;
use crate::application::ApplicationError;

/// API 错误
///
/// 所有错误都以 `{"message": ...}` 信封返回
#[derive(Debug)]
pub enum ApiError {
    /// 路由未命中
    NotFound(String),
    /// 上游调用失败（网络错误、超时、非 2xx 状态）
    Upstream(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::debug!(error = %msg, "Route not found");
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Upstream(err) => ApiError::Upstream(err.to_string()),
        }
    }
}
