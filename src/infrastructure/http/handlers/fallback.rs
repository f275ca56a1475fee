//! Fallback Handler
//!
//! 未匹配的路由统一返回 404 `{"message": "not found"}`

use crate::infrastructure::http::error::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound("not found".to_string())
}
