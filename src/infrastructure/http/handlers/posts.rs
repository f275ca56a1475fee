//! Posts HTTP Handlers
//!
//! 每个 handler 对应一次上游调用，结果包进 `{"message": ...}` 后以 200 返回

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::{CreatePost, DeletePost, GetPost, ListPosts, UpdatePost};
use crate::domain::{NewPost, PostChanges, PostId};
use crate::infrastructure::http::dto::MessageResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ParsedBody;
use crate::infrastructure::http::state::AppState;

/// 删除成功后的固定消息
pub const POST_DELETED_MESSAGE: &str = "post deleted successfully";

/// 列出所有 Post
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse<Value>>, ApiError> {
    let posts = state.list_posts_handler.handle(ListPosts).await?;
    Ok(Json(MessageResponse::new(posts)))
}

/// 获取单个 Post
pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse<Value>>, ApiError> {
    let query = GetPost {
        id: PostId::from(id),
    };
    let post = state.get_post_handler.handle(query).await?;
    Ok(Json(MessageResponse::new(post)))
}

/// 更新 Post（PATCH 与 PUT 共用）
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ParsedBody(fields): ParsedBody,
) -> Result<Json<MessageResponse<Value>>, ApiError> {
    let command = UpdatePost {
        id: PostId::from(id),
        changes: PostChanges::from_fields(&fields),
    };
    let updated = state.update_post_handler.handle(command).await?;
    Ok(Json(MessageResponse::new(updated)))
}

/// 删除 Post
pub async fn delete_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse<&'static str>>, ApiError> {
    let command = DeletePost {
        id: PostId::from(id),
    };
    state.delete_post_handler.handle(command).await?;
    Ok(Json(MessageResponse::new(POST_DELETED_MESSAGE)))
}

/// 创建 Post
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ParsedBody(fields): ParsedBody,
) -> Result<Json<MessageResponse<Value>>, ApiError> {
    let command = CreatePost {
        post: NewPost::from_fields(&fields),
    };
    let created = state.create_post_handler.handle(command).await?;
    Ok(Json(MessageResponse::new(created)))
}
