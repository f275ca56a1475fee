//! HTTP Routes
//!
//! API Endpoints:
//! - /       GET          列出所有 Post
//! - /       POST         创建 Post
//! - /:id    GET          获取单个 Post
//! - /:id    PATCH / PUT  更新 Post
//! - /:id    DELETE       删除 Post
//! - 其他    *            404 `{"message": "not found"}`
//!
//! `OPTIONS` 由 CORS 中间件处理，不进入路由

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(post_routes())
        .fallback(handlers::not_found)
}

/// Post 路由
fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            with_not_found(get(handlers::list_posts).post(handlers::create_post)),
        )
        .route(
            "/:id",
            with_not_found(
                get(handlers::get_post)
                    .patch(handlers::update_post)
                    .put(handlers::update_post)
                    .delete(handlers::delete_post),
            ),
        )
}

/// 路径命中但方法不匹配时同样返回 404，而不是 405
fn with_not_found(router: MethodRouter<Arc<AppState>>) -> MethodRouter<Arc<AppState>> {
    router.fallback(handlers::not_found)
}
