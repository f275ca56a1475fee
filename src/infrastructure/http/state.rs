//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreatePostHandler, DeletePostHandler, UpdatePostHandler,
    // Query handlers
    GetPostHandler, ListPostsHandler,
    // Ports
    PostsApiPort,
};

/// 应用状态
///
/// 请求之间没有共享的可变状态，每个 handler 持有同一个上游客户端
pub struct AppState {
    // ========== Command Handlers ==========
    pub update_post_handler: UpdatePostHandler,
    pub delete_post_handler: DeletePostHandler,
    pub create_post_handler: CreatePostHandler,

    // ========== Query Handlers ==========
    pub list_posts_handler: ListPostsHandler,
    pub get_post_handler: GetPostHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(posts_api: Arc<dyn PostsApiPort>) -> Self {
        Self {
            // Command handlers
            update_post_handler: UpdatePostHandler::new(posts_api.clone()),
            delete_post_handler: DeletePostHandler::new(posts_api.clone()),
            create_post_handler: CreatePostHandler::new(posts_api.clone()),

            // Query handlers
            list_posts_handler: ListPostsHandler::new(posts_api.clone()),
            get_post_handler: GetPostHandler::new(posts_api),
        }
    }
}
