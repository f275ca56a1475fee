//! HTTP Layer - Front Door
//!
//! 请求日志、请求体解析、CORS、路由分发与统一 404

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::AppState;
