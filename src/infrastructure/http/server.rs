//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Request};
use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{info, Level};

use super::middleware::{cors_middleware, error_logging_middleware, panic_response};
use super::routes::create_routes;
use super::state::AppState;

/// 默认请求体上限：100KB
pub const DEFAULT_MAX_BODY_BYTES: usize = 100 * 1024;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 6060,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 构建完整的服务
///
/// 中间件顺序（由外到内）：去掉结尾斜杠 → 请求日志 → CORS/预检 → 状态码日志 → panic 兜底 → 请求体上限 → 路由。
/// 去斜杠在路由之前执行，`/3/` 与 `/3` 命中同一个路由。
pub fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> NormalizePath<Router> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let router = create_routes()
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(middleware::from_fn(cors_middleware))
        .layer(trace)
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state.clone(), self.config.max_body_bytes);
        let addr = self.config.addr();

        let listener = TcpListener::bind(&addr).await?;
        info!(addr = %addr, "The server is running on port {}", self.config.port);

        axum::serve(
            listener,
            axum::ServiceExt::<Request>::into_make_service(router),
        )
        .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}
