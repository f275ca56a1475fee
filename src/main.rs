//! Posts Relay - posts 资源中继服务
//!
//! 启动流程：加载配置 → 初始化日志 → 创建上游客户端 → 启动 HTTP 服务器

use std::sync::Arc;

use posts_relay::application::PostsApiPort;
use posts_relay::config::{load_config, print_config, LogConfig, UpstreamMode};
use posts_relay::infrastructure::adapters::{FakePostsClient, HttpPostsClient, HttpPostsClientConfig};
use posts_relay::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tracing_subscriber::EnvFilter;

/// 初始化日志（`RUST_LOG` 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},posts_relay={},tower_http={}",
        log.level, log.level, log.level
    );
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：PORT > 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Posts Relay - posts 资源中继服务");
    print_config(&config);

    // 创建上游客户端
    let posts_api: Arc<dyn PostsApiPort> = match config.upstream.mode {
        UpstreamMode::Http => {
            let client_config = HttpPostsClientConfig::new(config.upstream.base_url.clone())
                .with_timeout(config.upstream.timeout_secs);
            Arc::new(HttpPostsClient::new(client_config)?)
        }
        UpstreamMode::Fake => Arc::new(FakePostsClient::with_sample_posts()),
    };

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(config.server.max_body_bytes);
    let server = HttpServer::new(server_config, AppState::new(posts_api));

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
