//! MCP over the streamable HTTP transport, plus a plain health check.

use std::future::Future;

use anyhow::Result;
use axum::{routing::get, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::server::McpServer;

pub fn router(server: McpServer, path: &str) -> Router {
    let mcp = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = Router::new().route("/health", get(health));
    let router = if path == "/" {
        router.fallback_service(mcp)
    } else {
        router.nest_service(path, mcp)
    };

    router.layer(TraceLayer::new_for_http().make_span_with(
        |request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        },
    ))
}

pub async fn serve(server: McpServer, host: &str, port: u16, path: &str) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("MCP HTTP endpoint listening on http://{addr}{path}");

    axum::serve(listener, router(server, path))
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await?;
    Ok(())
}

/// Resolves when `signal` fires. If the handler could not be installed the
/// server keeps running until the process is killed.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to install shutdown signal handler");
            std::future::pending::<()>().await;
        }
    }
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn shutdown_follows_the_signal() {
        let done = tokio::time::timeout(Duration::from_secs(1), shutdown_on(async { Ok(()) })).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn failed_signal_handler_keeps_serving() {
        let broken = async { Err(std::io::Error::other("no signal driver")) };
        let done = tokio::time::timeout(Duration::from_millis(100), shutdown_on(broken)).await;
        assert!(done.is_err(), "server would have shut down right after starting");
    }
}
