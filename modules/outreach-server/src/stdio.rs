//! MCP over stdin/stdout. stdout carries protocol traffic only; logs go to
//! stderr.

use anyhow::Result;
use rmcp::ServiceExt;
use tracing::info;

use crate::server::McpServer;

pub async fn serve(server: McpServer) -> Result<()> {
    info!("Serving MCP over stdio");
    let running = server.serve(rmcp::transport::stdio()).await?;
    let reason = running.waiting().await?;
    info!(?reason, "stdio session closed");
    Ok(())
}
