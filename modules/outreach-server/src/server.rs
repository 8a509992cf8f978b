//! MCP server handler, shared by the stdio and streamable HTTP transports.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};

use crate::tools::OutreachTools;

pub const SERVER_NAME: &str = "social-outreach";

const SERVER_INSTRUCTIONS: &str = "Look up the most recent tweet or LinkedIn post of a person \
and get back the content plus instructions for writing a personalized outreach message.";

#[derive(Clone)]
pub struct McpServer {
    tools: Arc<OutreachTools>,
}

impl McpServer {
    pub fn new(tools: OutreachTools) -> Self {
        Self {
            tools: Arc::new(tools),
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools.definitions()))
    }

    /// Tool failures travel as `{"error": ...}` text in a successful result.
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.tools.call(&request.name, request.arguments).await?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
