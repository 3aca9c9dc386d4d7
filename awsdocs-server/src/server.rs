//! MCP bridge over the tool facade.

use awsdocs_core::{ToolCallResponse, ToolDescriptor, ToolFacade};
use awsdocs_tools::provider::{ConfigError, DocumentationProvider, ProviderConfig};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler, ServiceExt};
use serde_json::Value;
use std::sync::Arc;

/// Name reported in the MCP `initialize` response.
pub const SERVER_NAME: &str = "aws-docs-mcp";

const INSTRUCTIONS: &str = "Search AWS documentation, read service docs, list AWS services \
and look up pricing. Results are JSON text; when AWS cannot be reached, representative \
sample data is returned instead.";

/// MCP server handler backed by a [`ToolFacade`].
#[derive(Clone)]
pub struct AwsDocsServer {
    facade: Arc<ToolFacade>,
}

impl AwsDocsServer {
    /// Build a server with the default HTTP provider.
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let provider = DocumentationProvider::new(config)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    pub fn with_provider(provider: Arc<DocumentationProvider>) -> Self {
        Self::with_facade(awsdocs_tools::facade(provider))
    }

    pub fn with_facade(facade: ToolFacade) -> Self {
        Self {
            facade: Arc::new(facade),
        }
    }

    pub fn facade(&self) -> &ToolFacade {
        &self.facade
    }

    /// Serve on stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let running = self.serve(rmcp::transport::stdio()).await?;
        let reason = running.waiting().await?;
        log::info!("MCP session ended: {:?}", reason);
        Ok(())
    }
}

/// Convert a facade descriptor into an MCP tool.
pub fn to_mcp_tool(descriptor: &ToolDescriptor) -> Tool {
    let schema: JsonObject = match &descriptor.input_schema {
        Value::Object(map) => map.clone(),
        _ => JsonObject::new(),
    };
    Tool::new(
        descriptor.name.clone(),
        descriptor.description.clone(),
        Arc::new(schema),
    )
}

/// Convert a facade response into a successful MCP result.
pub fn to_call_tool_result(response: ToolCallResponse) -> CallToolResult {
    let content = response
        .content
        .iter()
        .map(|entry| Content::text(entry.as_text()))
        .collect();
    CallToolResult::success(content)
}

impl ServerHandler for AwsDocsServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_string();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.facade.list_tools().iter().map(to_mcp_tool).collect();
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        log::debug!("call_tool '{}'", request.name);
        let args = request.arguments.map(Value::Object).unwrap_or(Value::Null);
        let response = self.facade.call_tool(&request.name, args).await;
        Ok(to_call_tool_result(response))
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
