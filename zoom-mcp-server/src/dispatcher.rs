//! Tool dispatch: name + arguments in, result envelope out.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::ZoomError;
use crate::tools::{Arguments, McpToolDefinition, REGISTRY, ToolRegistry};
use crate::zoom::ZoomClient;

/// One content item of a tool result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Uniform envelope returned for every tool call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    pub fn error(error: &ZoomError) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: format!("Error: {}", error),
            }],
            is_error: true,
        }
    }

    /// Text of the single content item
    #[cfg(test)]
    pub fn text_content(&self) -> &str {
        match self.content.first() {
            Some(ToolContent::Text { text }) => text,
            None => "",
        }
    }
}

/// Maps tool invocations onto Zoom API calls
pub struct Dispatcher {
    client: ZoomClient,
    registry: &'static ToolRegistry,
}

impl Dispatcher {
    pub fn new(client: ZoomClient) -> Self {
        let registry: &'static ToolRegistry = &REGISTRY;
        debug!(tools = registry.len(), "Tool registry loaded");
        Self { client, registry }
    }

    /// The tool catalogue, in advertised order
    pub fn list(&self) -> Vec<McpToolDefinition> {
        self.registry.mcp_definitions()
    }

    /// Execute a tool call. Never fails: errors come back as an `is_error` envelope.
    pub async fn call(&self, name: &str, arguments: &Value) -> ToolResult {
        match self.try_call(name, arguments).await {
            Ok(text) => {
                info!(tool = %name, "Tool call succeeded");
                ToolResult::text(text)
            }
            Err(e) => {
                warn!(tool = %name, kind = e.kind(), error = %e, "Tool call failed");
                ToolResult::error(&e)
            }
        }
    }

    async fn try_call(&self, name: &str, arguments: &Value) -> Result<String, ZoomError> {
        let tool = self
            .registry
            .get_by_str(name)
            .ok_or_else(|| ZoomError::UnknownTool {
                name: name.to_string(),
            })?;

        let empty = Map::new();
        let arguments = Arguments::new(arguments.as_object().unwrap_or(&empty));

        let request = (tool.build_request)(&arguments)?;
        debug!(
            tool = %tool.name,
            category = tool.category,
            method = %request.method,
            path = %request.path_and_query(),
            "Dispatching tool call"
        );

        let body = self.client.execute(&request).await?;
        tool.response.render(&arguments, &body)
    }
}
