//! MCP message handlers.
//!
//! Handlers for initialize, tools/list and tools/call requests.

use super::{McpError, McpState, PROTOCOL_VERSION, SERVER_NAME};

/// Handle initialize request
pub async fn handle_initialize(_state: &McpState) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": "Zoom MCP server for listing, creating, updating and deleting meetings, and looking up users, participants and cloud recordings."
    }))
}

/// Handle tools/list request
pub async fn handle_tools_list(state: &McpState) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({ "tools": state.dispatcher.list() }))
}

/// Handle tools/call request
///
/// Tool failures are reported inside the result envelope; only a malformed
/// request is a protocol error.
pub async fn handle_tool_call(
    state: &McpState,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, McpError> {
    let params = params.ok_or_else(|| McpError {
        code: -32602,
        message: "Missing params".to_string(),
    })?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError {
            code: -32602,
            message: "Missing tool name".to_string(),
        })?;

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    let result = state.dispatcher.call(name, &arguments).await;

    serde_json::to_value(result).map_err(|e| McpError {
        code: -32603,
        message: format!("Failed to serialize tool result: {}", e),
    })
}
