//! MCP server: JSON-RPC 2.0 message handling shared by the stdio and HTTP
//! transports.

mod handlers;
pub mod http;
pub mod stdio;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::dispatcher::Dispatcher;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "zoom-mcp-server";

/// MCP server state
pub struct McpState {
    pub dispatcher: Arc<Dispatcher>,
}

impl McpState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}

/// Route one incoming message.
///
/// Notifications (no `id`) are acknowledged silently and produce no response.
pub async fn handle_message(state: &McpState, request: McpRequest) -> Option<McpResponse> {
    let Some(id) = request.id else {
        debug!(method = %request.method, "MCP notification received");
        return None;
    };

    debug!(method = %request.method, "MCP request received");

    let result = match request.method.as_str() {
        "initialize" => handlers::handle_initialize(state).await,
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => handlers::handle_tools_list(state).await,
        "tools/call" => handlers::handle_tool_call(state, request.params).await,
        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
        }),
    };

    Some(McpResponse::new(id, result))
}

// MCP Protocol Types

#[derive(Debug, Serialize, Deserialize)]
pub struct McpRequest {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    jsonrpc: String,
    id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

impl McpResponse {
    fn new(id: serde_json::Value, result: Result<serde_json::Value, McpError>) -> Self {
        let (result, error) = match result {
            Ok(data) => (Some(data), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result,
            error,
        }
    }

    /// Response to a message that could not be parsed
    pub fn parse_error(error: &serde_json::Error) -> Self {
        Self::new(
            serde_json::Value::Null,
            Err(McpError {
                code: -32700,
                message: format!("Parse error: {}", error),
            }),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct McpError {
    code: i32,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoom::ZoomClient;
    use serde_json::{Value, json};

    pub(super) fn test_state() -> McpState {
        let client = ZoomClient::new("http://127.0.0.1:9", None, None).unwrap();
        McpState::new(Dispatcher::new(client))
    }

    async fn roundtrip(state: &McpState, message: Value) -> Option<Value> {
        let request: McpRequest = serde_json::from_value(message).unwrap();
        handle_message(state, request)
            .await
            .map(|response| serde_json::to_value(response).unwrap())
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let state = test_state();
        let response = roundtrip(
            &state,
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}),
        )
        .await
        .unwrap();

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
        assert_eq!(
            response["result"]["capabilities"]["tools"]["listChanged"],
            false
        );
        assert!(response.get("error").is_none());
    }

    #[tokio::test]
    async fn test_tools_list_returns_catalogue() {
        let state = test_state();
        let response = roundtrip(
            &state,
            json!({"jsonrpc": "2.0", "id": "a", "method": "tools/list"}),
        )
        .await
        .unwrap();

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 9);
        assert_eq!(tools[0]["name"], "list_meetings");
        assert_eq!(tools[8]["name"], "get_meeting_recordings");
        assert!(tools.iter().all(|t| t["inputSchema"]["type"] == "object"));
    }

    #[tokio::test]
    async fn test_unknown_tool_is_result_not_protocol_error() {
        let state = test_state();
        let response = roundtrip(
            &state,
            json!({
                "jsonrpc": "2.0",
                "id": 2,
                "method": "tools/call",
                "params": {"name": "nope", "arguments": {}}
            }),
        )
        .await
        .unwrap();

        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(
            response["result"]["content"][0]["text"],
            "Error: Unknown tool: nope"
        );
    }

    #[tokio::test]
    async fn test_tool_call_without_name_is_invalid_params() {
        let state = test_state();
        let response = roundtrip(
            &state,
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": {}}),
        )
        .await
        .unwrap();
        assert_eq!(response["error"]["code"], -32602);

        let response = roundtrip(
            &state,
            json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call"}),
        )
        .await
        .unwrap();
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let state = test_state();
        let response = roundtrip(
            &state,
            json!({"jsonrpc": "2.0", "id": 5, "method": "resources/list"}),
        )
        .await
        .unwrap();
        assert_eq!(response["error"]["code"], -32601);
        assert_eq!(
            response["error"]["message"],
            "Method not found: resources/list"
        );
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let state = test_state();
        let response = roundtrip(
            &state,
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        )
        .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let state = test_state();
        let response = roundtrip(&state, json!({"jsonrpc": "2.0", "id": 6, "method": "ping"}))
            .await
            .unwrap();
        assert_eq!(response["result"], json!({}));
    }
}
