//! HTTP transport for MCP, served by axum.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response, Sse, sse::Event},
    routing::get,
};
use futures::stream::{self, Stream};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{McpRequest, McpResponse, McpState, PROTOCOL_VERSION, SERVER_NAME, handle_message};
use crate::config::ServerConfig;
use crate::error::{ServiceError, ServiceResult};

/// Build the MCP router
pub fn mcp_router(state: Arc<McpState>) -> Router {
    Router::new()
        .route("/", get(mcp_sse_handler).post(mcp_message_handler))
        .with_state(state)
}

/// Bind and serve until the listener fails
pub async fn serve_http(
    state: Arc<McpState>,
    server: &ServerConfig,
    mcp_path: &str,
) -> ServiceResult<()> {
    let app = mount(mcp_router(state), mcp_path)?.layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", server.host, server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(path = %mcp_path, "Zoom MCP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Nest the MCP routes under `path`; axum rejects nesting at the root
fn mount(router: Router, path: &str) -> ServiceResult<Router> {
    if !path.starts_with('/') {
        return Err(ServiceError::Config {
            message: format!("mcp.path must start with '/', got {:?}", path),
        });
    }

    let path = path.trim_end_matches('/');
    if path.is_empty() {
        Ok(router)
    } else {
        Ok(Router::new().nest(path, router))
    }
}

/// SSE handler announcing the server, kept alive with pings
async fn mcp_sse_handler(
    State(_state): State<Arc<McpState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("MCP client connected");

    let server_info = serde_json::json!({
        "type": "serverInfo",
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    });

    let stream = stream::once(async move {
        Ok::<_, Infallible>(Event::default().data(server_info.to_string()))
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("ping"),
    )
}

/// MCP message handler - handles JSON-RPC style requests
async fn mcp_message_handler(
    State(state): State<Arc<McpState>>,
    body: Bytes,
) -> Response {
    let request = match serde_json::from_slice::<McpRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Failed to parse MCP message");
            return (StatusCode::BAD_REQUEST, Json(McpResponse::parse_error(&e))).into_response();
        }
    };

    match handle_message(&state, request).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}
