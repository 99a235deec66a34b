use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};

mod config;
mod dispatcher;
mod error;
mod mcp;
mod tools;
mod zoom;

use crate::config::{AppConfig, Transport};
use crate::dispatcher::Dispatcher;
use crate::error::ServiceResult;
use crate::mcp::McpState;
use crate::zoom::ZoomClient;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    init_logging();

    info!("Starting Zoom MCP server v{}", env!("CARGO_PKG_VERSION"));

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Fatal error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ServiceResult<()> {
    let config: AppConfig = crate::config::load_config()?;

    info!(transport = %config.server.transport, "Configuration loaded");

    // Resolved once; a missing token fails each tool call rather than startup
    let client = ZoomClient::new(
        &config.zoom.base_url,
        zoom::access_token_from_env(),
        config.zoom.request_timeout(),
    )?;
    info!(base_url = %client.base_url(), "Zoom client ready");
    if !client.has_credential() {
        warn!(
            "{} is not set; tool calls will fail until the server is restarted with it",
            zoom::ACCESS_TOKEN_ENV
        );
    }

    let state = Arc::new(McpState::new(Dispatcher::new(client)));

    match config.server.transport {
        Transport::Stdio => mcp::stdio::serve_stdio(state).await,
        Transport::Http => mcp::http::serve_http(state, &config.server, &config.mcp.path).await,
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("zoom_mcp_server=info"));

    // stdout is reserved for the stdio transport
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
