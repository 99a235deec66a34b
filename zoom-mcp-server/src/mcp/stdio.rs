//! Stdio transport: one JSON-RPC message per line.
//!
//! stdout carries protocol traffic only; logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use super::{McpRequest, McpResponse, McpState, handle_message};
use crate::error::ServiceResult;

/// Serve MCP over the process's stdin/stdout until stdin closes
pub async fn serve_stdio(state: Arc<McpState>) -> ServiceResult<()> {
    info!("Zoom MCP server running on stdio");
    serve(
        &state,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    info!("stdin closed, shutting down");
    Ok(())
}

/// Read messages from `reader` and write responses to `writer`, in order
pub async fn serve<R, W>(state: &McpState, mut reader: R, mut writer: W) -> ServiceResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        // Invalid UTF-8 surfaces as a parse error for this line only
        let line = buf.trim_ascii();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_slice::<McpRequest>(line) {
            Ok(request) => handle_message(state, request).await,
            Err(e) => {
                warn!(error = %e, "Failed to parse MCP message");
                Some(McpResponse::parse_error(&e))
            }
        };

        if let Some(response) = response {
            let mut payload = serde_json::to_vec(&response)?;
            payload.push(b'\n');
            writer.write_all(&payload).await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
