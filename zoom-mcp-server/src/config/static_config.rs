//! Configuration sections and their defaults.

use serde::Deserialize;
use std::time::Duration;
use strum::Display;

use crate::zoom::DEFAULT_BASE_URL;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default = "default_zoom")]
    pub zoom: ZoomConfig,

    #[serde(default = "default_mcp")]
    pub mcp: McpConfig,
}

/// Which transport carries MCP traffic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST, served by axum
    Http,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub transport: Transport,

    /// Bind host, only used by the HTTP transport
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port, only used by the HTTP transport
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Zoom API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ZoomConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout. Unset means the HTTP client's default (no override).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ZoomConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// MCP endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct McpConfig {
    /// Path the HTTP transport mounts the MCP endpoint at
    #[serde(default = "default_mcp_path")]
    pub path: String,
}

// ==================== Default Value Functions ====================

pub(crate) fn default_server() -> ServerConfig {
    ServerConfig {
        transport: Transport::default(),
        host: default_host(),
        port: default_port(),
    }
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_zoom() -> ZoomConfig {
    ZoomConfig {
        base_url: default_base_url(),
        request_timeout_secs: None,
    }
}

pub(crate) fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_mcp() -> McpConfig {
    McpConfig {
        path: default_mcp_path(),
    }
}

pub(crate) fn default_mcp_path() -> String {
    "/mcp".to_string()
}
