//! Server configuration.
//!
//! Loaded once at startup from an optional `config` file and `ZOOM_MCP__*`
//! environment variables. The Zoom access token is not part of this; it is
//! read from `ZOOM_ACCESS_TOKEN` directly.

mod loader;
mod static_config;

pub use loader::load_config;
pub use static_config::{AppConfig, ServerConfig, Transport};
