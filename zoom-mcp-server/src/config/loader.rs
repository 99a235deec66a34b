//! Configuration loading from files and environment variables.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};

use super::static_config::AppConfig;
use crate::error::{ServiceError, ServiceResult};

/// Load configuration from an optional `config.*` file and `ZOOM_MCP__*` env vars
pub fn load_config() -> ServiceResult<AppConfig> {
    from_builder(
        Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("ZOOM_MCP")
                    .separator("__")
                    .try_parsing(true),
            ),
    )
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> ServiceResult<AppConfig> {
    builder
        .build()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to deserialize config: {}", e),
        })
}
