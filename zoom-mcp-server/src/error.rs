use thiserror::Error;

use crate::zoom::ACCESS_TOKEN_ENV;

/// Errors raised while executing a single tool call.
///
/// None of these are fatal: the dispatcher turns every variant into an
/// error envelope for the caller.
#[derive(Error, Debug)]
pub enum ZoomError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("{env} environment variable is required", env = ACCESS_TOKEN_ENV)]
    MissingCredential,

    #[error("Zoom API Error: {status} - {message}")]
    RemoteApi { status: u16, message: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    InvalidArgument { message: String },
}

impl ZoomError {
    pub fn missing_argument(key: &str) -> Self {
        ZoomError::InvalidArgument {
            message: format!("Missing required argument: {}", key),
        }
    }

    /// Short machine-readable label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ZoomError::UnknownTool { .. } => "unknown_tool",
            ZoomError::MissingCredential => "missing_credential",
            ZoomError::RemoteApi { .. } => "remote_api",
            ZoomError::Transport(_) => "transport",
            ZoomError::InvalidArgument { .. } => "invalid_argument",
        }
    }
}

/// Startup and transport errors. These terminate the process.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to create HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

/// Result type alias for startup operations
pub type ServiceResult<T> = Result<T, ServiceError>;
