//! Zoom REST API integration.
//!
//! Requests are described as data ([`ZoomRequest`]) by the tool registry and
//! executed by a single [`ZoomClient`] that owns the bearer token.

mod client;
mod request;

pub use client::ZoomClient;
pub use request::ZoomRequest;
#[cfg(test)]
pub use request::HttpMethod;

/// Default base URL for the Zoom REST API
pub const DEFAULT_BASE_URL: &str = "https://api.zoom.us/v2";

/// Environment variable holding the bearer token
pub const ACCESS_TOKEN_ENV: &str = "ZOOM_ACCESS_TOKEN";

/// Read the access token from the environment.
///
/// An unset or blank variable yields `None`; the server still starts and
/// reports the missing credential on each tool call.
pub fn access_token_from_env() -> Option<String> {
    std::env::var(ACCESS_TOKEN_ENV)
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
