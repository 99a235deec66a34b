//! Zoom API client implementation.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::request::ZoomRequest;
use crate::error::ZoomError;

/// Zoom API client.
///
/// Owns the bearer token for the life of the process. The token is never
/// refreshed; an expired token surfaces as a 401 from the API.
#[derive(Clone)]
pub struct ZoomClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ZoomClient {
    /// Create a new Zoom client
    ///
    /// `timeout` is only applied when set; otherwise reqwest's default is used.
    pub fn new(
        base_url: &str,
        access_token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder =
            Client::builder().user_agent(concat!("zoom-mcp-server/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_credential(&self) -> bool {
        self.access_token.is_some()
    }

    /// Execute one request and return the decoded response body.
    ///
    /// Empty bodies (204 from PATCH/DELETE) decode to `null`; bodies that
    /// are not JSON are returned as a JSON string.
    pub async fn execute(&self, request: &ZoomRequest) -> Result<Value, ZoomError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or(ZoomError::MissingCredential)?;

        let url = format!("{}{}", self.base_url, request.path());
        debug!(
            method = %request.method,
            path = %request.path_and_query(),
            "Sending Zoom API request"
        );

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json");

        if !request.query_pairs().is_empty() {
            builder = builder.query(request.query_pairs());
        }
        if let Some(body) = request.json_body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(status = status.as_u16(), bytes = text.len(), "Zoom API response");

        if !status.is_success() {
            return Err(ZoomError::RemoteApi {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        Ok(decode_body(&text))
    }
}

/// Pick the API's own `message` field, falling back to the raw body
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Err(_) => body.to_string(),
    }
}

fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ZoomClient {
        ZoomClient::new(&server.uri(), Some("test-token".to_string()), None).unwrap()
    }

    #[tokio::test]
    async fn test_sends_bearer_token_and_json_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "me"})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .execute(&ZoomRequest::get(&["users", "me"]))
            .await
            .unwrap();
        assert_eq!(result, json!({"id": "me"}));
    }

    #[tokio::test]
    async fn test_query_and_body_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .and(query_param("status", "pending"))
            .and(query_param("page_size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/users/me/meetings"))
            .and(body_json(json!({"topic": "Standup", "type": 2})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = ZoomRequest::get(&["users"])
            .query("status", "pending")
            .query("page_size", "10");
        assert_eq!(client.execute(&request).await.unwrap(), json!({"users": []}));

        let request = ZoomRequest::post(&["users", "me", "meetings"])
            .body(json!({"topic": "Standup", "type": 2}));
        assert_eq!(client.execute(&request).await.unwrap(), json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_error_uses_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/meetings/42"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": 3001,
                "message": "Not found"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute(&ZoomRequest::get(&["meetings", "42"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ZoomError::RemoteApi { status: 404, .. }));
        assert_eq!(err.to_string(), "Zoom API Error: 404 - Not found");
    }

    #[tokio::test]
    async fn test_error_without_message_uses_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"code": 124})))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/other"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .execute(&ZoomRequest::get(&["users", "me"]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), r#"Zoom API Error: 500 - {"code":124}"#);

        let err = client
            .execute(&ZoomRequest::get(&["users", "other"]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Zoom API Error: 502 - Bad Gateway");
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/meetings/42"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .execute(&ZoomRequest::delete(&["meetings", "42"]))
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_missing_token_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = ZoomClient::new(&server.uri(), None, None).unwrap();
        assert!(!client.has_credential());
        let err = client
            .execute(&ZoomRequest::get(&["users", "me"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ZoomError::MissingCredential));
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced() {
        // Nothing listens on port 9 of the loopback interface
        let client =
            ZoomClient::new("http://127.0.0.1:9", Some("test-token".to_string()), None).unwrap();
        let err = client
            .execute(&ZoomRequest::get(&["users", "me"]))
            .await
            .unwrap_err();
        assert!(matches!(err, ZoomError::Transport(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ZoomClient::new("https://api.zoom.us/v2/", None, None).unwrap();
        assert_eq!(client.base_url(), "https://api.zoom.us/v2");
    }
}
