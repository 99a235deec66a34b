//! Structured description of one Zoom API call.

use serde_json::Value;
use strum::Display;

/// HTTP methods used by the Zoom tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A single request against the Zoom API, relative to the base URL.
///
/// Path segments are kept unencoded and only escaped when the path is
/// rendered, so an ID containing `/` or spaces cannot change the route.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomRequest {
    pub method: HttpMethod,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl ZoomRequest {
    pub fn new<S: AsRef<str>>(method: HttpMethod, segments: &[S]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.as_ref().to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(HttpMethod::Get, segments)
    }

    pub fn post<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(HttpMethod::Post, segments)
    }

    pub fn patch<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(HttpMethod::Patch, segments)
    }

    pub fn delete<S: AsRef<str>>(segments: &[S]) -> Self {
        Self::new(HttpMethod::Delete, segments)
    }

    /// Append a query parameter
    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    /// Attach a JSON body
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Percent-encoded path, e.g. `/meetings/123/recordings`
    pub fn path(&self) -> String {
        self.segments
            .iter()
            .map(|segment| format!("/{}", urlencoding::encode(segment)))
            .collect()
    }

    /// Path plus encoded query string, used for logging and display
    pub fn path_and_query(&self) -> String {
        let mut rendered = self.path();
        if !self.query.is_empty() {
            let query = self
                .query
                .iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&");
            rendered.push('?');
            rendered.push_str(&query);
        }
        rendered
    }
}
