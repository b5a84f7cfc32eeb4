//! Request descriptors for the Enso API.
//!
//! An [`Endpoint`] is what a binding builds from its arguments; an
//! [`ApiRequest`] pairs it with the caller's bearer token. Both are plain
//! values, so the same arguments always produce equal descriptors.

use crate::error::EnsoError;
use serde::Serialize;
use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Endpoint {
    pub fn get(segments: &[&str]) -> Self {
        Self::new(Method::Get, segments)
    }

    pub fn post(segments: &[&str]) -> Self {
        Self::new(Method::Post, segments)
    }

    fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Flattens `params` into query pairs. Fields serialized as `null` are dropped.
    pub fn with_query<T: Serialize>(mut self, params: &T) -> Result<Self, EnsoError> {
        let value = serde_json::to_value(params).map_err(EnsoError::invalid_arguments)?;
        let Value::Object(map) = value else {
            return Err(EnsoError::invalid_arguments(
                "query parameters must serialize to an object",
            ));
        };
        self.query = map
            .into_iter()
            .filter_map(|(key, value)| query_value(value).map(|v| (key, v)))
            .collect();
        Ok(self)
    }

    pub fn with_body<T: Serialize>(mut self, body: &T) -> Result<Self, EnsoError> {
        self.body = Some(serde_json::to_value(body).map_err(EnsoError::invalid_arguments)?);
        Ok(self)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other @ Value::Object(_) => Some(other.to_string()),
    }
}

#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    token: String,
    pub endpoint: Endpoint,
}

impl ApiRequest {
    pub fn new(token: impl Into<String>, endpoint: Endpoint) -> Result<Self, EnsoError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(EnsoError::invalid_arguments("api_token must not be empty"));
        }
        Ok(Self { token, endpoint })
    }

    pub fn headers(&self) -> [(&'static str, String); 2] {
        [
            ("Authorization", format!("Bearer {}", self.token)),
            ("accept", "application/json".to_string()),
        ]
    }

    pub fn url(&self, base: &Url) -> Result<Url, EnsoError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| EnsoError::InvalidUrl(format!("{base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(&self.endpoint.segments);
        Ok(url)
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiRequest")
            .field("token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
