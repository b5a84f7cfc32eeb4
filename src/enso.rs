use crate::config::Config;
use crate::error::EnsoError;
use crate::request::{ApiRequest, Method};
use anyhow::Result;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

#[derive(Clone, Debug)]
pub struct EnsoClient {
    pub base_url: Url,
    default_token: Option<String>,
}

impl EnsoClient {
    pub fn new(base_url: &str, default_token: Option<String>) -> Result<Self> {
        Self::with_base_url(Url::parse(base_url)?, default_token)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(config.base_url.clone(), config.api_token.clone())
    }

    pub fn with_base_url(base_url: Url, default_token: Option<String>) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(anyhow::anyhow!("{} cannot be used as an API base URL", base_url));
        }

        Ok(Self {
            base_url,
            default_token: default_token.filter(|t| !t.trim().is_empty()),
        })
    }

    /// The per-call token wins over the configured one.
    pub fn resolve_token(&self, explicit: Option<&str>) -> Result<String, EnsoError> {
        explicit
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .or_else(|| self.default_token.clone())
            .ok_or_else(|| {
                EnsoError::invalid_arguments("api_token is required (or set ENSO_API_TOKEN)")
            })
    }

    /// Sends `request` exactly once and returns the decoded JSON body.
    pub async fn execute(&self, request: &ApiRequest) -> Result<Value, EnsoError> {
        let url = request.url(&self.base_url)?;
        let endpoint = &request.endpoint;

        // One client per call: nothing is pooled between invocations.
        let http = reqwest::Client::new();
        let mut builder = match endpoint.method {
            Method::Get => http.get(url),
            Method::Post => http.post(url),
        };
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        if !endpoint.query.is_empty() {
            builder = builder.query(&endpoint.query);
        }
        if let Some(body) = &endpoint.body {
            builder = builder.json(body);
        }

        debug!(
            method = endpoint.method.as_str(),
            path = %endpoint.path(),
            params = endpoint.query.len(),
            "Sending Enso API request"
        );

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(status = status.as_u16(), "Could not read error body: {}", e);
                    String::new()
                }
            };
            warn!(
                status = status.as_u16(),
                path = %endpoint.path(),
                "Enso API request failed"
            );
            return Err(EnsoError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}
