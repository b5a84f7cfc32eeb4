use anyhow::Context;
use std::env;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.enso.finance/api/v1";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: Url,
    pub api_token: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var("ENSO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let api_token = env::var("ENSO_API_TOKEN").ok();
        Self::new(&base_url, api_token)
    }

    pub fn new(base_url: &str, api_token: Option<String>) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("ENSO_BASE_URL is not a valid URL: {base_url}"))?;
        let api_token = api_token.filter(|t| !t.trim().is_empty());

        Ok(Self {
            base_url,
            api_token,
        })
    }
}
