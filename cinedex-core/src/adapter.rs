use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Transport boundary between repositories and a provider's HTTP API.
///
/// Repositories only ever ask for a path plus query parameters and get a
/// parsed JSON payload back; auth, rate limiting and retries all live on the
/// other side of this seam.
#[async_trait]
pub trait Adapter: Send + Sync + fmt::Debug {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value>;
}

/// Reqwest-backed adapter rooted at a provider base URL.
#[derive(Debug, Clone)]
pub struct HttpAdapter {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpAdapter {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Adapter for HttpAdapter {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| Error::Api(format!("invalid request path {path}: {err}")))?;

        tracing::debug!(%url, "issuing provider request");
        let response = self.client.get(url).query(params).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(Error::InvalidApiKey),
            StatusCode::TOO_MANY_REQUESTS => Err(Error::RateLimited),
            status if !status.is_success() => {
                Err(Error::Api(format!("provider returned status {status}")))
            }
            _ => Ok(response.json().await?),
        }
    }
}
