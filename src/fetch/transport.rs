//! Network transport used on cache misses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{PokedexError, Result};

/// A byte-producing read of one resource locator.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Reads the full body at `url`.
    ///
    /// Transport failures and non-success statuses are reported as
    /// [`PokedexError::Network`].
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// reqwest-backed transport with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| PokedexError::network(url, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| PokedexError::network(url, e))?;

        Ok(body.to_vec())
    }
}
