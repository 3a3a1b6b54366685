//! Cache-first fetcher.

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::SharedCache;
use crate::error::{PokedexError, Result};
use crate::fetch::{HttpTransport, Transport};

/// Resolves resource locators to bytes, cache first.
///
/// Misses on the same locator are collapsed: the first caller performs the
/// network read while later callers wait on a per-locator gate and then
/// find the body in the cache.
pub struct CachedFetcher<T = HttpTransport> {
    cache: SharedCache,
    transport: T,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<T: Transport> CachedFetcher<T> {
    pub fn new(cache: SharedCache, transport: T) -> Self {
        Self {
            cache,
            transport,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// The cache this fetcher reads through.
    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when present.
    ///
    /// A miss performs one network read and stores the body before returning
    /// it. Failed reads leave the cache untouched.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if url.is_empty() {
            return Err(PokedexError::EmptyResource);
        }

        if let Some(body) = self.cache.lock().await.get(url) {
            debug!("Cache hit: {}", url);
            return Ok(body);
        }

        let gate = self.gate(url).await;
        let result = {
            let _turn = gate.lock().await;
            self.fetch_through(url).await
        };
        self.release_gate(url, gate).await;

        result
    }

    // == Fetch JSON ==
    /// Fetches `url` and decodes the body as `D`.
    ///
    /// The body stays cached even if it fails to decode.
    pub async fn fetch_json<D: DeserializeOwned>(&self, url: &str) -> Result<D> {
        let body = self.fetch(url).await?;
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Miss path, run while holding the locator's gate.
    async fn fetch_through(&self, url: &str) -> Result<Vec<u8>> {
        // filled by the caller that held the gate before us
        if let Some(body) = self.cache.lock().await.peek(url) {
            debug!("Cache filled while waiting: {}", url);
            return Ok(body);
        }

        debug!("Cache miss: {}", url);
        let body = self.transport.get(url).await?;
        self.cache.lock().await.add(url, body.clone());
        Ok(body)
    }

    async fn gate(&self, url: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.in_flight.lock().await;
        Arc::clone(in_flight.entry(url.to_string()).or_default())
    }

    async fn release_gate(&self, url: &str, gate: Arc<Mutex<()>>) {
        let mut in_flight = self.in_flight.lock().await;
        // map + ours: nobody else is waiting on this locator
        let idle = Arc::strong_count(&gate) == 2;
        drop(gate);
        if idle {
            in_flight.remove(url);
        }
    }
}
