//! In-memory transport for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::Transport;
use crate::error::{PokedexError, Result};

/// Serves canned bodies and counts every read.
///
/// Unknown locators fail with a network error, like a 404 would.
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    bodies: HashMap<String, Vec<u8>>,
    calls: Arc<AtomicUsize>,
    delay: Duration,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shared counter, readable after the transport moves into a fetcher.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| PokedexError::network(url, "HTTP status client error (404 Not Found)"))
    }
}
