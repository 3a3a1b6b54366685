//! Application context
//!
//! Owns everything a REPL session shares: the response cache and its sweep
//! task, the fetcher, the user's Pokedex and the `map` cursors.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{self, CacheStats};
use crate::catch::{self, Throw};
use crate::config::Config;
use crate::error::Result;
use crate::fetch::{CachedFetcher, HttpTransport, Transport};
use crate::locations::{self, PageView, PaginationState};
use crate::models::Pokemon;
use crate::registry::Pokedex;
use crate::tasks::spawn_sweep_task;

pub struct App<T = HttpTransport> {
    config: Config,
    fetcher: CachedFetcher<T>,
    pokedex: Pokedex,
    pagination: PaginationState,
    rng: StdRng,
    shutdown: CancellationToken,
    sweep: Option<JoinHandle<()>>,
}

impl App<HttpTransport> {
    /// Creates an App that reads the live catalog over HTTP.
    pub fn from_config(config: Config) -> reqwest::Result<Self> {
        let transport = HttpTransport::new(std::time::Duration::from_secs(config.http_timeout))?;
        Ok(Self::new(config, transport, StdRng::from_entropy()))
    }
}

impl<T: Transport> App<T> {
    pub fn new(config: Config, transport: T, rng: StdRng) -> Self {
        let cache = cache::shared(config.ttl());
        Self {
            fetcher: CachedFetcher::new(cache, transport),
            config,
            pokedex: Pokedex::new(),
            pagination: PaginationState::default(),
            rng,
            shutdown: CancellationToken::new(),
            sweep: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // == Sweep Lifecycle ==
    /// Starts the cache sweep, ticking once per TTL. Must be called from
    /// within a tokio runtime; repeated calls are no-ops.
    pub fn start_sweep(&mut self) {
        if self.sweep.is_some() {
            return;
        }
        let handle = spawn_sweep_task(
            self.fetcher.cache().clone(),
            self.config.ttl(),
            self.shutdown.child_token(),
        );
        self.sweep = Some(handle);
        info!("Cache sweep started");
    }

    /// Stops the sweep task and waits for it to exit.
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.sweep.take() {
            if let Err(e) = handle.await {
                warn!("Cache sweep task ended abnormally: {}", e);
            }
        }
        debug!("App shut down");
    }

    // == Map ==
    /// Shows the next page of locations.
    pub async fn map_forward(&mut self) -> PageView {
        let cursor = self.pagination.forward().to_string();
        self.load_page(&cursor).await
    }

    /// Shows the previous page of locations.
    pub async fn map_back(&mut self) -> PageView {
        let cursor = self.pagination.backward().to_string();
        self.load_page(&cursor).await
    }

    async fn load_page(&mut self, cursor: &str) -> PageView {
        let page = locations::list_page(&self.fetcher, cursor, &self.config.first_page_url()).await;
        self.pagination.advance(&page);
        page
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    // == Explore ==
    pub async fn explore(&self, area: &str) -> Result<Vec<String>> {
        locations::explore(&self.fetcher, &self.config.location_area_url(area)).await
    }

    // == Catch ==
    /// Throws a Pokeball at `name`, which may be a catalog name or id. A
    /// caught Pokemon is stored under the returned [`Throw::name`].
    pub async fn catch(&mut self, name: &str) -> Result<Throw> {
        let url = self.config.pokemon_url(name);
        catch::attempt_capture(&self.fetcher, &mut self.pokedex, &url, &mut self.rng).await
    }

    // == Registry ==
    pub fn inspect(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.inspect(name)
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    // == Cache ==
    pub async fn cache_stats(&self) -> CacheStats {
        self.fetcher.cache().lock().await.stats()
    }
}
