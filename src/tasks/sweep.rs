//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a background task that sweeps expired entries out of `cache`.
///
/// Sweeps run on a fixed `period` schedule, so a slow sweep does not push
/// later ones back. The cache lock is held only for the sweep itself. The
/// task exits once `shutdown` is cancelled.
///
/// # Example
/// ```ignore
/// let cache = cache::shared(Duration::from_secs(10));
/// let token = CancellationToken::new();
/// let handle = spawn_sweep_task(cache.clone(), Duration::from_secs(10), token.clone());
/// // Later, during shutdown:
/// token.cancel();
/// handle.await?;
/// ```
pub fn spawn_sweep_task(
    cache: SharedCache,
    period: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting cache sweep task with period of {:?}", period);

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // first tick is immediate
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("Cache sweep task cancelled");
                    break;
                }
                _ = ticker.tick() => {}
            }

            let removed = {
                let mut cache_guard = cache.lock().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                debug!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
