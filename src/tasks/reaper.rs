//! Cache Reaper Task
//!
//! Background task that periodically sweeps expired entries out of the
//! response cache.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::cache::CacheStore;

/// Shortest period the reaper will tick at. A zero interval is clamped to it.
pub const MIN_SWEEP_PERIOD: Duration = Duration::from_millis(1);

/// Spawns a background task that removes entries older than `interval`.
///
/// The first sweep runs one `interval` after this call and then once per
/// `interval`. Each sweep holds the store's lock for its whole duration, so
/// no `add`/`get` can interleave with it. Ticks delayed by a slow sweep are
/// pushed back rather than fired in a burst.
///
/// An interval too large to schedule (e.g. `Duration::MAX`) leaves the task
/// parked: no entry can outlive it, so there is nothing to sweep.
///
/// Must be called from within a Tokio runtime. The task never finishes on its
/// own; abort the returned handle to stop it.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let reaper = spawn_reap_task(store.clone(), Duration::from_secs(5));
/// // Later:
/// reaper.abort();
/// ```
pub fn spawn_reap_task(store: Arc<Mutex<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    let period = interval.max(MIN_SWEEP_PERIOD);
    // The ticker adds `period` again after every tick, so the second deadline must fit too
    let first_sweep = Instant::now()
        .checked_add(period)
        .filter(|first| first.checked_add(period).is_some());

    tokio::spawn(async move {
        let Some(first_sweep) = first_sweep else {
            debug!(?interval, "Cache interval out of range, reaper parked");
            return std::future::pending::<()>().await;
        };
        debug!(?interval, "Starting cache reaper");

        let mut ticker = time::interval_at(first_sweep, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let (removed, remaining) = {
                let mut store = store.lock();
                let removed = store.reap(Instant::now(), interval);
                (removed, store.len())
            };

            if removed > 0 {
                debug!(removed, remaining, "Cache sweep removed expired entries");
            } else {
                trace!(remaining, "Cache sweep found no expired entries");
            }
        }
    })
}
