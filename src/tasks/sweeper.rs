//! Cache Sweep Task
//!
//! Background task that periodically evicts entries idle past the TTL.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::cache::SharedCache;

/// Handle to a running sweep task.
#[derive(Debug)]
pub struct SweeperHandle {
    shutdown: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signals the task to stop and waits for it to exit.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.join.await {
            error!("Cache sweep task ended abnormally: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

/// Spawns a task that sweeps `cache` every `period`.
///
/// The first sweep runs one full period after spawning. Each sweep runs in
/// its own task, so a panic during a sweep is logged and the schedule
/// carries on. The task performs no backing-store I/O.
///
/// # Example
/// ```ignore
/// let sweeper = spawn_sweep_task(cache.clone(), Duration::from_secs(20));
/// // Later, during shutdown:
/// sweeper.stop().await;
/// ```
pub fn spawn_sweep_task<V>(cache: SharedCache<V>, period: Duration) -> SweeperHandle
where
    V: Clone + Send + Sync + 'static,
{
    let (shutdown, mut stop_rx) = watch::channel(false);
    let period = period.max(Duration::from_millis(1));

    let join = tokio::spawn(async move {
        info!(
            "Starting cache sweep task with period of {} ms",
            period.as_millis()
        );

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                    continue;
                }
            }

            let sweep_cache = cache.clone();
            let outcome =
                tokio::spawn(async move { sweep_cache.write().await.sweep_expired() }).await;

            match outcome {
                Ok(0) => debug!("Cache sweep: no expired entries found"),
                Ok(removed) => info!("Cache sweep: removed {} expired entries", removed),
                Err(e) => error!("Cache sweep failed, continuing schedule: {}", e),
            }
        }

        info!("Cache sweep task stopped");
    });

    SweeperHandle { shutdown, join }
}
