//! Expiry Purge Task
//!
//! Background task that periodically removes expired orchestrator state.
//! Lookups already ignore expired entries; this bounds memory between them.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::orchestrator::Orchestrator;

/// Spawns a background task that calls [`Orchestrator::purge_expired`]
/// every `cleanup_interval_secs` seconds.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cleanup_handle = spawn_cleanup_task(state.orchestrator.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    orchestrator: Arc<Orchestrator>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting purge task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = orchestrator.purge_expired().await;
            if removed > 0 {
                info!("Purge: removed {} expired cached results", removed);
            } else {
                debug!("Purge: no expired cached results found");
            }
        }
    })
}
