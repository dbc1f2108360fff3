//! Zombie child process sweep
//!
//! Guarantees that, within a bounded wait budget, no descendant of the
//! root process survives suite teardown. Descendants get a grace window
//! to exit on their own; whatever is left at escalation time is killed
//! forcefully, one process tree at a time.

use nix::sys::signal::Signal;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use crate::traits::ProcessTable;
use crate::types::ProcessId;

/// How often the descendant set is re-polled during the grace window.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Sweeps leftover descendants of a root process.
///
/// The sweep is cleanup, not a fallible operation: every outcome
/// (nothing found, grace window exhausted, target already gone by kill
/// time) is acceptable and none aborts the suite.
pub struct ZombieReaper<T>
where
    T: ProcessTable,
{
    table: T,
    poll_interval: Duration,
}

impl<T> ZombieReaper<T>
where
    T: ProcessTable,
{
    pub fn new(table: T) -> Self {
        Self {
            table,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Override the poll cadence.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Wait up to `max_wait` for the descendants of `root` to exit, then
    /// force-kill whatever remains.
    ///
    /// Kills are issued strictly sequentially, in discovery order, and
    /// only against the snapshot taken when the wait was abandoned —
    /// descendants appearing later are left for the next sweep.
    pub async fn reap(&self, root: ProcessId, max_wait: Duration) {
        debug!(%root, "checking for zombie child processes");

        let deadline = Instant::now() + max_wait;
        let mut zombies = self.table.descendants(root).await;
        while !zombies.is_empty() {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            sleep(self.poll_interval.min(deadline - now)).await;
            zombies = self.table.descendants(root).await;
        }

        if zombies.is_empty() {
            debug!("no zombies found");
            return;
        }

        info!(
            count = zombies.len(),
            "giving up waiting for zombie child processes to die, cleaning up"
        );
        let mut queue: VecDeque<ProcessId> = zombies.into();
        while let Some(pid) = queue.pop_front() {
            info!(%pid, "killing pid and its child pids");
            self.table.kill_tree(pid, Signal::SIGKILL).await;
        }
        info!("🧹 done killing zombies");
    }
}
