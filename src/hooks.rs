//! Suite lifecycle hooks
//!
//! The test framework calls `before` ahead of the suite body and `after`
//! once it finishes. Launch failures fail the suite; teardown failures
//! are logged and absorbed so they cannot mask the suite's actual result.

use std::time::Duration;
use tracing::error;

use crate::core::{ProcessSupervisor, ZombieReaper};
use crate::error::HookResult;
use crate::services::{AppiumLauncher, SystemProcessTable};
use crate::state::RunState;
use crate::traits::{ProcessTable, ServerLauncher};
use crate::types::ProcessId;

/// Grace window for leftover child processes before they are force-killed.
const ZOMBIE_POLLING_MAX_TIME: Duration = Duration::from_secs(10);

/// The before/after pair managing one optional appium server per suite run.
pub struct AppiumHooks<L, T>
where
    L: ServerLauncher,
    T: ProcessTable,
{
    supervisor: ProcessSupervisor<L>,
    reaper: ZombieReaper<T>,
    zombie_wait: Duration,
}

impl AppiumHooks<AppiumLauncher, SystemProcessTable> {
    /// Hooks wired to the real appium binary and the live process table.
    pub fn new() -> Self {
        Self::with_services(AppiumLauncher::new(), SystemProcessTable::new())
    }
}

impl Default for AppiumHooks<AppiumLauncher, SystemProcessTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, T> AppiumHooks<L, T>
where
    L: ServerLauncher,
    T: ProcessTable,
{
    /// Hooks over injected services.
    pub fn with_services(launcher: L, table: T) -> Self {
        Self {
            supervisor: ProcessSupervisor::new(launcher),
            reaper: ZombieReaper::new(table),
            zombie_wait: ZOMBIE_POLLING_MAX_TIME,
        }
    }

    /// Override the zombie grace window.
    pub fn with_zombie_wait(mut self, zombie_wait: Duration) -> Self {
        self.zombie_wait = zombie_wait;
        self
    }

    /// Override the reaper's poll cadence.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.reaper = self.reaper.with_poll_interval(poll_interval);
        self
    }

    /// Suite setup: start the server if configured and store its handle.
    pub async fn before(&self, state: &mut RunState) -> HookResult<()> {
        if let Some(handle) = self.supervisor.start(&state.settings).await? {
            state.server = Some(handle);
        }
        Ok(())
    }

    /// Suite teardown: stop the server, then sweep leftover descendants
    /// of the current process.
    ///
    /// The handle is taken out of the state before anything can fail, so
    /// `state.server` is `None` on every exit path. A stop failure is
    /// reported here and does not block the sweep.
    pub async fn after(&self, state: &mut RunState) -> HookResult<()> {
        let handle = state.server.take();
        if let Err(err) = self.supervisor.stop(handle).await {
            error!("appium server is not stopped cleanly: {err}");
        }

        self.reaper
            .reap(ProcessId::current(), self.zombie_wait)
            .await;
        Ok(())
    }
}
