//! Test helpers and builder patterns for the lifecycle hook tests
//!
//! Wraps the mockall-generated ports in a builder so individual tests
//! only configure the behavior they actually assert on.

use appium_lifecycle::traits::{MockProcessTable, MockServerHandle, MockServerLauncher};
use appium_lifecycle::AppiumHooks;
use std::time::Duration;

/// Builder for hooks wired to mock services with sensible defaults.
pub struct HooksBuilder {
    launcher: MockServerLauncher,
    table: MockProcessTable,
    zombie_wait: Duration,
}

impl HooksBuilder {
    /// Create a new builder with a clean process table.
    ///
    /// No default is installed for `launch` or `kill_tree`, so a scenario
    /// that should never start a server or never kill anything fails loudly
    /// if it does.
    pub fn new() -> Self {
        let mut table = MockProcessTable::new();
        table
            .expect_descendants()
            .returning(|_| Vec::new())
            .times(0..);

        Self {
            launcher: MockServerLauncher::new(),
            table,
            zombie_wait: Duration::from_millis(50),
        }
    }

    /// Configure the launcher mock with a setup function.
    pub fn with_launcher<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockServerLauncher),
    {
        setup(&mut self.launcher);
        self
    }

    /// Configure the process table mock with a setup function.
    pub fn with_table<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockProcessTable),
    {
        // Start from a fresh mock: the permissive `descendants` default
        // installed in `new` is matched first by mockall and would
        // otherwise shadow the per-test expectations set up here.
        let mut table = MockProcessTable::new();
        setup(&mut table);
        self.table = table;
        self
    }

    /// Override the zombie grace window.
    pub fn with_zombie_wait(mut self, zombie_wait: Duration) -> Self {
        self.zombie_wait = zombie_wait;
        self
    }

    pub fn build(self) -> AppiumHooks<MockServerLauncher, MockProcessTable> {
        AppiumHooks::with_services(self.launcher, self.table)
            .with_zombie_wait(self.zombie_wait)
            .with_poll_interval(Duration::from_millis(10))
    }

    /// Handle whose shutdown succeeds when invoked.
    ///
    /// Allowed zero-or-one shutdowns: `before`-only scenarios store the
    /// handle without tearing it down, while teardown scenarios shut it
    /// down exactly once. Both are valid uses of this default handle.
    pub fn healthy_handle() -> MockServerHandle {
        let mut handle = MockServerHandle::new();
        handle.expect_shutdown().times(0..=1).returning(|| Ok(()));
        handle
    }
}

impl Default for HooksBuilder {
    fn default() -> Self {
        Self::new()
    }
}
