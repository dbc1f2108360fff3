//! Trait definitions with mockall annotations for testing
//!
//! The external server launch and the OS process table are modeled as
//! injected capability ports so the supervisor and reaper can be driven
//! with fakes. Mocks are generated here for use by unit and integration
//! tests.

use crate::config::LaunchConfig;
use crate::error::{LaunchError, StopError};
use crate::types::ProcessId;
use nix::sys::signal::Signal;

/// Handle to a running server, returned by [`ServerLauncher::launch`].
///
/// `shutdown` must be called at most once; the handle is invalid
/// afterwards and must be discarded.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ServerHandle: Send + std::fmt::Debug {
    /// Shut the server down and release its resources.
    async fn shutdown(&mut self) -> Result<(), StopError>;

    /// OS process id of the server, if it is (still) known.
    fn pid(&self) -> Option<ProcessId>;
}

/// Launch capability for the external automation server.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ServerLauncher: Send + Sync {
    /// Start a server with the merged configuration.
    ///
    /// Failures come back as [`LaunchError`] values; the launcher never
    /// terminates the calling process.
    async fn launch(&self, config: LaunchConfig) -> Result<Box<dyn ServerHandle>, LaunchError>;
}

/// Read and signal access to the OS process table.
#[mockall::automock]
#[async_trait::async_trait]
pub trait ProcessTable: Send + Sync {
    /// Point-in-time snapshot of all transitive descendants of `root`,
    /// in discovery order. Best effort: lookup failures yield an empty
    /// or partial list, never an error.
    async fn descendants(&self, root: ProcessId) -> Vec<ProcessId>;

    /// Send `signal` to `pid` and all of its own descendants.
    ///
    /// Already-exited processes are accepted silently; completion of the
    /// returned future means every delivery was attempted.
    async fn kill_tree(&self, pid: ProcessId, signal: Signal);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_traits_instantiate() {
        let _launcher = MockServerLauncher::new();
        let _handle = MockServerHandle::new();
        let _table = MockProcessTable::new();
    }
}
