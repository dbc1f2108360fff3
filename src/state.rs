//! Run-scoped shared state passed between the lifecycle hooks

use crate::config::SuiteSettings;
use crate::traits::ServerHandle;

/// Mutable record the test framework passes by reference across the
/// hooks of one suite run.
///
/// This crate owns only the `server` field. `settings` belongs to the
/// framework and is read-only here.
///
/// Invariant: `server` is `Some` only between a successful start and the
/// beginning of a stop; after `after` completes it is always `None`.
pub struct RunState {
    pub settings: SuiteSettings,
    pub server: Option<Box<dyn ServerHandle>>,
}

impl RunState {
    pub fn new(settings: SuiteSettings) -> Self {
        Self {
            settings,
            server: None,
        }
    }

    /// Whether a managed server handle is currently held.
    pub fn has_server(&self) -> bool {
        self.server.is_some()
    }
}
