//! Suite lifecycle management for an external appium server
//!
//! Starts the server before a test suite runs, stops it afterward, and
//! sweeps any child processes left behind. The server launch and the OS
//! process table sit behind injected ports so both halves are testable
//! with fakes.

pub mod config;
pub mod core;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{AppiumSettings, LaunchConfig, LogLevel, SuiteSettings};
pub use crate::core::{ProcessSupervisor, ZombieReaper};
pub use error::{HookError, HookResult, LaunchError, StopError};
pub use hooks::AppiumHooks;
pub use state::RunState;
pub use traits::{ProcessTable, ServerHandle, ServerLauncher};
pub use types::ProcessId;
