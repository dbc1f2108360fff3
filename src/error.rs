//! Hook-specific error types

use std::time::Duration;
use thiserror::Error;

/// The server could not be started. Fatal to the suite: a misconfigured
/// server is a setup bug and must surface in the run result.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to spawn appium server: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("appium server exited during startup: {status}")]
    ExitedEarly { status: std::process::ExitStatus },

    #[error("appium server did not accept connections on port {port} within {waited:?}")]
    NotReady { port: u16, waited: Duration },
}

/// The server did not shut down cleanly. Reported but never fatal:
/// teardown proceeds to the zombie sweep regardless.
#[derive(Error, Debug)]
pub enum StopError {
    #[error("failed to signal appium server process: {0}")]
    Signal(#[source] nix::errno::Errno),

    #[error("i/o error while stopping appium server: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the `before`/`after` lifecycle hooks.
#[derive(Error, Debug)]
pub enum HookError {
    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Stop(#[from] StopError),
}

pub type HookResult<T> = Result<T, HookError>;
