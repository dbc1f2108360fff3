//! Real appium server launcher
//!
//! Spawns the `appium` binary as a child process, waits for it to accept
//! connections on the configured port, and hands back a handle whose
//! shutdown walks the usual SIGTERM-then-SIGKILL ladder.

use async_trait::async_trait;
use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use serde_json::Value;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::process::{Child, Command};
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::config::LaunchConfig;
use crate::error::{LaunchError, StopError};
use crate::traits::{ServerHandle, ServerLauncher};
use crate::types::ProcessId;

const DEFAULT_STARTUP_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);
const READY_POLL_INTERVAL: Duration = Duration::from_millis(200);
const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Launches an appium server binary found on `PATH` (or at an explicit
/// location) and supervises its startup.
pub struct AppiumLauncher {
    binary: PathBuf,
    startup_timeout: Duration,
    shutdown_grace: Duration,
}

impl AppiumLauncher {
    pub fn new() -> Self {
        Self::with_binary("appium")
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            startup_timeout: DEFAULT_STARTUP_TIMEOUT,
            shutdown_grace: DEFAULT_SHUTDOWN_GRACE,
        }
    }

    /// How long to wait for the server to accept connections.
    pub fn with_startup_timeout(mut self, startup_timeout: Duration) -> Self {
        self.startup_timeout = startup_timeout;
        self
    }

    /// How long a stopped server may take to exit after SIGTERM before
    /// it is killed outright.
    pub fn with_shutdown_grace(mut self, shutdown_grace: Duration) -> Self {
        self.shutdown_grace = shutdown_grace;
        self
    }

    pub(crate) fn build_command(&self, config: &LaunchConfig) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--port")
            .arg(config.port.to_string())
            .arg("--log-level")
            .arg(config.log_level.to_string());

        // Pass-through options become CLI flags; snake_case keys from the
        // settings file map onto the server's kebab-case flag names.
        for (key, value) in &config.options {
            let flag = format!("--{}", key.replace('_', "-"));
            match value {
                Value::Bool(true) => {
                    cmd.arg(flag);
                }
                Value::Bool(false) => {}
                Value::String(text) => {
                    cmd.arg(flag).arg(text);
                }
                other => {
                    cmd.arg(flag).arg(other.to_string());
                }
            }
        }

        // The server logs straight to the suite's console, like the rest
        // of the harness output.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Default for AppiumLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServerLauncher for AppiumLauncher {
    async fn launch(&self, config: LaunchConfig) -> Result<Box<dyn ServerHandle>, LaunchError> {
        let mut command = self.build_command(&config);
        debug!(binary = %self.binary.display(), port = config.port, "spawning appium server");

        let mut child = command.spawn().map_err(LaunchError::Spawn)?;
        let pid = child.id();

        let deadline = Instant::now() + self.startup_timeout;
        loop {
            if let Ok(Some(status)) = child.try_wait() {
                return Err(LaunchError::ExitedEarly { status });
            }
            if TcpStream::connect(("127.0.0.1", config.port)).await.is_ok() {
                break;
            }
            if Instant::now() >= deadline {
                let _ = child.kill().await;
                return Err(LaunchError::NotReady {
                    port: config.port,
                    waited: self.startup_timeout,
                });
            }
            sleep(READY_POLL_INTERVAL).await;
        }

        debug!(pid, port = config.port, "appium server is accepting connections");
        Ok(Box::new(AppiumServerHandle {
            child,
            shutdown_grace: self.shutdown_grace,
        }))
    }
}

/// Handle over the spawned server process.
#[derive(Debug)]
pub struct AppiumServerHandle {
    child: Child,
    shutdown_grace: Duration,
}

#[async_trait]
impl ServerHandle for AppiumServerHandle {
    async fn shutdown(&mut self) -> Result<(), StopError> {
        let Some(pid) = self.child.id() else {
            return Ok(());
        };

        match signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
            Ok(()) => {}
            Err(Errno::ESRCH) => {
                let _ = self.child.wait().await;
                return Ok(());
            }
            Err(err) => return Err(StopError::Signal(err)),
        }

        let deadline = Instant::now() + self.shutdown_grace;
        while Instant::now() < deadline {
            if let Some(status) = self.child.try_wait()? {
                debug!(pid, %status, "appium server exited after SIGTERM");
                return Ok(());
            }
            sleep(EXIT_POLL_INTERVAL).await;
        }

        warn!(pid, "appium server did not exit after SIGTERM, sending SIGKILL");
        self.child.kill().await?;
        Ok(())
    }

    fn pid(&self) -> Option<ProcessId> {
        self.child.id().map(ProcessId::new)
    }
}
