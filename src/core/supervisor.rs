//! Server start/stop orchestration
//!
//! Starts at most one external appium server per suite run and stops the
//! held handle exactly once during teardown.

use tracing::{debug, info};

use crate::config::{LaunchConfig, LogLevel, SuiteSettings};
use crate::error::{LaunchError, StopError};
use crate::traits::{ServerHandle, ServerLauncher};

/// Owns the launch capability and the start/stop state machine.
pub struct ProcessSupervisor<L>
where
    L: ServerLauncher,
{
    launcher: L,
}

impl<L> ProcessSupervisor<L>
where
    L: ServerLauncher,
{
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Start the server if the suite settings ask for one.
    ///
    /// Returns `Ok(None)` when no server is configured; that is a normal
    /// outcome, not an error. A launch failure is fatal to the suite and
    /// must not be retried.
    pub async fn start(
        &self,
        settings: &SuiteSettings,
    ) -> Result<Option<Box<dyn ServerHandle>>, LaunchError> {
        let Some(appium) = settings.appium.as_ref().filter(|a| a.start_process) else {
            info!("no appium configured in suite settings, skip appium start");
            return Ok(None);
        };

        let log_level = if settings.verbose {
            LogLevel::Debug
        } else {
            appium.loglevel.unwrap_or_default()
        };

        let config = LaunchConfig {
            port: settings.selenium_port,
            log_level,
            raise_errors: true,
            options: appium.options.clone(),
        };
        debug!(?config, "launching appium server");

        let handle = self.launcher.launch(config).await?;
        info!("🚀 appium server is launched");
        Ok(Some(handle))
    }

    /// Stop a previously started server.
    ///
    /// `None` means the server was never started; that is a no-op
    /// success. The handle is consumed either way, so shutdown runs at
    /// most once.
    pub async fn stop(&self, handle: Option<Box<dyn ServerHandle>>) -> Result<(), StopError> {
        let Some(mut handle) = handle else {
            info!("no appium configured in suite settings, skip appium stop");
            return Ok(());
        };

        handle.shutdown().await?;
        info!("🛑 appium server is stopped");
        Ok(())
    }
}
