//! Suite settings consumed by the lifecycle hooks
//!
//! The test framework hands every hook a settings record deserialized from
//! the suite configuration file. This crate reads the nested `appium`
//! section plus the shared `selenium_port` and global `verbose` flag.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Verbosity of the launched server's own log output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        write!(f, "{name}")
    }
}

/// The `appium` section of the suite settings.
///
/// Everything apart from `start_process` and `loglevel` is passed through
/// to the server launch unmodified.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AppiumSettings {
    /// Whether the hooks should manage an appium server for this run.
    #[serde(default)]
    pub start_process: bool,

    /// Explicit server log level; defaults to `info` when absent.
    #[serde(default)]
    pub loglevel: Option<LogLevel>,

    /// Arbitrary pass-through launch options.
    #[serde(flatten)]
    pub options: BTreeMap<String, serde_json::Value>,
}

/// Suite-level settings shared across hooks within one run.
#[derive(Clone, Debug, Deserialize)]
pub struct SuiteSettings {
    /// Optional appium section; absent means no server management at all.
    #[serde(default)]
    pub appium: Option<AppiumSettings>,

    /// Port the server should listen on, shared with the webdriver client.
    pub selenium_port: u16,

    /// Global verbose mode; forces the server log level to `debug`.
    #[serde(default)]
    pub verbose: bool,
}

/// Fully merged configuration handed to a [`ServerLauncher`].
///
/// [`ServerLauncher`]: crate::traits::ServerLauncher
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub port: u16,
    pub log_level: LogLevel,

    /// The launch capability must report failures as return values rather
    /// than terminating the calling process.
    pub raise_errors: bool,

    /// Pass-through options, minus the `start_process` flag.
    pub options: BTreeMap<String, serde_json::Value>,
}
