//! Suite settings fixtures used across the integration tests

use appium_lifecycle::{AppiumSettings, LogLevel, SuiteSettings};
use serde_json::json;
use std::collections::BTreeMap;

pub struct TestFixtures;

impl TestFixtures {
    pub const SELENIUM_PORT: u16 = 4723;

    /// Appium section present but process management switched off.
    pub fn disabled_settings() -> SuiteSettings {
        SuiteSettings {
            appium: Some(AppiumSettings {
                start_process: false,
                loglevel: None,
                options: BTreeMap::new(),
            }),
            selenium_port: Self::SELENIUM_PORT,
            verbose: false,
        }
    }

    /// Managed server with default log level and no extra options.
    pub fn enabled_settings() -> SuiteSettings {
        SuiteSettings {
            appium: Some(AppiumSettings {
                start_process: true,
                loglevel: None,
                options: BTreeMap::new(),
            }),
            selenium_port: Self::SELENIUM_PORT,
            verbose: false,
        }
    }

    /// Managed server with pass-through launch options.
    pub fn settings_with_options() -> SuiteSettings {
        let mut settings = Self::enabled_settings();
        settings.appium.as_mut().unwrap().options = BTreeMap::from([
            ("address".to_string(), json!("127.0.0.1")),
            ("session_override".to_string(), json!(true)),
        ]);
        settings
    }

    /// No appium section at all.
    pub fn settings_without_appium() -> SuiteSettings {
        SuiteSettings {
            appium: None,
            selenium_port: Self::SELENIUM_PORT,
            verbose: false,
        }
    }

    /// Managed server with an explicit log level and global verbose on.
    pub fn verbose_settings() -> SuiteSettings {
        let mut settings = Self::enabled_settings();
        settings.verbose = true;
        settings.appium.as_mut().unwrap().loglevel = Some(LogLevel::Warn);
        settings
    }
}
