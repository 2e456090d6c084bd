//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Session lifecycle configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds a session stays alive without activity.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,
    /// Countdown tick interval in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_timeout_secs() -> u32 {
    300 // 5 minutes
}

fn default_tick_interval_ms() -> u64 {
    1000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MINIBANK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
