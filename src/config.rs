use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub demo: DemoSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Client storage limits
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_max_items")]
    pub max_items: u64,
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            idle_timeout_secs: default_idle_timeout_secs(),
        }
    }
}

fn default_max_items() -> u64 { 100_000 }
fn default_idle_timeout_secs() -> u64 { 7 * 24 * 60 * 60 }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize { crate::core::DEFAULT_PAGE_SIZE }

/// Artificial latencies of the demo backend, in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct DemoSettings {
    #[serde(default = "default_short_delay_ms")]
    pub login_delay_ms: u64,
    #[serde(default = "default_short_delay_ms")]
    pub load_delay_ms: u64,
    #[serde(default = "default_short_delay_ms")]
    pub action_delay_ms: u64,
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
}

impl DemoSettings {
    /// No artificial latency at all
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            load_delay_ms: 0,
            action_delay_ms: 0,
            submit_delay_ms: 0,
        }
    }

    pub fn login_delay(&self) -> Duration { Duration::from_millis(self.login_delay_ms) }
    pub fn load_delay(&self) -> Duration { Duration::from_millis(self.load_delay_ms) }
    pub fn action_delay(&self) -> Duration { Duration::from_millis(self.action_delay_ms) }
    pub fn submit_delay(&self) -> Duration { Duration::from_millis(self.submit_delay_ms) }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            login_delay_ms: default_short_delay_ms(),
            load_delay_ms: default_short_delay_ms(),
            action_delay_ms: default_short_delay_ms(),
            submit_delay_ms: default_submit_delay_ms(),
        }
    }
}

fn default_short_delay_ms() -> u64 { 1000 }
fn default_submit_delay_ms() -> u64 { 2000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TENNIS__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TENNIS__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TENNIS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
