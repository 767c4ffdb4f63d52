//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECONDS, DEFAULT_NAVIGATE_DELAY_MS,
    DEFAULT_STORAGE_PATH, DEFAULT_TOAST_AUTO_CLOSE_MS,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    /// JSON document standing in for the browser's local storage
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    pub navigate_delay_ms: u64,
    pub toast_auto_close_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub format: String,
    pub directory: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;
        config.try_deserialize()
    }

    /// Built-in defaults only, no files and no environment.
    pub fn from_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "foodexplorer")?
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.timeout_seconds", DEFAULT_API_TIMEOUT_SECONDS)?
            .set_default("storage.path", DEFAULT_STORAGE_PATH)?
            .set_default("ui.navigate_delay_ms", DEFAULT_NAVIGATE_DELAY_MS)?
            .set_default("ui.toast_auto_close_ms", DEFAULT_TOAST_AUTO_CLOSE_MS)?
            .set_default("logging.format", "pretty")
    }
}
