//! Configuration management

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use validator::Validate;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECONDS, DEFAULT_LOG_LEVEL,
    DEFAULT_REDIRECT_DELAY_MS, DEFAULT_SEARCH_DEBOUNCE_MS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub api: ApiSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ApiSettings {
    #[validate(url)]
    pub base_url: String,
    #[validate(range(min = 1, max = 600))]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    pub search_debounce_ms: u64,
    pub redirect_delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Directory for the daily rolling log file. Stderr only when unset.
    #[serde(default)]
    pub directory: Option<String>,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl UiSettings {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl Settings {
    /// Load `.env`, `config/default`, `config/{APP_ENV}` and `APP__*` variables.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_config(builder.build()?)
    }

    /// Deserialize and validate an already assembled configuration.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, AppError> {
        Ok(Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.timeout_seconds", DEFAULT_API_TIMEOUT_SECONDS)?
            .set_default("ui.search_debounce_ms", DEFAULT_SEARCH_DEBOUNCE_MS)?
            .set_default("ui.redirect_delay_ms", DEFAULT_REDIRECT_DELAY_MS)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timings() {
        let config = Settings::defaults().unwrap().build().unwrap();
        let settings = Settings::from_config(config).unwrap();

        assert_eq!(settings.api.base_url, "https://localhost:7000/api");
        assert_eq!(settings.ui.search_debounce(), Duration::from_millis(300));
        assert_eq!(settings.ui.redirect_delay(), Duration::from_millis(1500));
        assert_eq!(settings.logging.format, LogFormat::Pretty);
        assert!(settings.logging.directory.is_none());
    }

    #[test]
    fn rejects_base_url_that_is_not_a_url() {
        let config = Settings::defaults()
            .unwrap()
            .set_override("api.base_url", "not a url")
            .unwrap()
            .build()
            .unwrap();

        let err = Settings::from_config(config).unwrap_err();
        assert!(matches!(err, AppError::InvalidSettings(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = Settings::defaults()
            .unwrap()
            .set_override("api.timeout_seconds", 0)
            .unwrap()
            .build()
            .unwrap();

        assert!(Settings::from_config(config).is_err());
    }

    #[test]
    fn json_log_format_is_parsed() {
        let config = Settings::defaults()
            .unwrap()
            .set_override("logging.format", "json")
            .unwrap()
            .build()
            .unwrap();

        let settings = Settings::from_config(config).unwrap();
        assert_eq!(settings.logging.format, LogFormat::Json);
    }
}
