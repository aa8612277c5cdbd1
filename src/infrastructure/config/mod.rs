//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::domain::entities::LocaleCode;

/// Toolkit configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub localization: LocalizationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LocalizationConfig {
    pub default_locale: String,
    pub resources: PathBuf,
    /// Only load `<content-type>_<locale>.properties` files
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub locale: Option<String>,
    pub color: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            locale: None,
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            localization: LocalizationConfig {
                default_locale: "en".to_string(),
                resources: PathBuf::from("./lang"),
                content_type: Some("messages".to_string()),
            },
            logging: LoggingConfig::default(),
            console: ConsoleConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.default_locale()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(locale) = std::env::var("PLUGKIT_DEFAULT_LOCALE") {
            config.localization.default_locale = locale;
        }

        if let Ok(dir) = std::env::var("PLUGKIT_RESOURCES") {
            config.localization.resources = PathBuf::from(dir);
        }

        if let Ok(level) = std::env::var("PLUGKIT_LOG_LEVEL") {
            config.logging.level = level;
        }

        config
    }

    /// The configured default locale as a language code
    pub fn default_locale(&self) -> Result<LocaleCode, ConfigError> {
        let tag = &self.localization.default_locale;
        LocaleCode::parse(tag)
            .ok_or_else(|| ConfigError::InvalidValue(format!("default-locale '{}' is not a language tag", tag)))
    }
}
