//! [`Config`]-related definitions.

use std::time;

use common::PageSize;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::domain::SearchMode;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Users source configuration.
    pub source: Source,

    /// Directory configuration.
    pub directory: Directory,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Users source configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Source {
    /// Path to the JSON file with users.
    #[default("users.json".to_owned())]
    pub path: String,
}

/// Directory configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Directory {
    /// Number of users shown on a single page.
    pub page_size: PageSize,

    /// Indicator whether users are looked up by their first name rather than
    /// the last one.
    pub search_first_name: bool,

    /// Quiet period after the last keystroke before searching.
    #[default(time::Duration::from_millis(500))]
    #[serde(with = "humantime_serde")]
    pub debounce: time::Duration,
}

impl From<Directory> for service::Config {
    fn from(value: Directory) -> Self {
        let Directory {
            page_size,
            search_first_name,
            debounce,
        } = value;
        Self {
            search_mode: SearchMode::new(search_first_name),
            page_size,
            debounce,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::{env, fs, process, time::Duration};

    use service::domain::SearchMode;

    use super::Config;

    #[test]
    fn defaults_without_file() {
        let config = Config::new("definitely/missing/config").unwrap();

        assert_eq!(config.source.path, "users.json");
        assert_eq!(config.directory.page_size.get(), 10);
        assert!(!config.directory.search_first_name);
        assert_eq!(config.directory.debounce, Duration::from_millis(500));

        let service = service::Config::from(config.directory);
        assert_eq!(service.search_mode, SearchMode::ByLastName);
    }

    #[test]
    fn defaults_missing_sections() {
        let path = env::temp_dir()
            .join(format!("directory-partial-{}.toml", process::id()));
        fs::write(&path, "[directory]\npage_size = 3\n").unwrap();

        let config = Config::new(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();
        let config = config.unwrap();

        assert_eq!(config.source.path, "users.json");
        assert_eq!(config.directory.page_size.get(), 3);
        assert_eq!(config.directory.debounce, Duration::from_millis(500));
        assert_eq!(tracing::Level::from(config.log.level), tracing::Level::WARN);
    }
}
