//! Configuration types.

use crate::i18n::Lang;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub data: DataConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Data source settings.
#[derive(Debug, Clone, Default)]
pub struct DataConfig {
    /// Optional path to a track dataset overriding the embedded one.
    pub file: Option<PathBuf>,
}

/// Display settings.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Theme name (see `tui::Theme::available_themes`).
    pub theme: String,

    /// Startup display language.
    pub language: Lang,

    /// Tracks per page on the track list.
    pub track_page_size: usize,

    /// Points per page on the track detail table.
    pub point_page_size: usize,

    /// Width of the page-number control window.
    pub page_window: usize,

    /// Redraw tick interval.
    pub tick_interval: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            language: Lang::En,
            track_page_size: 15,
            point_page_size: 10,
            page_window: 5,
            tick_interval: Duration::from_millis(250),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level.
    pub level: LogLevel,

    /// Log file path.
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Off,
            file: dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tccview/tccview.log"),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::str::FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(()),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => tracing::Level::ERROR, // Will be filtered anyway
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// --- File config (for TOML parsing) ---

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub data: Option<FileDataConfig>,
    pub ui: Option<FileUiConfig>,
    pub logging: Option<FileLoggingConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDataConfig {
    pub file: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub track_page_size: Option<usize>,
    pub point_page_size: Option<usize>,
    pub page_window: Option<usize>,
    pub tick_interval: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// --- Errors ---

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid page size: {} must be between 1 and 500", .0)]
    InvalidPageSize(&'static str),

    #[error("Invalid page window: must be between 3 and 15")]
    InvalidPageWindow,

    #[error("Invalid tick interval: must be between 50ms and 60s")]
    InvalidTickInterval,

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "default");
        assert_eq!(config.ui.language, Lang::En);
        assert_eq!(config.ui.track_page_size, 15);
        assert_eq!(config.ui.point_page_size, 10);
        assert_eq!(config.ui.page_window, 5);
        assert_eq!(config.ui.tick_interval, Duration::from_millis(250));
        assert!(config.data.file.is_none());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Off);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("TRACE".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("invalid".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
    }

    #[test]
    fn test_file_config_deserialization() {
        let toml = r#"
[data]
file = "/var/lib/tccview/tracks.json"

[ui]
theme = "nord"
language = "hi"
track_page_size = 20
page_window = 7

[logging]
level = "debug"
"#;
        let file_config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            file_config.data.as_ref().unwrap().file,
            Some("/var/lib/tccview/tracks.json".to_string())
        );
        let ui = file_config.ui.as_ref().unwrap();
        assert_eq!(ui.theme, Some("nord".to_string()));
        assert_eq!(ui.language, Some("hi".to_string()));
        assert_eq!(ui.track_page_size, Some(20));
        assert_eq!(ui.point_page_size, None);
        assert_eq!(ui.page_window, Some(7));
        assert_eq!(
            file_config.logging.as_ref().unwrap().level,
            Some("debug".to_string())
        );
    }

    #[test]
    fn test_file_config_partial() {
        let toml = r#"
[ui]
theme = "gruvbox"
"#;
        let file_config: FileConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            file_config.ui.as_ref().unwrap().theme,
            Some("gruvbox".to_string())
        );
        assert!(file_config.data.is_none());
        assert!(file_config.logging.is_none());
    }
}
