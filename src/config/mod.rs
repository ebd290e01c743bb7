//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file
//! 4. Defaults

mod types;

pub use types::*;

use crate::cli::Cli;
use crate::tui::Theme;
use std::path::PathBuf;
use std::time::Duration;

impl Config {
    /// Load configuration from all sources with proper precedence.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Config::default();

        // Load config file if it exists
        if let Some(file_config) = Self::load_file(cli)? {
            config.merge(file_config);
        }

        // Apply environment variables
        config.apply_env();

        // Apply CLI flags (highest precedence)
        config.apply_cli(cli);

        // Validate final config
        config.validate()?;

        Ok(config)
    }

    fn load_file(cli: &Cli) -> Result<Option<FileConfig>, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| std::env::var("TCCVIEW_CONFIG").ok().map(PathBuf::from))
            .or_else(|| dirs::config_dir().map(|d| d.join("tccview/config.toml")));

        match path {
            Some(p) if p.exists() => {
                tracing::debug!(path = %p.display(), "Loading config file");
                let content = std::fs::read_to_string(&p).map_err(|e| ConfigError::Read {
                    path: p.clone(),
                    source: e,
                })?;
                let file_config: FileConfig = toml::from_str(&content)
                    .map_err(|e| ConfigError::Parse { path: p, source: e })?;
                Ok(Some(file_config))
            }
            _ => Ok(None),
        }
    }

    fn merge(&mut self, file: FileConfig) {
        if let Some(data) = file.data {
            if let Some(path) = data.file {
                self.data.file = Some(expand_tilde(&path));
            }
        }

        if let Some(ui) = file.ui {
            if let Some(theme) = ui.theme {
                self.ui.theme = theme;
            }
            if let Some(language) = ui.language {
                self.ui.language = language.parse().unwrap_or_default();
            }
            if let Some(size) = ui.track_page_size {
                self.ui.track_page_size = size;
            }
            if let Some(size) = ui.point_page_size {
                self.ui.point_page_size = size;
            }
            if let Some(window) = ui.page_window {
                self.ui.page_window = window;
            }
            if let Some(interval) = ui.tick_interval {
                self.ui.tick_interval = Duration::from_millis(interval);
            }
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level.parse().unwrap_or_default();
            }
            if let Some(file) = logging.file {
                self.logging.file = expand_tilde(&file);
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(path) = std::env::var("TCCVIEW_DATA") {
            self.data.file = Some(expand_tilde(&path));
        }
        if let Ok(theme) = std::env::var("TCCVIEW_THEME") {
            self.ui.theme = theme;
        }
        if let Ok(lang) = std::env::var("TCCVIEW_LANG") {
            if let Ok(l) = lang.parse() {
                self.ui.language = l;
            }
        }
        if let Ok(level) = std::env::var("TCCVIEW_LOG_LEVEL") {
            self.logging.level = level.parse().unwrap_or_default();
        }
        if let Ok(file) = std::env::var("TCCVIEW_LOG_FILE") {
            self.logging.file = PathBuf::from(file);
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref path) = cli.data {
            self.data.file = Some(path.clone());
        }
        if let Some(ref theme) = cli.theme {
            self.ui.theme = theme.clone();
        }
        if let Some(ref lang) = cli.lang {
            if let Ok(l) = lang.parse() {
                self.ui.language = l;
            }
        }
        if cli.verbose > 0 {
            self.logging.level = match cli.verbose {
                1 => LogLevel::Info,
                2 => LogLevel::Debug,
                _ => LogLevel::Trace,
            };
        }
        if let Some(ref log) = cli.log {
            self.logging.file = log.clone();
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=500).contains(&self.ui.track_page_size) {
            return Err(ConfigError::InvalidPageSize("track_page_size"));
        }
        if !(1..=500).contains(&self.ui.point_page_size) {
            return Err(ConfigError::InvalidPageSize("point_page_size"));
        }
        if !(3..=15).contains(&self.ui.page_window) {
            return Err(ConfigError::InvalidPageWindow);
        }

        let tick = self.ui.tick_interval.as_millis();
        if !(50..=60_000).contains(&tick) {
            return Err(ConfigError::InvalidTickInterval);
        }

        if Theme::by_name(&self.ui.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.ui.theme.clone()));
        }

        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_track_page_size_zero() {
        let mut config = Config::default();
        config.ui.track_page_size = 0;
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPageSize("track_page_size"))
        ));
    }

    #[test]
    fn test_invalid_point_page_size_too_large() {
        let mut config = Config::default();
        config.ui.point_page_size = 501;
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPageSize("point_page_size"))
        ));
    }

    #[test]
    fn test_invalid_page_window_too_narrow() {
        let mut config = Config::default();
        config.ui.page_window = 2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPageWindow)
        ));
    }

    #[test]
    fn test_invalid_tick_interval_too_low() {
        let mut config = Config::default();
        config.ui.tick_interval = Duration::from_millis(10);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTickInterval)
        ));
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut config = Config::default();
        config.ui.theme = "no-such-theme".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_merge_ui_config() {
        let mut config = Config::default();
        let file = FileConfig {
            data: None,
            ui: Some(FileUiConfig {
                theme: Some("nord".into()),
                language: Some("hi".into()),
                track_page_size: Some(20),
                point_page_size: None,
                page_window: Some(7),
                tick_interval: Some(500),
            }),
            logging: None,
        };
        config.merge(file);
        assert_eq!(config.ui.theme, "nord");
        assert_eq!(config.ui.language, Lang::Hi);
        assert_eq!(config.ui.track_page_size, 20);
        assert_eq!(config.ui.point_page_size, 10);
        assert_eq!(config.ui.page_window, 7);
        assert_eq!(config.ui.tick_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_merge_data_config() {
        let mut config = Config::default();
        let file = FileConfig {
            data: Some(FileDataConfig {
                file: Some("/var/lib/tccview/tracks.json".into()),
            }),
            ui: None,
            logging: None,
        };
        config.merge(file);
        assert_eq!(
            config.data.file,
            Some(PathBuf::from("/var/lib/tccview/tracks.json"))
        );
    }

    #[test]
    fn test_merge_logging_config() {
        let mut config = Config::default();
        let file = FileConfig {
            data: None,
            ui: None,
            logging: Some(FileLoggingConfig {
                level: Some("debug".into()),
                file: Some("/tmp/tccview.log".into()),
            }),
        };
        config.merge(file);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.file, PathBuf::from("/tmp/tccview.log"));
    }

    #[test]
    fn test_merge_bad_language_falls_back_to_default() {
        let mut config = Config::default();
        let file = FileConfig {
            data: None,
            ui: Some(FileUiConfig {
                language: Some("klingon".into()),
                ..Default::default()
            }),
            logging: None,
        };
        config.merge(file);
        assert_eq!(config.ui.language, Lang::En);
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));

        let path = expand_tilde("relative/path");
        assert_eq!(path, PathBuf::from("relative/path"));

        if let Some(home) = dirs::home_dir() {
            let path = expand_tilde("~/data/tracks.json");
            assert_eq!(path, home.join("data/tracks.json"));
        }
    }
}
