//! Application Configuration
//!
//! Optional user settings read from `bordados.toml` in the config directory.

use crate::domain::Dimension;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use gpui::Global;
use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const CONFIG_FILE_NAME: &str = "bordados.toml";

/// Write the default settings if `path` does not exist yet
fn ensure_config_file(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::write(path, AppConfig::default().to_toml_string()?)?;
    }
    Ok(())
}

fn get_config_path() -> Result<PathBuf> {
    let path = get_or_create_config_dir()?.join(CONFIG_FILE_NAME);
    ensure_config_file(&path)?;
    Ok(path)
}

/// Outcome of reading the settings file.
///
/// Loading happens before the subscriber exists, so nothing is logged until
/// [`ConfigLoad::report`] is called.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub path: Option<PathBuf>,
    pub error: Option<Error>,
}

impl ConfigLoad {
    /// Log where the settings came from and any failure
    pub fn report(&self) {
        match (&self.path, &self.error) {
            (Some(path), None) => info!(path = ?path, "Loaded config file"),
            (path, Some(e)) => {
                error!(error = %e, path = ?path, "Failed to load config file, using defaults")
            }
            (None, None) => {}
        }
    }
}

/// User settings, every key optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    locale: Option<Locale>,
    /// Initial window width in pixels
    pub window_width: f32,
    /// Initial window height in pixels
    pub window_height: f32,
    /// Height of the fixed header; the main band starts right below it
    pub header_height: Dimension,
    /// Also write logs to a daily file in the data directory
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            window_width: 1280.0,
            window_height: 800.0,
            header_height: Dimension::Px(200.0),
            log_to_file: false,
        }
    }
}

impl Global for AppConfig {}

impl AppConfig {
    /// Read and parse the settings file at `path`
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let value = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&value)?;

        // Detect system locale if not set
        if config.locale.is_none() {
            config.locale = Locale::from_tag(&SystemLocale::current().to_string());
        }

        Ok(config)
    }

    /// Load settings from `path`, falling back to defaults when unusable
    pub fn load_from(path: &Path) -> ConfigLoad {
        match Self::try_load_from(path) {
            Ok(config) => ConfigLoad {
                config,
                path: Some(path.to_path_buf()),
                error: None,
            },
            Err(e) => ConfigLoad {
                config: Self::default(),
                path: Some(path.to_path_buf()),
                error: Some(e),
            },
        }
    }

    /// Load settings from the config directory, creating the file with
    /// defaults on first run
    pub fn load() -> ConfigLoad {
        match get_config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => ConfigLoad {
                config: Self::default(),
                path: None,
                error: Some(e),
            },
        }
    }

    /// Parse settings from TOML text; blank text gives the defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Serialize the settings as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn count_errors(f: impl FnOnce()) -> usize {
        let counter = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(ErrorCounter(counter.clone()));
        tracing::subscriber::with_default(subscriber, f);
        counter.load(Ordering::SeqCst)
    }

    fn temp_config(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bordados-{}-{name}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn malformed_file_falls_back_and_reports_one_error() {
        let path = temp_config("malformed");
        std::fs::write(&path, "locale = ").expect("write config");

        let loaded = AppConfig::load_from(&path);
        assert_eq!(loaded.config, AppConfig::default());
        assert!(matches!(loaded.error, Some(Error::TomlDe { .. })));
        assert_eq!(count_errors(|| loaded.report()), 1);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let loaded = AppConfig::load_from(&temp_config("missing"));
        assert!(matches!(loaded.error, Some(Error::Io { .. })));
        assert_eq!(count_errors(|| loaded.report()), 1);
    }

    #[test]
    fn first_run_writes_readable_defaults() {
        let path = temp_config("fresh");
        ensure_config_file(&path).expect("create config");

        let text = std::fs::read_to_string(&path).expect("read config");
        assert!(text.contains("window_width = 1280.0"));

        let loaded = AppConfig::load_from(&path);
        assert!(loaded.error.is_none());
        assert_eq!(loaded.config.header_height, Dimension::Px(200.0));
        assert_eq!(count_errors(|| loaded.report()), 0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn blank_file_gives_defaults() {
        let config = AppConfig::from_toml_str("  \n").expect("blank config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.header_height, Dimension::Px(200.0));
        assert_eq!(config.locale(), Locale::Es);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            locale = "en"
            header_height = "160px"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.header_height, Dimension::Px(160.0));
        assert_eq!(config.window_width, 1280.0);
        assert!(!config.log_to_file);
    }

    #[test]
    fn invalid_dimension_is_rejected() {
        assert!(AppConfig::from_toml_str(r#"header_height = "tall""#).is_err());
    }

    #[test]
    fn written_settings_read_back() {
        let mut config = AppConfig::default();
        config.set_locale(Locale::En);
        config.log_to_file = true;

        let text = config.to_toml_string().expect("serialize");
        assert!(text.contains(r#"header_height = "200px""#));
        assert_eq!(AppConfig::from_toml_str(&text).expect("parse"), config);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(AppConfig::from_toml_str("locale = ").is_err());
    }
}
