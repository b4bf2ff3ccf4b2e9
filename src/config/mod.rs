use crate::core::logs::DEFAULT_INITIAL_ROWS;
use crate::core::store::StoreSettings;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::time::{DEFAULT_TIME_FORMAT, is_valid_format, parse_locale};
use chrono::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".gatelog";
const CONFIG_FILE: &str = "gatelog.conf";
const DATABASE_FILE: &str = "gatelog.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_initial_rows")]
    pub initial_rows: usize,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
    #[serde(default = "default_notes_width")]
    pub notes_width: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_initial_rows() -> usize {
    DEFAULT_INITIAL_ROWS
}
fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}
fn default_locale() -> String {
    "en_US".to_string()
}
fn default_show_weekday() -> bool {
    true
}
fn default_notes_width() -> usize {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            initial_rows: default_initial_rows(),
            time_format: default_time_format(),
            locale: default_locale(),
            show_weekday: default_show_weekday(),
            notes_width: default_notes_width(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.gatelog`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Locale for stamps and long dates; unknown names fall back to `en_US`.
    pub fn locale(&self) -> Locale {
        parse_locale(&self.locale).unwrap_or_else(|| {
            warning(format!(
                "Unknown locale '{}', using en_US instead.",
                self.locale
            ));
            Locale::en_US
        })
    }

    /// The subset of settings the log store works with.
    pub fn store_settings(&self) -> StoreSettings {
        let time_format = if is_valid_format(&self.time_format) {
            self.time_format.clone()
        } else {
            warning(format!(
                "Invalid time_format '{}', using '{}' instead.",
                self.time_format, DEFAULT_TIME_FORMAT
            ));
            DEFAULT_TIME_FORMAT.to_string()
        };

        StoreSettings {
            initial_rows: self.initial_rows.max(1),
            time_format,
            locale: self.locale(),
        }
    }

    /// Write a fresh config file pointing at `database`.
    ///
    /// In test mode nothing is written; the returned config is still usable.
    pub fn init_all(database: &str, is_test: bool) -> AppResult<Self> {
        let config = Config {
            database: database.to_string(),
            ..Self::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        Ok(config)
    }
}
