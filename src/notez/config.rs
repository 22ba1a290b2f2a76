use crate::clock::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use crate::error::{NotezError, Result};
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for notez, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotezConfig {
    /// Key of the persisted note entry (file stem for the file store)
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// strftime pattern used for note dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for NotezConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            date_format: default_date_format(),
        }
    }
}

pub const CONFIG_KEYS: &[&str] = &["storage-key", "date-format"];

impl NotezConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotezError::Io)?;
        let config: NotezConfig =
            serde_json::from_str(&content).map_err(NotezError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotezError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotezError::Serialization)?;
        fs::write(config_path, content).map_err(NotezError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "date-format" => Some(self.date_format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                if !is_valid_storage_key(value) {
                    return Err(NotezError::Config(format!(
                        "Invalid storage key '{}': use letters, digits, '-' or '_'",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "date-format" => {
                if !is_valid_date_format(value) {
                    return Err(NotezError::Config(format!(
                        "Invalid date format '{}'",
                        value
                    )));
                }
                self.date_format = value.to_string();
            }
            _ => {
                return Err(NotezError::Config(format!(
                    "Unknown config key: {} (expected one of: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

pub fn is_valid_storage_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
