use crate::error::{AddrBookError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 5;

/// Keys accepted by [`AddrBookConfig::get`] and [`AddrBookConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["page-size", "data-file"];

/// Configuration for addrbook, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddrBookConfig {
    /// Contacts per page for `list` when no size is given
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Name of the address book file inside the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for AddrBookConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            data_file: default_data_file(),
        }
    }
}

impl AddrBookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrBookError::Io)?;
        let config: AddrBookConfig =
            serde_json::from_str(&content).map_err(AddrBookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddrBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AddrBookError::Serialization)?;
        fs::write(config_path, content).map_err(AddrBookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "data-file" => Some(self.data_file.clone()),
            _ => None,
        }
    }

    /// Sets `key` from its string form. Returns a user-facing message on bad input.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "page-size" => {
                let size: usize = value
                    .parse()
                    .map_err(|_| format!("page-size must be a positive integer, got {}", value))?;
                if size == 0 {
                    return Err("page-size must be a positive integer, got 0".to_string());
                }
                self.page_size = size;
                Ok(())
            }
            "data-file" => {
                let trimmed = value.trim();
                if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
                    return Err(format!(
                        "data-file must be a plain file name, got {:?}",
                        value
                    ));
                }
                self.data_file = trimmed.to_string();
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}
