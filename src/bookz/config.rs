use crate::error::{BookzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "book_data.json";

/// Configuration for bookz, stored as config.json next to the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookzConfig {
    /// File name of the catalog document inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for BookzConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl BookzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookzError::Io)?;
        let config: BookzConfig =
            serde_json::from_str(&content).map_err(BookzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookzError::Serialization)?;
        fs::write(config_path, content).map_err(BookzError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BookzConfig::default();
        assert_eq!(config.data_file, "book_data.json");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = BookzConfig::load(temp.path()).unwrap();
        assert_eq!(config, BookzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();

        let config = BookzConfig {
            data_file: "catalog.json".to_string(),
        };
        config.save(temp.path()).unwrap();

        let loaded = BookzConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.data_file, "catalog.json");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = BookzConfig {
            data_file: "shelf.json".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: BookzConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
