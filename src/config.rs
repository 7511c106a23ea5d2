use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use wellmart_core::DEFAULT_CATALOG_URL;

/// Products fetched per listing when nothing is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory holding one JSON file per durable slot
    pub data_dir: ConfigValue<PathBuf>,
    /// Product catalog base URL
    pub catalog_url: ConfigValue<String>,
    /// Products fetched by `shop list` unless overridden
    pub page_size: ConfigValue<u32>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    catalog: CatalogSection,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct CatalogSection {
    base_url: Option<String>,
    page_size: Option<u32>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut data_dir = ConfigValue::new(Self::default_data_dir(), ConfigSource::Default);
        let mut catalog_url =
            ConfigValue::new(DEFAULT_CATALOG_URL.to_string(), ConfigSource::Default);
        let mut page_size = ConfigValue::new(DEFAULT_PAGE_SIZE, ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(dir) = file_config.data_dir {
                // Relative paths are relative to the config file
                let resolved = if dir.is_relative() {
                    path.parent().map(|p| p.join(&dir)).unwrap_or(dir)
                } else {
                    dir
                };
                data_dir = ConfigValue::new(resolved, ConfigSource::File);
            }
            if let Some(url) = file_config.catalog.base_url {
                catalog_url = ConfigValue::new(url, ConfigSource::File);
            }
            if let Some(size) = file_config.catalog.page_size {
                page_size = ConfigValue::new(size, ConfigSource::File);
            }
        }

        if let Ok(dir) = std::env::var("WELLMART_DATA_DIR") {
            data_dir = ConfigValue::new(PathBuf::from(dir), ConfigSource::Environment);
        }
        if let Ok(url) = std::env::var("WELLMART_CATALOG_URL") {
            catalog_url = ConfigValue::new(url, ConfigSource::Environment);
        }

        tracing::debug!(
            data_dir = %data_dir.value.display(),
            catalog_url = %catalog_url.value,
            "configuration loaded"
        );

        Ok(Self {
            data_dir,
            catalog_url,
            page_size,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/wellmart/
    /// - macOS: ~/Library/Application Support/wellmart/
    /// - Windows: %APPDATA%/wellmart/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wellmart")
    }

    /// Default data directory (platform-specific):
    /// - Linux: ~/.local/share/wellmart/
    /// - macOS: ~/Library/Application Support/wellmart/
    /// - Windows: %APPDATA%/wellmart/
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wellmart")
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
