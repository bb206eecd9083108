//! Configuration module for wayfindr
//!
//! Manages application configuration: the catalog registry, search tuning
//! (debounce, result cap) and the site URL used for navigation.
//! Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_result_limit() -> usize {
    crate::search::DEFAULT_RESULT_LIMIT
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WayfindrConfig {
    /// Map of catalog names to their filesystem paths
    #[serde(default)]
    pub catalogs: HashMap<String, PathBuf>,

    /// The default catalog to use when none is specified
    #[serde(default)]
    pub default_catalog: Option<String>,

    /// Quiet period before a search is dispatched, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Cap on rendered matches in the general search
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,

    /// Base URL of the content site; selections open `<site_url><route>`
    #[serde(default)]
    pub site_url: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for WayfindrConfig {
    fn default() -> Self {
        Self {
            catalogs: HashMap::new(),
            default_catalog: None,
            debounce_ms: default_debounce_ms(),
            result_limit: default_result_limit(),
            site_url: None,
            quiet: false,
        }
    }
}

impl WayfindrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("wayfindr").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Add a catalog to the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn add_catalog(&mut self, name: String, path: PathBuf) -> Result<(), ConfigError> {
        self.catalogs.insert(name, path);
        self.save()
    }

    /// Remove a catalog from the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn remove_catalog(&mut self, name: &str) -> Result<Option<PathBuf>, ConfigError> {
        let removed = self.catalogs.remove(name);
        self.save()?;
        Ok(removed)
    }

    /// Get a catalog path by name
    #[must_use]
    pub fn get_catalog(&self, name: &str) -> Option<&PathBuf> {
        self.catalogs.get(name)
    }

    /// List all catalog names
    #[must_use]
    pub fn list_catalogs(&self) -> Vec<&String> {
        self.catalogs.keys().collect()
    }

    /// Set the default catalog
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog name doesn't exist in the
    /// configuration or if saving the configuration fails.
    pub fn set_default_catalog(&mut self, name: String) -> Result<(), ConfigError> {
        if !self.catalogs.contains_key(&name) {
            return Err(ConfigError::Message(format!(
                "Catalog '{name}' does not exist in configuration"
            )));
        }
        self.default_catalog = Some(name);
        self.save()
    }

    /// Get the default catalog name
    #[must_use]
    pub const fn get_default_catalog(&self) -> Option<&String> {
        self.default_catalog.as_ref()
    }

    /// Quiet period as a [`std::time::Duration`]
    #[must_use]
    pub const fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }
}
