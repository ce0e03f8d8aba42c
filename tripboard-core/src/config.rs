//! # Configuration management for Tripboard Core
//!
//! Settings are read from a TOML file in the platform config directory
//! (`<config_dir>/tripboard/config.toml`) or from a file given on the
//! command line. Anything the file omits takes its default value, and
//! [`Config::load_or_default`] falls back to the defaults entirely when the
//! file is missing or invalid.

use crate::store::DEFAULT_LAYOUT_KEY;
use crate::{config_error, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Smallest window the dashboard accepts.
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

const ALLOWED_THEMES: [&str; 2] = ["dark", "light"];
const ALLOWED_LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration structure for Tripboard.
///
/// # Example
///
/// ```rust
/// use tripboard_core::Config;
///
/// let config = Config::default();
/// assert_eq!(config.ui.theme, "dark");
/// assert_eq!(config.storage.key, "myhome_layout_v1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Layout persistence settings
    pub storage: StorageConfig,
    /// User interface settings
    pub ui: UiConfig,
    /// Advanced settings
    pub advanced: AdvancedConfig,
}

/// Where and whether the layout is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Whether layout changes are written to disk
    pub enabled: bool,
    /// Directory holding the layout slot, platform data dir when unset
    pub directory: Option<PathBuf>,
    /// Slot name
    pub key: String,
}

/// User interface configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// UI theme name
    pub theme: String,
    /// Window width on startup
    pub window_width: f32,
    /// Window height on startup
    pub window_height: f32,
    /// Width of the splitter handles in points
    pub splitter_thickness: f32,
    /// Whether the panel control bar is shown
    pub show_controls: bool,
}

/// Advanced settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedConfig {
    /// Enable debug logging and UI overlays
    pub debug_mode: bool,
    /// Log level
    pub log_level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            directory: None,
            key: DEFAULT_LAYOUT_KEY.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            window_width: 1200.0,
            window_height: 800.0,
            splitter_thickness: 8.0,
            show_controls: true,
        }
    }
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            debug_mode: false,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location or fall back to defaults.
    ///
    /// When no usable file exists the defaults are written back so the user
    /// has a file to edit.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tripboard_core::Config;
    ///
    /// let config = Config::load_or_default();
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Using default configuration: {}", e);
                let config = Self::default();
                let _ = config.save();
                config
            }
        }
    }

    /// Load configuration from the default config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        Self::load_from_file(&config_path)
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tripboard_core::Config;
    /// use std::path::Path;
    ///
    /// let config = Config::load_from_file(Path::new("tripboard.toml"))?;
    /// # Ok::<(), tripboard_core::Error>(())
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path()?;
        self.save_to_file(&config_path)
    }

    /// Save configuration to a specific file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the file cannot
    /// be written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| config_error!("Failed to serialize config: {}", e))?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard_core::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.ui.theme = "sepia".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.storage.key.trim().is_empty() {
            return Err(Error::validation(
                "storage.key",
                "Layout key must not be empty",
            ));
        }

        if self.ui.window_width < MIN_WINDOW_WIDTH || self.ui.window_height < MIN_WINDOW_HEIGHT {
            return Err(Error::validation(
                "ui.window_size",
                "Window size must be at least 400x300",
            ));
        }

        if !(2.0..=32.0).contains(&self.ui.splitter_thickness) {
            return Err(Error::validation(
                "ui.splitter_thickness",
                "Splitter thickness must be between 2 and 32",
            ));
        }

        if !ALLOWED_THEMES.contains(&self.ui.theme.as_str()) {
            return Err(Error::validation(
                "ui.theme",
                "Theme must be one of: dark, light",
            ));
        }

        if !ALLOWED_LOG_LEVELS.contains(&self.advanced.log_level.as_str()) {
            return Err(Error::validation(
                "advanced.log_level",
                "Log level must be one of: error, warn, info, debug, trace",
            ));
        }

        Ok(())
    }

    /// Get the default configuration file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("tripboard"))
            .ok_or_else(|| Error::config("Could not determine config directory"))
    }

    /// Directory the layout slot lives in.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the platform has
    /// no data directory.
    pub fn storage_directory(&self) -> Result<PathBuf> {
        if let Some(directory) = &self.storage.directory {
            return Ok(directory.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("tripboard"))
            .ok_or_else(|| Error::config("Could not determine data directory"))
    }

    /// Reset configuration to defaults.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.storage.enabled);
        assert_eq!(config.storage.directory, None);
        assert_eq!(config.storage.key, DEFAULT_LAYOUT_KEY);
        assert_eq!(config.ui.window_width, 1200.0);
        assert_eq!(config.ui.splitter_thickness, 8.0);
        assert_eq!(config.advanced.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_errors() {
        let mut config = Config::default();
        config.storage.key = "  ".to_string();
        assert!(config.validate().unwrap_err().is_validation());

        config = Config::default();
        config.ui.window_width = 200.0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.ui.splitter_thickness = 1.0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.ui.splitter_thickness = 40.0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.advanced.log_level = "invalid".to_string();
        assert!(config.validate().is_err());

        config = Config::default();
        config.ui.theme = "light".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [ui]
            theme = "light"

            [storage]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.window_height, 800.0);
        assert!(!config.storage.enabled);
        assert_eq!(config.storage.key, DEFAULT_LAYOUT_KEY);
        assert_eq!(config.advanced, AdvancedConfig::default());
    }

    #[test]
    fn test_config_file_operations() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.storage.directory = Some(temp_dir.path().join("data"));
        config.ui.show_controls = false;

        config.save_to_file(&config_path).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_file(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        std::fs::write(&config_path, "[ui]\nwindow_width = 10.0\n").unwrap();
        assert!(Config::load_from_file(&config_path).unwrap_err().is_validation());

        std::fs::write(&config_path, "[ui\n").unwrap();
        assert_eq!(Config::load_from_file(&config_path).unwrap_err().category(), "TOML");

        let missing = Config::load_from_file(temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(missing.is_io());
    }

    #[test]
    fn test_storage_directory() {
        let mut config = Config::default();
        config.storage.directory = Some(PathBuf::from("/tmp/tripboard-test"));
        assert_eq!(
            config.storage_directory().unwrap(),
            PathBuf::from("/tmp/tripboard-test")
        );
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = Config::default();
        config.ui.theme = "light".to_string();
        config.storage.enabled = false;

        config.reset_to_defaults();
        assert_eq!(config, Config::default());
    }
}
