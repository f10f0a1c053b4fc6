//! Configuration file support for boxtext.
//!
//! This module provides serialization and deserialization of editor settings.
//! Every section is optional in the file; missing sections and fields take
//! their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keybindings::KeyBindings;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Pointer editing parameters
    #[serde(default)]
    pub editing: EditingConfig,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindings,

    /// Highlight colours
    #[serde(default)]
    pub render: RenderConfig,
}

/// User preferences section of the config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Pointer editing section of the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingConfig {
    /// Vertical offset of the display surface inside the shell window, in
    /// display pixels. Subtracted from pointer y before mapping to the image.
    pub chrome_offset: i32,

    /// Handle grab radius in display pixels
    pub handle_tolerance_px: i32,

    /// Lower bound of the grab radius in image pixels
    pub min_handle_tolerance: i32,
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            chrome_offset: 0,
            handle_tolerance_px: 3,
            min_handle_tolerance: 3,
        }
    }
}

/// Highlight colours as RGBA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fill of the selected shape
    pub selected_color: [u8; 4],
    /// Fill of every other shape
    pub neutral_color: [u8; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            selected_color: [200, 200, 10, 30],
            neutral_color: [120, 10, 120, 30],
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            preferences: UserPreferences::default(),
            editing: EditingConfig::default(),
            keybindings: KeyBindings::default(),
            render: RenderConfig::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the config file, creating parent directories if needed.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get the default config filename.
    pub fn default_filename() -> &'static str {
        "boxtext-config.json"
    }

    /// Get the default config file path for auto-load/save.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("boxtext").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("boxtext")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_json_roundtrip() {
        let mut config = EditorConfig::new();
        config.preferences.log_level = LogLevel::Debug;
        config.editing.chrome_offset = 25;
        config.keybindings.convert = KeyCode::P;
        config.render.selected_color = [1, 2, 3, 4];

        let json = config.to_json().unwrap();
        let restored = EditorConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_newer_version_rejected() {
        let json = format!(r#"{{"version": {}}}"#, CONFIG_VERSION + 1);
        let err = EditorConfig::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 2,
                supported_version: 1
            }
        ));
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = EditorConfig::from_json(r#"{"version": 1, "editing": {"chrome_offset": 12}}"#)
            .unwrap();
        assert_eq!(config.editing.chrome_offset, 12);
        assert_eq!(config.editing.handle_tolerance_px, 3);
        assert_eq!(config.editing.min_handle_tolerance, 3);
        assert_eq!(config.keybindings, KeyBindings::default());
        assert_eq!(config.render, RenderConfig::default());
        assert_eq!(config.preferences.log_level, LogLevel::Info);
    }

    #[test]
    fn test_missing_version_is_a_parse_error() {
        assert!(matches!(
            EditorConfig::from_json("{}"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_log_level_lowercase() {
        let config =
            EditorConfig::from_json(r#"{"version": 1, "preferences": {"log_level": "trace"}}"#)
                .unwrap();
        assert_eq!(
            config.preferences.log_level.to_level_filter(),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = EditorConfig::default();
        config.editing.handle_tolerance_px = 6;
        config.save_to_path(&path).unwrap();

        let loaded = EditorConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = EditorConfig::load_from_path(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
