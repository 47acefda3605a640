//! Engine configuration
//!
//! Settings the host application hands to the engine at startup: window
//! metadata, clear color, the scene file to load, and the log level. The
//! whole structure round-trips through TOML so deployments can override
//! defaults from a file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this configuration
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized
    #[error("serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value the engine cannot work with
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Startup configuration of the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window title
    pub window_title: String,

    /// Initial viewport width in pixels
    pub window_width: u32,

    /// Initial viewport height in pixels
    pub window_height: u32,

    /// Background clear color as RGB in [0, 1]
    pub sky_color: [f32; 3],

    /// Scene file to load at startup
    pub scene_path: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window_title: "OVO Engine".to_string(),
            window_width: 1280,
            window_height: 720,
            sky_color: [0.2, 0.3, 0.4],
            scene_path: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    /// Set the initial viewport size
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the background clear color
    pub fn with_sky_color(mut self, color: [f32; 3]) -> Self {
        self.sky_color = color;
        self
    }

    /// Set the scene file to load at startup
    pub fn with_scene_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scene_path = Some(path.into());
        self
    }

    /// Set the log level filter
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Load a configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a TOML file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Check the configuration for values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(
                "window size must be non-zero".to_string(),
            ));
        }
        if self.sky_color.iter().any(|&c| !(0.0..=1.0).contains(&c)) {
            return Err(ConfigError::Invalid(
                "sky color components must be in [0, 1]".to_string(),
            ));
        }
        const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
        if !LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.scene_path.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = EngineConfig::new()
            .with_title("demo")
            .with_window_size(800, 600)
            .with_sky_color([0.0, 0.0, 0.0])
            .with_scene_path("scenes/room.ovo")
            .with_log_level("debug");
        assert_eq!(config.window_title, "demo");
        assert_eq!((config.window_width, config.window_height), (800, 600));
        assert_eq!(config.scene_path.as_deref(), Some(Path::new("scenes/room.ovo")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let zero_window = EngineConfig::new().with_window_size(0, 600);
        assert!(matches!(
            zero_window.validate(),
            Err(ConfigError::Invalid(_))
        ));

        let bad_color = EngineConfig::new().with_sky_color([1.5, 0.0, 0.0]);
        assert!(bad_color.validate().is_err());

        let bad_level = EngineConfig::new().with_log_level("loud");
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::new()
            .with_title("round trip")
            .with_scene_path("a.ovo");
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: EngineConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: EngineConfig = toml::from_str("window_title = \"only a title\"").unwrap();
        assert_eq!(parsed.window_title, "only a title");
        assert_eq!(parsed.window_width, 1280);
        assert_eq!(parsed.log_level, "info");
    }
}
