//! Configuration management for the chakra overlay application

use crate::{
    constants::{
        DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_MARKER_SIZE,
        DEFAULT_SCENE_DEPTH_SCALE, DEFAULT_SCENE_WIDTH,
    },
    projector::ProjectorConfig,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display geometry configuration
    pub display: DisplayConfig,

    /// Marker configuration
    pub marker: MarkerConfig,

    /// 3D scene mirror configuration
    pub scene: SceneConfig,
}

/// Display geometry of the rendered video element
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rendered video width in pixels
    pub width: f32,

    /// Rendered video height in pixels
    pub height: f32,
}

/// Marker parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Marker glyph edge length in pixels
    pub size: f32,

    /// Project the crown chakra (7 markers instead of 6)
    pub crown_enabled: bool,
}

/// 3D scene mirror parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Mirror marker positions into the 3D scene output
    pub enabled: bool,

    /// World-space width of the video frame
    pub width: f32,

    /// Depth scale applied to landmark z values
    pub depth_scale: f32,

    /// Path of the JSON-lines file receiving world positions
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            marker: MarkerConfig::default(),
            scene: SceneConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_MARKER_SIZE,
            crown_enabled: true,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            width: DEFAULT_SCENE_WIDTH,
            depth_scale: DEFAULT_SCENE_DEPTH_SCALE,
            output: PathBuf::from("chakra_scene.jsonl"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Projection geometry derived from this configuration
    pub const fn projector_config(&self) -> ProjectorConfig {
        ProjectorConfig {
            display_width: self.display.width,
            display_height: self.display.height,
            marker_size: self.marker.size,
            crown_enabled: self.marker.crown_enabled,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.display.width <= 0.0 || self.display.height <= 0.0 {
            return Err(Error::ConfigError(
                "Display dimensions must be positive".to_string(),
            ));
        }

        if self.marker.size <= 0.0 {
            return Err(Error::ConfigError("Marker size must be positive".to_string()));
        }
        if self.marker.size >= self.display.width.min(self.display.height) {
            return Err(Error::ConfigError(
                "Marker size must be smaller than the display".to_string(),
            ));
        }

        if self.scene.width <= 0.0 {
            return Err(Error::ConfigError("Scene width must be positive".to_string()));
        }
        if self.scene.depth_scale <= 0.0 {
            return Err(Error::ConfigError(
                "Scene depth scale must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Chakra Overlay Configuration

# Rendered video element geometry
display:
  width: 480.0
  height: 360.0

# Marker parameters
marker:
  size: 20.0
  crown_enabled: true

# 3D scene mirror
scene:
  enabled: false
  width: 10.0
  depth_scale: 5.0
  output: "chakra_scene.jsonl"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.display.width, 480.0);
        assert!(config.marker.crown_enabled);
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let mut config = Config::default();
        config.display.width = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.marker.size = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.scene.depth_scale = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_projector_config_mapping() {
        let mut config = Config::default();
        config.marker.crown_enabled = false;

        let projector = config.projector_config();
        assert_eq!(projector.chakra_count(), 6);
        assert_eq!(projector.display_width, config.display.width);
    }
}
