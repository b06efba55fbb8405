//! Configuration system

pub use serde::{Serialize, Deserialize};

use rapier3d::pipeline::DebugRenderMode;

use crate::foundation::math::Color;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Settings for the physics debug drawer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugDrawConfig {
    /// Name of the unlit material the debug lines are drawn with
    pub material_name: String,

    /// Resource group the generated material lives in
    pub resource_group: String,

    /// Multiplier applied to every line colour, for HDR pipelines. Values below 1 are ignored.
    pub unlit_diffuse_multiplier: f32,

    /// Length factor of contact lines: `normal * distance * contact_normal_scale`
    pub contact_normal_scale: f32,

    /// Colour of contact lines
    pub contact_color: Color,

    /// Initial debug mode, as `DebugRenderMode` bits
    pub debug_mode: u32,

    /// Whether the debug geometry casts shadows
    pub cast_shadows: bool,
}

impl DebugDrawConfig {
    /// Default material name
    pub const DEFAULT_MATERIAL: &'static str = "DebugLinesGenerated";

    /// Default resource group
    pub const DEFAULT_RESOURCE_GROUP: &'static str = "PhysicsBridge";

    /// Debug mode decoded from the stored bits; unknown bits are dropped
    pub fn debug_mode(&self) -> DebugRenderMode {
        DebugRenderMode::from_bits_truncate(self.debug_mode)
    }

    /// Set the stored debug mode
    pub fn with_debug_mode(mut self, mode: DebugRenderMode) -> Self {
        self.debug_mode = mode.bits();
        self
    }
}

impl Default for DebugDrawConfig {
    fn default() -> Self {
        Self {
            material_name: Self::DEFAULT_MATERIAL.to_string(),
            resource_group: Self::DEFAULT_RESOURCE_GROUP.to_string(),
            unlit_diffuse_multiplier: 1.0,
            contact_normal_scale: 20.0,
            contact_color: Color::rgb(1.0, 1.0, 0.0),
            debug_mode: DebugRenderMode::all().bits(),
            cast_shadows: false,
        }
    }
}

impl Config for DebugDrawConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("physics_bridge_{}_{}", std::process::id(), name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_defaults() {
        let config = DebugDrawConfig::default();

        assert_eq!(config.material_name, "DebugLinesGenerated");
        assert_eq!(config.unlit_diffuse_multiplier, 1.0);
        assert_eq!(config.contact_normal_scale, 20.0);
        assert_eq!(config.debug_mode(), DebugRenderMode::all());
        assert!(!config.cast_shadows);
    }

    #[test]
    fn test_toml_partial_file_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "unlit_diffuse_multiplier = 4.0\n").unwrap();

        let config = DebugDrawConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.unlit_diffuse_multiplier, 4.0);
        assert_eq!(config.material_name, DebugDrawConfig::DEFAULT_MATERIAL);
    }

    #[test]
    fn test_save_and_load_ron() {
        let path = temp_path("saved.ron");
        let config = DebugDrawConfig {
            material_name: "Wireframe".to_string(),
            ..DebugDrawConfig::default()
        }
        .with_debug_mode(DebugRenderMode::COLLIDER_SHAPES);

        config.save_to_file(&path).unwrap();
        let loaded = DebugDrawConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
        assert_eq!(loaded.debug_mode(), DebugRenderMode::COLLIDER_SHAPES);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = DebugDrawConfig::default().save_to_file("debug_draw.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
