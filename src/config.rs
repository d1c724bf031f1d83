//! Generator configuration loaded from TOML.

use crate::error::GenError;
use crate::layout::{validate_pool, SpritePoolEntry};
use crate::procgen::themes::{self, TrackColors};
use crate::track::{LaneConfig, RenderParams, VehicleDefaults};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub vehicle: VehicleDefaults,
    #[serde(default)]
    pub render: RenderParams,
    #[serde(default)]
    pub track: TrackSettings,
    #[serde(default)]
    pub colors: ColorSettings,
    #[serde(default)]
    pub sprites: SpriteSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSettings {
    /// Zone count used by the random and straight modes.
    pub num_zones: usize,
    /// Segments per zone; constant across the whole track.
    pub zone_size: usize,
    pub track_segment_size: u32,
    pub num_lanes: u32,
    pub lane_width: f32,
    pub number_of_segment_per_color: u32,
    /// Place an obstacle every N segments of a zone; 0 disables obstacles.
    pub obstacle_per_iteration: usize,
    /// Plan layout groups back to front (historical variant).
    pub reverse_layout: bool,
}

impl Default for TrackSettings {
    fn default() -> Self {
        Self {
            num_zones: 12,
            zone_size: 250,
            track_segment_size: 5,
            num_lanes: 3,
            lane_width: 0.02,
            number_of_segment_per_color: 4,
            obstacle_per_iteration: 50,
            reverse_layout: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Named palette; see `procgen::themes`.
    pub theme: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            theme: "prairie".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteSettings {
    /// Decoration pool for landscape fill.
    #[serde(default)]
    pub objects: Vec<SpritePoolEntry>,
    /// Obstacle pool sampled at the placement cadence.
    #[serde(default)]
    pub obstacle: Vec<SpritePoolEntry>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vehicle: VehicleDefaults::default(),
            render: RenderParams::default(),
            track: TrackSettings::default(),
            colors: ColorSettings::default(),
            sprites: SpriteSettings::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GenError> {
        let contents = fs::read_to_string(path)?;
        let config: GeneratorConfig =
            toml::from_str(&contents).map_err(|e| GenError::Parse(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}, using defaults", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if self.track.zone_size < 1 {
            return Err(GenError::InvalidConfig(
                "track.zone_size must be >= 1".to_string(),
            ));
        }
        if self.track.num_zones < 1 {
            return Err(GenError::InvalidConfig(
                "track.num_zones must be >= 1".to_string(),
            ));
        }
        if themes::get_theme(&self.colors.theme).is_none() {
            return Err(GenError::InvalidConfig(format!(
                "unknown color theme '{}'",
                self.colors.theme
            )));
        }
        validate_pool("objects", &self.sprites.objects)?;
        validate_pool("obstacle", &self.sprites.obstacle)?;
        Ok(())
    }

    /// Resolve the configured theme name to a palette.
    pub fn track_colors(&self) -> Result<TrackColors, GenError> {
        themes::get_theme(&self.colors.theme).ok_or_else(|| {
            GenError::InvalidConfig(format!("unknown color theme '{}'", self.colors.theme))
        })
    }

    pub fn lane_config(&self) -> LaneConfig {
        LaneConfig {
            lane_width: self.track.lane_width,
            num_lanes: self.track.num_lanes,
            number_of_segment_per_color: self.track.number_of_segment_per_color,
            track_segment_size: self.track.track_segment_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.track.num_zones, 12);
        assert_eq!(config.track.zone_size, 250);
        assert_eq!(config.track.obstacle_per_iteration, 50);
        assert!(!config.track.reverse_layout);
        assert_eq!(config.colors.theme, "prairie");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = GeneratorConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("zone_size"));
        assert!(toml_str.contains("obstacle_per_iteration"));
        assert!(toml_str.contains("theme"));
    }

    #[test]
    fn test_partial_file_uses_section_defaults() {
        let config: GeneratorConfig = toml::from_str(
            "[track]\nnum_zones = 3\nzone_size = 40\ntrack_segment_size = 5\nnum_lanes = 3\nlane_width = 0.02\nnumber_of_segment_per_color = 4\nobstacle_per_iteration = 10\nreverse_layout = true\n",
        )
        .unwrap();

        assert_eq!(config.track.num_zones, 3);
        assert!(config.track.reverse_layout);
        assert_eq!(config.vehicle.max_speed, 15.0);
        assert_eq!(config.colors.theme, "prairie");
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut config = GeneratorConfig::default();
        config.colors.theme = "volcano".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GenError::InvalidConfig(msg) if msg.contains("volcano")));
    }

    #[test]
    fn test_zero_zone_size_rejected() {
        let mut config = GeneratorConfig::default();
        config.track.zone_size = 0;
        assert!(matches!(
            config.validate(),
            Err(GenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_empty_pool_positions_rejected() {
        let mut config = GeneratorConfig::default();
        config.sprites.objects.push(SpritePoolEntry {
            filename: "tree.png".to_string(),
            scale: 1.0,
            positions_x: vec![],
        });
        assert!(matches!(config.validate(), Err(GenError::InvalidLayout(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trackgen.toml");
        std::fs::write(
            &path,
            "[colors]\ntheme = \"night\"\n\n[[sprites.objects]]\nfilename = \"tree.png\"\nscale = 1.0\npositions_x = [-1.5, 1.7]\n",
        )
        .unwrap();

        let config = GeneratorConfig::load(&path).unwrap();
        assert_eq!(config.colors.theme, "night");
        assert_eq!(config.sprites.objects.len(), 1);
        assert_eq!(config.track.zone_size, 250);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = GeneratorConfig::load_or_default("/nonexistent/trackgen.toml");
        assert_eq!(config.track.num_zones, 12);
    }
}
