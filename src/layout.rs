//! Layout and sprite-pool input descriptors.

use crate::error::GenError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Elevation profile of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Flat,
    Up,
    Down,
}

impl Default for Profile {
    fn default() -> Self {
        Profile::Flat
    }
}

/// Curvature direction of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topography {
    Straight,
    Left,
    Right,
}

impl Default for Topography {
    fn default() -> Self {
        Topography::Straight
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopographySpec {
    pub name: Topography,
    /// Declared curvature magnitude; scaled by a uniform draw per zone.
    #[serde(default)]
    pub curvature: i32,
}

/// Explicitly scheduled sprite inside one zone of a layout group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSignal {
    pub filename: String,
    pub scale: f32,
    /// Target zone index within the group's repeat, 1-based.
    pub zone: usize,
    #[serde(rename = "posX", alias = "pos_x")]
    pub pos_x: f32,
    /// Segment offset into the target zone.
    #[serde(rename = "zoneDistance", alias = "zone_distance")]
    pub zone_distance: usize,
}

/// One group of a layout description: a topography/profile pair repeated
/// `num_zones` times, with optional traffic signals targeting specific zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub topography: TopographySpec,
    pub profile: Profile,
    #[serde(rename = "numZones", alias = "num_zones")]
    pub num_zones: usize,
    #[serde(rename = "trafficSignals", alias = "traffic_signals", default)]
    pub traffic_signals: Vec<TrafficSignal>,
}

/// One entry of a decoration or obstacle pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpritePoolEntry {
    pub filename: String,
    pub scale: f32,
    #[serde(rename = "positionsX", alias = "positions_x")]
    pub positions_x: Vec<f32>,
}

pub fn load_layout_from_string(content: &str) -> Result<Vec<ZoneSpec>, GenError> {
    let specs: Vec<ZoneSpec> = if content.trim_start().starts_with('[') {
        serde_json::from_str(content)
            .map_err(|e| GenError::Parse(format!("JSON parse error: {}", e)))?
    } else {
        serde_yaml::from_str(content)
            .map_err(|e| GenError::Parse(format!("YAML parse error: {}", e)))?
    };

    validate_layout(&specs)?;
    Ok(specs)
}

/// Load a layout description from disk (JSON or YAML).
pub async fn load_layout_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ZoneSpec>, GenError> {
    let content = tokio::fs::read_to_string(path).await?;
    load_layout_from_string(&content)
}

/// Check the structural invariants of a layout description.
///
/// A group must repeat at least once and every signal must target a zone
/// inside its group's repeat. Signal `zone_distance` is intentionally not
/// checked here: offsets outside the zone are inert at scheduling time.
pub fn validate_layout(specs: &[ZoneSpec]) -> Result<(), GenError> {
    for (group, spec) in specs.iter().enumerate() {
        if spec.num_zones < 1 {
            return Err(GenError::InvalidLayout(format!(
                "zone group {}: numZones must be >= 1, got {}",
                group, spec.num_zones
            )));
        }

        for signal in &spec.traffic_signals {
            if signal.zone < 1 || signal.zone > spec.num_zones {
                return Err(GenError::InvalidLayout(format!(
                    "zone group {}: traffic signal '{}' targets zone {} outside [1, {}]",
                    group, signal.filename, signal.zone, spec.num_zones
                )));
            }
        }
    }

    Ok(())
}

/// Check that every pool entry declares at least one lateral position.
pub fn validate_pool(name: &str, pool: &[SpritePoolEntry]) -> Result<(), GenError> {
    for entry in pool {
        if entry.positions_x.is_empty() {
            return Err(GenError::InvalidLayout(format!(
                "{} pool entry '{}' declares no positionsX",
                name, entry.filename
            )));
        }
    }
    Ok(())
}
