//! Renderer-facing track data model and final assembly.

use crate::catalog::SpriteHandle;
use crate::error::GenError;
use crate::procgen::themes::TrackColors;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sprite attached to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteDecoration {
    pub handle: SpriteHandle,
    /// Signed lateral offset, roughly [-2, 2]; 0 is track center, the sign
    /// selects the side.
    #[serde(rename = "relativePositionX")]
    pub relative_position_x: f32,
    /// True when placed on the drivable surface (collidable).
    #[serde(rename = "isObstacle")]
    pub is_obstacle: bool,
    pub scale: f32,
}

/// The atomic unit of the generated track, in track order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub height: f32,
    pub curve: f32,
    /// Serialized as the decoration object, or literal `false` when absent.
    #[serde(serialize_with = "sprite_to_wire", deserialize_with = "sprite_from_wire")]
    pub sprite: Option<SpriteDecoration>,
}

fn sprite_to_wire<S: Serializer>(
    sprite: &Option<SpriteDecoration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match sprite {
        Some(decoration) => decoration.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

fn sprite_from_wire<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<SpriteDecoration>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Flag(bool),
        Decoration(SpriteDecoration),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Flag(false) => Ok(None),
        Wire::Flag(true) => Err(serde::de::Error::custom(
            "segment sprite must be a decoration object or false",
        )),
        Wire::Decoration(decoration) => Ok(Some(decoration)),
    }
}

/// Vehicle defaults handed to the renderer's simulation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDefaults {
    pub position: f32,
    pub speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub breaking: f32,
    pub turning: f32,
    pub posx: f32,
    #[serde(rename = "maxSpeed", alias = "max_speed")]
    pub max_speed: f32,
}

impl Default for VehicleDefaults {
    fn default() -> Self {
        Self {
            position: 10.0,
            speed: 0.0,
            acceleration: 0.05,
            deceleration: 0.3,
            breaking: 0.6,
            turning: 5.0,
            posx: 0.0,
            max_speed: 15.0,
        }
    }
}

/// Pseudo-3D camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderParams {
    #[serde(rename = "depthOfField", alias = "depth_of_field")]
    pub depth_of_field: f32,
    pub camera_distance: f32,
    pub camera_height: f32,
    pub width: u32,
    pub height: u32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            depth_of_field: 140.0,
            camera_distance: 250.0,
            camera_height: 100.0,
            width: 320,
            height: 240,
        }
    }
}

/// Lane geometry and segment coloring cadence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneConfig {
    pub lane_width: f32,
    pub num_lanes: u32,
    pub number_of_segment_per_color: u32,
    pub track_segment_size: u32,
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            lane_width: 0.02,
            num_lanes: 3,
            number_of_segment_per_color: 4,
            track_segment_size: 5,
        }
    }
}

/// Zone parameterization carried in the descriptor.
///
/// After assembly `num_zones` holds the total segment count, not the planned
/// zone count; `zone_size` is the per-zone segment density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackParam {
    #[serde(rename = "numZones")]
    pub num_zones: usize,
    #[serde(rename = "zoneSize")]
    pub zone_size: usize,
}

/// The sole artifact handed to the external renderer.
///
/// Field names form a stable schema contract; the caller owns the descriptor
/// once returned and the generator retains nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDescriptor {
    pub controllable_vehicle: VehicleDefaults,
    #[serde(rename = "laneWidth")]
    pub lane_width: f32,
    #[serde(rename = "numLanes")]
    pub num_lanes: u32,
    #[serde(rename = "numberOfSegmentPerColor")]
    pub number_of_segment_per_color: u32,
    pub render: RenderParams,
    #[serde(rename = "trackParam")]
    pub track_param: TrackParam,
    #[serde(rename = "trackSegmentSize")]
    pub track_segment_size: u32,
    #[serde(rename = "trackColors")]
    pub track_colors: TrackColors,
    pub track: Vec<Segment>,
}

/// Aggregate the generated segments with vehicle, camera, lane and color
/// parameters into the final descriptor.
///
/// The only validation is the length invariant between planned zones and
/// synthesized segments; everything upstream has already been checked.
pub fn assemble(
    vehicle: VehicleDefaults,
    render: RenderParams,
    lanes: &LaneConfig,
    colors: TrackColors,
    segments: Vec<Segment>,
    planned_zones: usize,
    zone_size: usize,
) -> Result<TrackDescriptor, GenError> {
    let expected = planned_zones * zone_size;
    if segments.len() != expected {
        return Err(GenError::InconsistentTrackLength {
            expected,
            actual: segments.len(),
        });
    }

    Ok(TrackDescriptor {
        controllable_vehicle: vehicle,
        lane_width: lanes.lane_width,
        num_lanes: lanes.num_lanes,
        number_of_segment_per_color: lanes.number_of_segment_per_color,
        render,
        track_param: TrackParam {
            num_zones: segments.len(),
            zone_size,
        },
        track_segment_size: lanes.track_segment_size,
        track_colors: colors,
        track: segments,
    })
}
