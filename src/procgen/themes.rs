//! Named color palettes for the generated track.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Color palette carried by the track descriptor.
///
/// Every value is a CSS color string the renderer applies verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackColors {
    pub grass1: String,
    pub border1: String,
    pub border2: String,
    pub outborder1: String,
    pub outborder_end1: String,
    pub track_segment1: String,
    pub lane1: String,
    pub lane2: String,
    #[serde(rename = "laneArrow1", alias = "lane_arrow1")]
    pub lane_arrow1: String,
    pub track_segment_end: String,
    pub lane_end: String,
}

impl Default for TrackColors {
    fn default() -> Self {
        TrackColors::prairie()
    }
}

impl TrackColors {
    /// Daylight prairie, the default palette.
    pub fn prairie() -> Self {
        Self {
            grass1: "#699864".to_string(),
            border1: "#e00".to_string(),
            border2: "#fff".to_string(),
            outborder1: "#496a46".to_string(),
            outborder_end1: "#474747".to_string(),
            track_segment1: "#777".to_string(),
            lane1: "#fff".to_string(),
            lane2: "#777".to_string(),
            lane_arrow1: "#00FF00".to_string(),
            track_segment_end: "#000".to_string(),
            lane_end: "#fff".to_string(),
        }
    }

    pub fn desert() -> Self {
        Self {
            grass1: "#c2b280".to_string(),
            border1: "#d64541".to_string(),
            border2: "#f5e7c6".to_string(),
            outborder1: "#a89a6a".to_string(),
            outborder_end1: "#6e6248".to_string(),
            track_segment1: "#8a8178".to_string(),
            lane1: "#f5e7c6".to_string(),
            lane2: "#8a8178".to_string(),
            lane_arrow1: "#ffb347".to_string(),
            track_segment_end: "#2b2620".to_string(),
            lane_end: "#f5e7c6".to_string(),
        }
    }

    pub fn dusk() -> Self {
        Self {
            grass1: "#3f4a5f".to_string(),
            border1: "#b5485d".to_string(),
            border2: "#d8d8e8".to_string(),
            outborder1: "#2e3749".to_string(),
            outborder_end1: "#20262f".to_string(),
            track_segment1: "#555a66".to_string(),
            lane1: "#d8d8e8".to_string(),
            lane2: "#555a66".to_string(),
            lane_arrow1: "#f0c040".to_string(),
            track_segment_end: "#15181d".to_string(),
            lane_end: "#d8d8e8".to_string(),
        }
    }

    pub fn night() -> Self {
        Self {
            grass1: "#1c2b1a".to_string(),
            border1: "#8c1f28".to_string(),
            border2: "#9aa0a6".to_string(),
            outborder1: "#131d12".to_string(),
            outborder_end1: "#0c120b".to_string(),
            track_segment1: "#33363c".to_string(),
            lane1: "#9aa0a6".to_string(),
            lane2: "#33363c".to_string(),
            lane_arrow1: "#3fd96e".to_string(),
            track_segment_end: "#000".to_string(),
            lane_end: "#9aa0a6".to_string(),
        }
    }
}

/// Load all named palettes.
pub fn load_themes() -> HashMap<String, TrackColors> {
    let mut themes = HashMap::new();

    themes.insert("prairie".to_string(), TrackColors::prairie());
    themes.insert("desert".to_string(), TrackColors::desert());
    themes.insert("dusk".to_string(), TrackColors::dusk());
    themes.insert("night".to_string(), TrackColors::night());

    themes
}

/// Get a specific palette by name.
///
/// Returns None if the theme name is not recognized.
pub fn get_theme(name: &str) -> Option<TrackColors> {
    match name.to_lowercase().as_str() {
        "prairie" => Some(TrackColors::prairie()),
        "desert" => Some(TrackColors::desert()),
        "dusk" => Some(TrackColors::dusk()),
        "night" => Some(TrackColors::night()),
        _ => None,
    }
}
