//! Segment synthesis: expands planned zones into fine-grained segments.

use crate::procgen::planner::Zone;
use crate::track::Segment;
use std::f32::consts::{FRAC_PI_2, PI};

/// Expand each zone into `zone_size` segments, easing height and curvature
/// from the running accumulation toward the zone's target.
///
/// The accumulators advance by the full zone delta exactly once per zone, so
/// drift never compounds within a zone and the first segment of every zone
/// sits exactly on the accumulation at that zone's start. Sprites are
/// attached in a later pass.
pub fn synthesize(zones: &[Zone], zone_size: usize) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(zones.len() * zone_size);
    let mut height_acc = 0.0f32;
    let mut curve_acc = 0.0f32;

    for zone in zones {
        for i in 0..zone_size {
            let blend = ease(i, zone_size);
            segments.push(Segment {
                height: height_acc + zone.height_delta * blend,
                curve: curve_acc + zone.curve_delta * blend,
                sprite: None,
            });
        }
        height_acc += zone.height_delta;
        curve_acc += zone.curve_delta;
    }

    segments
}

/// Half-sine ramp: 0 at the zone entry, approaching 1 at the zone exit.
fn ease(i: usize, zone_size: usize) -> f32 {
    0.5 * (1.0 + ((i as f32 / zone_size as f32) * PI - FRAC_PI_2).sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Profile, Topography};

    fn zone(height_delta: f32, curve_delta: f32) -> Zone {
        Zone {
            profile: Profile::Flat,
            topography: Topography::Straight,
            height_delta,
            curve_delta,
            signals: Vec::new(),
        }
    }

    #[test]
    fn test_segment_count() {
        let zones = vec![zone(100.0, 0.0), zone(-50.0, 20.0), zone(0.0, 0.0)];
        assert_eq!(synthesize(&zones, 250).len(), 750);
    }

    #[test]
    fn test_half_sine_values() {
        // One zone of 900 over 4 segments walks the half-sine ramp:
        // factors (1 + sin(i/4*pi - pi/2)) / 2 for i = 0..3
        let segments = synthesize(&[zone(900.0, 0.0)], 4);
        let expected = [0.0, 131.802, 450.0, 768.198];

        for (segment, want) in segments.iter().zip(expected) {
            assert!(
                (segment.height - want).abs() < 0.01,
                "expected {}, got {}",
                want,
                segment.height
            );
        }
    }

    #[test]
    fn test_zone_boundary_continuity() {
        let zones = vec![zone(900.0, -300.0), zone(-200.0, 100.0), zone(40.0, 0.0)];
        let zone_size = 16;
        let segments = synthesize(&zones, zone_size);

        let mut height_acc = 0.0f32;
        let mut curve_acc = 0.0f32;
        for (index, z) in zones.iter().enumerate() {
            let first = &segments[index * zone_size];
            assert_eq!(first.height, height_acc);
            assert_eq!(first.curve, curve_acc);
            height_acc += z.height_delta;
            curve_acc += z.curve_delta;
        }
    }

    #[test]
    fn test_accumulation_applied_once_per_zone() {
        // A flat zone after a climb sits exactly on the full accumulated height
        let segments = synthesize(&[zone(900.0, 0.0), zone(0.0, 0.0)], 4);
        for segment in &segments[4..] {
            assert_eq!(segment.height, 900.0);
        }
    }

    #[test]
    fn test_flat_zones_stay_zero() {
        let segments = synthesize(&vec![zone(0.0, 0.0); 5], 32);
        assert!(segments.iter().all(|s| s.height == 0.0 && s.curve == 0.0));
    }

    #[test]
    fn test_curve_eases_like_height() {
        let segments = synthesize(&[zone(0.0, -600.0)], 4);
        let expected = [0.0, -87.868, -300.0, -512.132];

        for (segment, want) in segments.iter().zip(expected) {
            assert!(
                (segment.curve - want).abs() < 0.01,
                "expected {}, got {}",
                want,
                segment.curve
            );
        }
    }

    #[test]
    fn test_no_sprites_attached() {
        let segments = synthesize(&[zone(100.0, 100.0)], 8);
        assert!(segments.iter().all(|s| s.sprite.is_none()));
    }
}
