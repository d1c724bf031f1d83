//! Sprite placement: traffic signals, obstacle cadence, decoration fill.

use crate::catalog::SpriteCatalog;
use crate::error::GenError;
use crate::layout::{validate_pool, SpritePoolEntry};
use crate::procgen::planner::Zone;
use crate::track::{Segment, SpriteDecoration};
use rand::Rng;

/// Decoration and obstacle pools consulted by the scheduler.
#[derive(Debug, Clone, Copy)]
pub struct SpritePools<'a> {
    pub objects: &'a [SpritePoolEntry],
    pub obstacle: &'a [SpritePoolEntry],
}

/// Attach sprites to the synthesized segments.
///
/// Per segment index `i` within each zone, in priority order: an unplaced
/// traffic signal scheduled at `i` (placed exactly once per run, never as an
/// obstacle); the obstacle pool at the fixed cadence; the decoration pool
/// for everything else. Pools are sampled independently per placement, so
/// repeats and visual clustering are expected. A cadence of 0 disables
/// obstacle placement. Any sprite name missing from the catalog aborts the
/// call; the segments slice must be considered garbage after an error.
pub fn decorate<R: Rng>(
    segments: &mut [Segment],
    zones: &[Zone],
    zone_size: usize,
    pools: &SpritePools<'_>,
    obstacle_cadence: usize,
    catalog: &SpriteCatalog,
    rng: &mut R,
) -> Result<(), GenError> {
    validate_pool("objects", pools.objects)?;
    validate_pool("obstacle", pools.obstacle)?;
    debug_assert_eq!(segments.len(), zones.len() * zone_size);

    for (zone_index, zone) in zones.iter().enumerate() {
        let mut placed = vec![false; zone.signals.len()];

        for i in 0..zone_size {
            let segment = &mut segments[zone_index * zone_size + i];

            let signal = zone
                .signals
                .iter()
                .enumerate()
                .find(|(slot, signal)| !placed[*slot] && signal.zone_distance == i);
            if let Some((slot, signal)) = signal {
                segment.sprite = Some(SpriteDecoration {
                    handle: catalog.resolve(&signal.filename)?,
                    relative_position_x: signal.pos_x,
                    is_obstacle: false,
                    scale: signal.scale,
                });
                placed[slot] = true;
                continue;
            }

            if obstacle_cadence > 0 && i % obstacle_cadence == 0 && !pools.obstacle.is_empty() {
                segment.sprite = Some(sample_pool(pools.obstacle, true, catalog, rng)?);
            } else if !pools.objects.is_empty() {
                segment.sprite = Some(sample_pool(pools.objects, false, catalog, rng)?);
            }
        }
    }

    Ok(())
}

fn sample_pool<R: Rng>(
    pool: &[SpritePoolEntry],
    is_obstacle: bool,
    catalog: &SpriteCatalog,
    rng: &mut R,
) -> Result<SpriteDecoration, GenError> {
    let entry = &pool[rng.random_range(0..pool.len())];
    let position = entry.positions_x[rng.random_range(0..entry.positions_x.len())];

    Ok(SpriteDecoration {
        handle: catalog.resolve(&entry.filename)?,
        relative_position_x: position,
        is_obstacle,
        scale: entry.scale,
    })
}
