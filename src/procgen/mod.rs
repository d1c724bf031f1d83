//! Procedural track generation pipeline.
//!
//! Planning decides per-zone elevation/curvature targets, synthesis expands
//! zones into eased segments, scheduling attaches sprites, and assembly
//! packages everything into the renderer-facing descriptor.

pub mod planner;
pub mod scheduler;
pub mod synthesizer;
pub mod themes;

// Re-export main types for convenience
pub use planner::{plan_from_layout, plan_random, plan_straight, Zone};
pub use scheduler::SpritePools;
pub use synthesizer::synthesize;
pub use themes::TrackColors;

use crate::catalog::SharedCatalog;
use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::layout::ZoneSpec;
use crate::track::{assemble, TrackDescriptor};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Where the track topology comes from.
#[derive(Debug, Clone)]
pub enum TrackSource {
    /// Expand an explicit layout description.
    Layout(Vec<ZoneSpec>),
    /// Run the randomized slope/curve state machines.
    Random { num_zones: usize },
    /// Level, straight road.
    Straight { num_zones: usize },
}

impl TrackSource {
    fn mode(&self) -> &'static str {
        match self {
            TrackSource::Layout(_) => "layout",
            TrackSource::Random { .. } => "random",
            TrackSource::Straight { .. } => "straight",
        }
    }
}

/// One generation request. The seed fully determines the output for a given
/// catalog and configuration.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub source: TrackSource,
    pub seed: u64,
}

/// Track generator bound to a sprite catalog slot and a configuration.
///
/// Every call owns its own seeded random source, so concurrent calls are
/// independent and reproducible.
pub struct TrackGenerator {
    catalog: SharedCatalog,
    config: GeneratorConfig,
}

impl TrackGenerator {
    pub fn new(catalog: SharedCatalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the full pipeline: plan, synthesize, decorate, assemble.
    ///
    /// Fails with `CatalogNotReady` if the sprite catalog has not been
    /// installed yet; any failure leaves no partial descriptor behind.
    pub fn generate(&self, request: &GenerationRequest) -> Result<TrackDescriptor, GenError> {
        let catalog = self.catalog.get()?;
        let mut rng = StdRng::seed_from_u64(request.seed);
        let track = &self.config.track;

        let zones = match &request.source {
            TrackSource::Layout(specs) => {
                plan_from_layout(specs, track.reverse_layout, &mut rng)?
            }
            TrackSource::Random { num_zones } => plan_random(*num_zones, &mut rng),
            TrackSource::Straight { num_zones } => plan_straight(*num_zones),
        };

        let mut segments = synthesize(&zones, track.zone_size);

        let pools = SpritePools {
            objects: &self.config.sprites.objects,
            obstacle: &self.config.sprites.obstacle,
        };
        scheduler::decorate(
            &mut segments,
            &zones,
            track.zone_size,
            &pools,
            track.obstacle_per_iteration,
            catalog,
            &mut rng,
        )?;

        let descriptor = assemble(
            self.config.vehicle.clone(),
            self.config.render.clone(),
            &self.config.lane_config(),
            self.config.track_colors()?,
            segments,
            zones.len(),
            track.zone_size,
        )?;

        info!(
            "Generated {} segments from {} zones ({} mode, seed {})",
            descriptor.track.len(),
            zones.len(),
            request.source.mode(),
            request.seed
        );

        Ok(descriptor)
    }
}
