//! Zone topology planning: decides per-zone elevation and curvature targets.

use crate::error::GenError;
use crate::layout::{validate_layout, Profile, Topography, TopographySpec, TrafficSignal, ZoneSpec};
use rand::Rng;

/// Maximum per-zone elevation or curvature swing.
pub const ZONE_SWING: f32 = 900.0;
/// Scale applied to a layout's declared curvature magnitude.
pub const CURVATURE_STEP: f32 = 10.0;
/// Probability of drifting to a non-neutral state instead of snapping back.
const BRANCH_BIAS: f64 = 0.8;

/// One planned unit of track: the elevation/curvature deltas to accumulate
/// over this zone, plus any signals scheduled inside it.
#[derive(Debug, Clone)]
pub struct Zone {
    pub profile: Profile,
    pub topography: Topography,
    pub height_delta: f32,
    pub curve_delta: f32,
    pub signals: Vec<TrafficSignal>,
}

/// Discrete 3-state sampler shared by the slope and curve machines.
///
/// From any state: with probability 0.8 move to one of the two non-neutral
/// branches (picked by rounding a second uniform draw), otherwise snap back
/// to the neutral state. The two machines run independently.
struct DriftMachine<S: Copy> {
    state: S,
    neutral: S,
    branches: [S; 2],
}

impl<S: Copy> DriftMachine<S> {
    fn new(neutral: S, branches: [S; 2]) -> Self {
        Self {
            state: neutral,
            neutral,
            branches,
        }
    }

    fn step<R: Rng>(&mut self, rng: &mut R) -> S {
        let drift = rng.random::<f64>() < BRANCH_BIAS;
        let branch = rng.random::<f64>().round() as usize;
        self.state = if drift {
            self.branches[branch]
        } else {
            self.neutral
        };
        self.state
    }
}

/// Expand a layout description into individual zones, in declared order.
///
/// `reverse` reproduces the historical variant that planned the declared
/// groups back to front; the default pipeline leaves it off.
pub fn plan_from_layout<R: Rng>(
    specs: &[ZoneSpec],
    reverse: bool,
    rng: &mut R,
) -> Result<Vec<Zone>, GenError> {
    validate_layout(specs)?;

    let mut ordered: Vec<&ZoneSpec> = specs.iter().collect();
    if reverse {
        ordered.reverse();
    }

    let mut zones = Vec::new();
    for spec in ordered {
        for index in 1..=spec.num_zones {
            zones.push(Zone {
                profile: spec.profile,
                topography: spec.topography.name,
                height_delta: profile_delta(spec.profile, rng),
                curve_delta: declared_curve_delta(&spec.topography, rng),
                signals: spec
                    .traffic_signals
                    .iter()
                    .filter(|signal| signal.zone == index)
                    .cloned()
                    .collect(),
            });
        }
    }

    Ok(zones)
}

/// Plan `num_zones` zones by running the two independent state machines,
/// both seeded at the neutral (flat/straight) state.
pub fn plan_random<R: Rng>(num_zones: usize, rng: &mut R) -> Vec<Zone> {
    let mut slope = DriftMachine::new(Profile::Flat, [Profile::Up, Profile::Down]);
    let mut curve = DriftMachine::new(Topography::Straight, [Topography::Left, Topography::Right]);

    (0..num_zones)
        .map(|_| {
            let profile = slope.step(rng);
            let topography = curve.step(rng);
            Zone {
                profile,
                topography,
                height_delta: profile_delta(profile, rng),
                curve_delta: random_curve_delta(topography, rng),
                signals: Vec::new(),
            }
        })
        .collect()
}

/// Plan a level, straight road. Degenerate case used as a test fixture.
pub fn plan_straight(num_zones: usize) -> Vec<Zone> {
    (0..num_zones)
        .map(|_| Zone {
            profile: Profile::Flat,
            topography: Topography::Straight,
            height_delta: 0.0,
            curve_delta: 0.0,
            signals: Vec::new(),
        })
        .collect()
}

fn profile_delta<R: Rng>(profile: Profile, rng: &mut R) -> f32 {
    match profile {
        Profile::Flat => 0.0,
        Profile::Up => ZONE_SWING * rng.random::<f32>(),
        Profile::Down => -ZONE_SWING * rng.random::<f32>(),
    }
}

fn declared_curve_delta<R: Rng>(topography: &TopographySpec, rng: &mut R) -> f32 {
    let swing = topography.curvature.unsigned_abs() as f32 * CURVATURE_STEP;
    match topography.name {
        Topography::Straight => 0.0,
        Topography::Left => -swing * rng.random::<f32>(),
        Topography::Right => swing * rng.random::<f32>(),
    }
}

fn random_curve_delta<R: Rng>(topography: Topography, rng: &mut R) -> f32 {
    match topography {
        Topography::Straight => 0.0,
        Topography::Left => -ZONE_SWING * rng.random::<f32>(),
        Topography::Right => ZONE_SWING * rng.random::<f32>(),
    }
}
