//! Procedural track/terrain generator for pseudo-3D driving scenes.
//!
//! Given a declarative layout description, or a request for a randomized or
//! straight road, the generator synthesizes an ordered sequence of road
//! segments (elevation, curvature, optional sprite decoration) and assembles
//! them into a [`track::TrackDescriptor`] for an external renderer.

pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod procgen;
pub mod track;

pub use catalog::{SharedCatalog, SpriteCatalog, SpriteHandle};
pub use config::GeneratorConfig;
pub use error::GenError;
pub use procgen::{GenerationRequest, TrackGenerator, TrackSource};
pub use track::{Segment, SpriteDecoration, TrackDescriptor};
