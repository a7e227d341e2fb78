pub mod error;
pub mod particle;
pub mod quadtree;

pub use common::shapes;
pub use error::{QuadtreeError, QuadtreeResult};
pub use particle::{Particle, ParticleId, ParticleKind};
