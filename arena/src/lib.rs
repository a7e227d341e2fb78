//! Per-tick orchestration around the particle quadtree: the tick context,
//! the index built from it, and the contact and sensor passes that read it.

pub mod config;
pub mod contact;
pub mod context;
pub mod error;
pub mod index;
pub mod sensor;
pub mod spawn;
pub mod tick;

pub use config::ArenaConfig;
pub use contact::Contact;
pub use context::TickContext;
pub use error::{ArenaError, ArenaResult};
pub use index::TickIndex;
pub use sensor::{NeighbourSlot, SensorFrame};
pub use tick::{run_tick, TickReport};
