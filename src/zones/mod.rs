//! Zones of the world map and the monsters living in them.
//!
//! Zone definitions are static. The [`World`] holds the live monster
//! instances per zone and knows which zone the player is in.

mod data;
mod world;

pub use data::*;
pub use world::*;
