//! Monster kinds, live instances, zone spawning, and loot rolls.

pub mod generation;
pub mod types;

pub use generation::*;
pub use types::*;
