//! Turn-based combat: session state, damage math, and the resolver.

pub mod logic;
pub mod math;
pub mod types;

pub use logic::*;
pub use math::*;
pub use types::*;
