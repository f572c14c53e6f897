//! Player character: stats, class catalog, skills.

pub mod class;
pub mod player;
pub mod skills;
pub mod stats;

pub use class::*;
pub use player::*;
pub use skills::*;
pub use stats::*;
