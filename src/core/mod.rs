//! Core game state, configuration, and the per-tick controller.

pub mod config;
pub mod constants;
pub mod context;
pub mod game_state;
pub mod geometry;
pub mod input;
pub mod tick;
pub mod view;

pub use config::*;
pub use context::*;
pub use game_state::*;
pub use geometry::*;
pub use input::*;
pub use tick::*;
pub use view::*;
