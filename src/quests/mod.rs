//! Quest definitions, progress tracking and turn-in.

pub mod catalog;
pub mod tracker;
pub mod types;

pub use catalog::*;
pub use tracker::*;
pub use types::*;
