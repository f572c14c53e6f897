//! Item catalog, equipment slots, and the carried inventory.

pub mod equipment;
pub mod inventory;
pub mod types;

pub use equipment::*;
pub use inventory::*;
pub use types::*;
