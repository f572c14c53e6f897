//! Ycrad - turn-based RPG engine core.
//!
//! The engine is headless and tick-driven: a front end feeds one [`Intent`]
//! per frame into [`game_tick`] and renders from [`snapshot`]. Windowing,
//! sprites and audio playback belong to the caller.

pub mod character;
pub mod combat;
pub mod core;
pub mod dialogue;
pub mod items;
pub mod monsters;
pub mod progression;
pub mod quests;
pub mod save;
pub mod zones;

pub use crate::core::config::GameConfig;
pub use crate::core::context::GameContext;
pub use crate::core::game_state::{GameMode, GameState};
pub use crate::core::input::{Direction, Intent, RejectReason};
pub use crate::core::tick::{game_tick, AudioCue, TickEvent, TickResult};
pub use crate::core::view::{snapshot, RenderSnapshot};
