//! Discrete intents delivered by the input collaborator, and the reasons an
//! intent can be turned down.

use crate::items::EquipmentSlot;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One intent per tick. Which key or gesture produced it is not our concern.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Start a fresh game from the main menu.
    Start,
    /// Continue from save text produced by [`crate::save::serialize`].
    Continue(String),
    Move(Direction),
    Interact,
    Attack,
    /// Use the skill at this index of the player's unlocked list.
    UseSkill(usize),
    Flee,
    AdvanceDialogue,
    Cancel,
    Save,
    Restart,
    /// Use the carried item at this inventory index.
    UseItem(usize),
    /// Equip the carried item at this inventory index.
    Equip(usize),
    Unequip(EquipmentSlot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Unit-length movement vector (screen coordinates, y grows downward).
    pub fn vector(&self) -> (f64, f64) {
        let diagonal = std::f64::consts::FRAC_1_SQRT_2;
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
            Direction::UpLeft => (-diagonal, -diagonal),
            Direction::UpRight => (diagonal, -diagonal),
            Direction::DownLeft => (-diagonal, diagonal),
            Direction::DownRight => (diagonal, diagonal),
        }
    }

    /// Facing used by the animation-state name. Vertical wins on diagonals.
    pub fn facing(&self) -> &'static str {
        match self {
            Direction::Up | Direction::UpLeft | Direction::UpRight => "up",
            Direction::Down | Direction::DownLeft | Direction::DownRight => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Why an intent was turned into a no-op. The message is user-visible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("that action is not available right now")]
    NotAvailableInMode,
    #[error("no monster close enough to attack")]
    NoMonsterInRange,
    #[error("nobody close enough to talk to")]
    NoNpcInRange,
    #[error("wait for your turn")]
    NotPlayerTurn,
    #[error("no skill in slot {0}")]
    UnknownSkill(usize),
    #[error("{0} is still on cooldown")]
    SkillOnCooldown(&'static str),
    #[error("not enough mana ({available}/{needed})")]
    InsufficientMana { needed: u32, available: u32 },
    #[error("inventory is full")]
    InventoryFull,
    #[error("no item in slot {0}")]
    NoSuchItem(usize),
    #[error("{0} cannot be equipped")]
    NotEquippable(&'static str),
    #[error("{0} cannot be used")]
    NotUsable(&'static str),
    #[error("nothing equipped in that slot")]
    SlotEmpty,
    #[error("the game could not be saved")]
    SaveFailed,
}
