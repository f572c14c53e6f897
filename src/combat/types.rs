use crate::character::{ItemUse, SkillId};
use crate::core::constants::COMBAT_LOG_CAPACITY;
use crate::core::input::RejectReason;
use crate::items::ItemId;
use crate::monsters::Monster;
use crate::progression::LevelUp;
use crate::zones::ZoneId;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Monster,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Monster,
            Side::Monster => Side::Player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatLogEntry {
    pub message: String,
    pub is_crit: bool,
    pub is_player_action: bool,
}

/// One encounter, from the first strike to victory, defeat or flight.
/// Lives inside the combat mode and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CombatSession {
    pub monster: Monster,
    /// Zone the monster is returned to if the player flees.
    pub zone: ZoneId,
    pub turn: Side,
    /// Seconds since the current turn opened.
    pub turn_timer: f64,
    /// Monster turns taken so far; drives boss specials.
    pub monster_turns: u32,
    pub log: VecDeque<CombatLogEntry>,
}

impl CombatSession {
    pub fn new(monster: Monster, zone: ZoneId) -> Self {
        let mut session = Self {
            monster,
            zone,
            turn: Side::Player,
            turn_timer: 0.0,
            monster_turns: 0,
            log: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
        };
        let opening = format!(
            "A level {} {} appears!",
            session.monster.level, session.monster.name
        );
        session.add_log_entry(opening, false, false);
        session
    }

    pub fn add_log_entry(&mut self, message: String, is_crit: bool, is_player_action: bool) {
        if self.log.len() >= COMBAT_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(CombatLogEntry {
            message,
            is_crit,
            is_player_action,
        });
    }

    /// Hands the turn over and restarts its timer.
    pub fn pass_turn(&mut self) {
        self.turn = self.turn.other();
        self.turn_timer = 0.0;
    }
}

/// Explicit player choice for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    UseSkill(usize),
    Flee,
    UseItem(usize),
}

/// Which side's turn resolved this tick, and whether the timeout forced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTurn {
    pub side: Side,
    pub automatic: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombatOutcome {
    #[default]
    Ongoing,
    Victory,
    Defeat,
    Fled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
        was_crit: bool,
    },
    SkillUsed {
        skill: SkillId,
        damage: u32,
    },
    ItemUsed(ItemUse),
    MonsterAttack {
        damage: u32,
        special: Option<&'static str>,
    },
    FleeFailed,
    Fled,
    MonsterDied,
    PlayerDied,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CombatUpdate {
    pub events: Vec<CombatEvent>,
    pub resolved: Option<ResolvedTurn>,
    pub outcome: CombatOutcome,
}

/// Everything a victory paid out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VictoryReport {
    pub experience: u64,
    pub gold: u64,
    pub levelups: Vec<LevelUp>,
    pub loot_kept: Vec<ItemId>,
    /// Dropped items discarded because the inventory was full.
    pub loot_lost: Vec<ItemId>,
    pub quests_completed: Vec<String>,
}
