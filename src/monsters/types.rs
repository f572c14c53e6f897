use crate::character::MonsterAttribute;
use crate::core::config::Difficulty;
use crate::core::constants::*;
use crate::core::geometry::Position;
use crate::items::ItemId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Slime,
    Rat,
    Korvash,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LootEntry {
    pub item: ItemId,
    /// Drop chance in [0, 1].
    pub probability: f64,
}

impl MonsterKind {
    /// Type tag used by `Kill` quest objectives.
    pub fn tag(&self) -> &'static str {
        match self {
            MonsterKind::Slime => "slime",
            MonsterKind::Rat => "rat",
            MonsterKind::Korvash => "korvash",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MonsterKind::Slime => "Slime",
            MonsterKind::Rat => "Rat",
            MonsterKind::Korvash => "Korvash the Devourer",
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, MonsterKind::Korvash)
    }

    /// (base, per level)
    fn hp_formula(&self) -> (u32, u32) {
        match self {
            MonsterKind::Slime => (15, 8),
            MonsterKind::Rat => (12, 6),
            MonsterKind::Korvash => (100, 50),
        }
    }

    fn damage_formula(&self) -> (u32, u32) {
        match self {
            MonsterKind::Slime => (3, 1),
            MonsterKind::Rat => (4, 1),
            MonsterKind::Korvash => (15, 3),
        }
    }

    pub fn loot_table(&self) -> &'static [LootEntry] {
        match self {
            MonsterKind::Slime => &[
                LootEntry {
                    item: ItemId::StickyJelly,
                    probability: 0.7,
                },
                LootEntry {
                    item: ItemId::SmallPotion,
                    probability: 0.3,
                },
            ],
            MonsterKind::Rat => &[
                LootEntry {
                    item: ItemId::RatTail,
                    probability: 0.5,
                },
                LootEntry {
                    item: ItemId::StolenCheese,
                    probability: 0.2,
                },
            ],
            MonsterKind::Korvash => &[
                LootEntry {
                    item: ItemId::CursedSword,
                    probability: 0.4,
                },
                LootEntry {
                    item: ItemId::MarshAmulet,
                    probability: 0.6,
                },
            ],
        }
    }

    pub fn special_attacks(&self) -> &'static [&'static str] {
        match self {
            MonsterKind::Korvash => &["Poison Bite", "Deadly Embrace"],
            MonsterKind::Slime | MonsterKind::Rat => &[],
        }
    }
}

fn scaled((base, per_level): (u32, u32), level: u32) -> u32 {
    base.saturating_add(per_level.saturating_mul(level))
}

/// A live monster instance. Owned by its zone while idle, by the combat
/// session while fighting.
#[derive(Debug, Clone, PartialEq)]
pub struct Monster {
    pub kind: MonsterKind,
    pub name: String,
    pub level: u32,
    pub position: Position,
    hit_points: u32,
    max_hit_points: u32,
    damage: u32,
    pub experience_reward: u32,
    pub gold_reward: u32,
    pub loot_table: Vec<LootEntry>,
    pub special_attacks: Vec<&'static str>,
}

impl Monster {
    /// Builds a full-health monster from its kind's stat formulas.
    pub fn new(kind: MonsterKind, level: u32, position: Position, difficulty: Difficulty) -> Self {
        let level = level.max(1);
        let max_hit_points = scaled(kind.hp_formula(), level).max(1);
        let raw_damage = scaled(kind.damage_formula(), level);
        let damage = ((raw_damage as f64 * difficulty.damage_multiplier()).floor() as u32).max(1);
        let (xp, gold) = if kind.is_boss() {
            (BOSS_XP_REWARD, BOSS_GOLD_REWARD)
        } else {
            (MONSTER_XP_REWARD, MONSTER_GOLD_REWARD)
        };
        Self {
            kind,
            name: kind.display_name().to_string(),
            level,
            position,
            hit_points: max_hit_points,
            max_hit_points,
            damage,
            experience_reward: scaled(xp, level),
            gold_reward: scaled(gold, level),
            loot_table: kind.loot_table().to_vec(),
            special_attacks: kind.special_attacks().to_vec(),
        }
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn max_hit_points(&self) -> u32 {
        self.max_hit_points
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn is_boss(&self) -> bool {
        self.kind.is_boss()
    }

    pub fn health_ratio(&self) -> f64 {
        self.hit_points as f64 / self.max_hit_points as f64
    }

    /// Monsters take raw damage; no defense reduction applies to them.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.hit_points);
        self.hit_points -= applied;
        applied
    }

    /// Sets current health, clamped to `0..=max` (restored snapshots).
    pub fn set_hit_points(&mut self, hit_points: u32) {
        self.hit_points = hit_points.min(self.max_hit_points);
    }

    /// Applies a debuff delta. Max HP stays at least 1, current HP is
    /// clamped under it, and damage never drops below 1.
    pub fn apply(&mut self, attr: MonsterAttribute, delta: f64) {
        fn shifted(value: u32, delta: f64) -> u32 {
            (value as f64 + delta).round().max(0.0) as u32
        }

        match attr {
            MonsterAttribute::HitPoints => self.hit_points = shifted(self.hit_points, delta),
            MonsterAttribute::MaxHitPoints => {
                self.max_hit_points = shifted(self.max_hit_points, delta).max(1)
            }
            MonsterAttribute::Damage => self.damage = shifted(self.damage, delta).max(1),
        }
        self.hit_points = self.hit_points.min(self.max_hit_points);
    }
}
