use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Closed set of player attributes that effects and class growth may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerAttribute {
    Strength,
    Dexterity,
    Intelligence,
    Defense,
    CriticalChance,
    CriticalMultiplier,
    HitPoints,
    MaxHitPoints,
    ManaPoints,
    MaxManaPoints,
}

impl PlayerAttribute {
    pub fn all() -> [PlayerAttribute; 10] {
        [
            PlayerAttribute::Strength,
            PlayerAttribute::Dexterity,
            PlayerAttribute::Intelligence,
            PlayerAttribute::Defense,
            PlayerAttribute::CriticalChance,
            PlayerAttribute::CriticalMultiplier,
            PlayerAttribute::HitPoints,
            PlayerAttribute::MaxHitPoints,
            PlayerAttribute::ManaPoints,
            PlayerAttribute::MaxManaPoints,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            PlayerAttribute::Strength => "STR",
            PlayerAttribute::Dexterity => "DEX",
            PlayerAttribute::Intelligence => "INT",
            PlayerAttribute::Defense => "DEF",
            PlayerAttribute::CriticalChance => "CRIT",
            PlayerAttribute::CriticalMultiplier => "CRITx",
            PlayerAttribute::HitPoints => "HP",
            PlayerAttribute::MaxHitPoints => "MaxHP",
            PlayerAttribute::ManaPoints => "MP",
            PlayerAttribute::MaxManaPoints => "MaxMP",
        }
    }
}

/// Combat attributes of the player.
///
/// Pools and critical values are private so every write goes through a
/// clamping method: `0 <= hp <= max_hp`, `0 <= mp <= max_mp`,
/// `crit_chance in [0, 1]`, `crit_multiplier >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub strength: u32,
    pub dexterity: u32,
    pub intelligence: u32,
    pub defense: u32,
    critical_chance: f64,
    critical_multiplier: f64,
    hit_points: u32,
    max_hit_points: u32,
    mana_points: u32,
    max_mana_points: u32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStats {
    pub fn new() -> Self {
        Self {
            strength: STARTING_STRENGTH,
            dexterity: STARTING_DEXTERITY,
            intelligence: STARTING_INTELLIGENCE,
            defense: STARTING_DEFENSE,
            critical_chance: STARTING_CRIT_CHANCE,
            critical_multiplier: STARTING_CRIT_MULTIPLIER,
            hit_points: STARTING_HP,
            max_hit_points: STARTING_HP,
            mana_points: STARTING_MP,
            max_mana_points: STARTING_MP,
        }
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    pub fn max_hit_points(&self) -> u32 {
        self.max_hit_points
    }

    pub fn mana_points(&self) -> u32 {
        self.mana_points
    }

    pub fn max_mana_points(&self) -> u32 {
        self.max_mana_points
    }

    pub fn critical_chance(&self) -> f64 {
        self.critical_chance
    }

    pub fn critical_multiplier(&self) -> f64 {
        self.critical_multiplier
    }

    pub fn set_critical_chance(&mut self, chance: f64) {
        self.critical_chance = chance;
        self.normalize();
    }

    pub fn set_critical_multiplier(&mut self, multiplier: f64) {
        self.critical_multiplier = multiplier;
        self.normalize();
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    pub fn health_ratio(&self) -> f64 {
        if self.max_hit_points == 0 {
            return 0.0;
        }
        self.hit_points as f64 / self.max_hit_points as f64
    }

    pub fn get(&self, attr: PlayerAttribute) -> f64 {
        match attr {
            PlayerAttribute::Strength => self.strength as f64,
            PlayerAttribute::Dexterity => self.dexterity as f64,
            PlayerAttribute::Intelligence => self.intelligence as f64,
            PlayerAttribute::Defense => self.defense as f64,
            PlayerAttribute::CriticalChance => self.critical_chance,
            PlayerAttribute::CriticalMultiplier => self.critical_multiplier,
            PlayerAttribute::HitPoints => self.hit_points as f64,
            PlayerAttribute::MaxHitPoints => self.max_hit_points as f64,
            PlayerAttribute::ManaPoints => self.mana_points as f64,
            PlayerAttribute::MaxManaPoints => self.max_mana_points as f64,
        }
    }

    /// Adds a signed delta to one attribute, then re-establishes the invariants.
    /// Integral attributes round the delta to the nearest whole point.
    pub fn apply(&mut self, attr: PlayerAttribute, delta: f64) {
        fn shifted(value: u32, delta: f64) -> u32 {
            (value as f64 + delta).round().max(0.0) as u32
        }

        match attr {
            PlayerAttribute::Strength => self.strength = shifted(self.strength, delta),
            PlayerAttribute::Dexterity => self.dexterity = shifted(self.dexterity, delta),
            PlayerAttribute::Intelligence => {
                self.intelligence = shifted(self.intelligence, delta)
            }
            PlayerAttribute::Defense => self.defense = shifted(self.defense, delta),
            PlayerAttribute::CriticalChance => self.critical_chance += delta,
            PlayerAttribute::CriticalMultiplier => self.critical_multiplier += delta,
            PlayerAttribute::HitPoints => self.hit_points = shifted(self.hit_points, delta),
            PlayerAttribute::MaxHitPoints => {
                self.max_hit_points = shifted(self.max_hit_points, delta)
            }
            PlayerAttribute::ManaPoints => self.mana_points = shifted(self.mana_points, delta),
            PlayerAttribute::MaxManaPoints => {
                self.max_mana_points = shifted(self.max_mana_points, delta)
            }
        }
        self.normalize();
    }

    /// Re-establishes every invariant. Also used on data restored from saves.
    pub fn normalize(&mut self) {
        self.max_hit_points = self.max_hit_points.max(1);
        self.hit_points = self.hit_points.min(self.max_hit_points);
        self.mana_points = self.mana_points.min(self.max_mana_points);
        self.critical_chance = if self.critical_chance.is_finite() {
            self.critical_chance.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.critical_multiplier = if self.critical_multiplier.is_finite() {
            self.critical_multiplier.max(1.0)
        } else {
            1.0
        };
    }

    /// Removes hit points, never going below zero. Returns the amount removed.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.hit_points);
        self.hit_points -= applied;
        applied
    }

    /// Restores hit points up to the maximum. Returns the amount restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_hit_points - self.hit_points);
        self.hit_points += applied;
        applied
    }

    /// Restores mana up to the maximum. Returns the amount restored.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_mana_points - self.mana_points);
        self.mana_points += applied;
        applied
    }

    /// Debits mana if the pool covers the cost.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana_points < cost {
            return false;
        }
        self.mana_points -= cost;
        true
    }

    /// Raises both maximums and refills both pools (level-up).
    pub fn grow_and_restore(&mut self, hp_growth: u32, mp_growth: u32) {
        self.max_hit_points = self.max_hit_points.saturating_add(hp_growth);
        self.max_mana_points = self.max_mana_points.saturating_add(mp_growth);
        self.hit_points = self.max_hit_points;
        self.mana_points = self.max_mana_points;
    }
}
