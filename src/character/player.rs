use super::class::ClassKind;
use super::skills::SkillId;
use super::stats::CharacterStats;
use crate::core::constants::*;
use crate::core::geometry::Position;
use crate::core::input::{Direction, RejectReason};
use crate::items::{EquipmentSlot, Equipment, Inventory, ItemId, ItemKind, Restores};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of consuming an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemUse {
    pub item: ItemId,
    pub restored: Restores,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub experience_to_next_level: u64,
    pub stats: CharacterStats,
    pub class: ClassKind,
    /// Unlocked skills in unlock order, no duplicates.
    pub skills: Vec<SkillId>,
    #[serde(default, with = "cooldown_pairs")]
    cooldowns: BTreeMap<SkillId, f64>,
    pub gold: u64,
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub inventory: Inventory,
    pub position: Position,
    #[serde(default)]
    pub facing: Direction,
    #[serde(skip)]
    pub is_moving: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, class: ClassKind) -> Self {
        let mut player = Self {
            name: name.into(),
            level: STARTING_LEVEL,
            experience: 0,
            experience_to_next_level: STARTING_XP_TO_NEXT_LEVEL,
            stats: CharacterStats::new(),
            class,
            skills: Vec::new(),
            cooldowns: BTreeMap::new(),
            gold: STARTING_GOLD,
            equipment: Equipment::new(),
            inventory: Inventory::new(),
            position: Position::new(PLAYER_START_X, PLAYER_START_Y),
            facing: Direction::Down,
            is_moving: false,
        };
        player.learn_skills_for_level(player.level);
        player
    }

    pub fn skill_at(&self, index: usize) -> Option<SkillId> {
        self.skills.get(index).copied()
    }

    /// Appends every class skill unlocked at or below `level` that is not
    /// already known. Returns only the newly learned ones, so calling it
    /// twice for the same level is a no-op the second time.
    pub fn learn_skills_for_level(&mut self, level: u32) -> Vec<SkillId> {
        let mut learned = Vec::new();
        for skill in self.class.skills_up_to(level) {
            if !self.skills.contains(&skill) {
                self.skills.push(skill);
                learned.push(skill);
            }
        }
        learned
    }

    /// Switches class and replaces the skill list by the new class's
    /// skills for the current level. Cooldowns of dropped skills go too.
    pub fn change_class(&mut self, class: ClassKind) {
        self.class = class;
        self.skills.clear();
        self.cooldowns.clear();
        self.learn_skills_for_level(self.level);
    }

    pub fn cooldown_remaining(&self, skill: SkillId) -> f64 {
        self.cooldowns.get(&skill).copied().unwrap_or(0.0)
    }

    pub fn is_on_cooldown(&self, skill: SkillId) -> bool {
        self.cooldown_remaining(skill) > 0.0
    }

    pub fn start_cooldown(&mut self, skill: SkillId, seconds: f64) {
        if seconds > 0.0 {
            self.cooldowns.insert(skill, seconds);
        }
    }

    pub fn cooldowns(&self) -> impl Iterator<Item = (SkillId, f64)> + '_ {
        self.cooldowns.iter().map(|(k, v)| (*k, *v))
    }

    /// Counts every cooldown down; entries that reach zero are removed.
    pub fn tick_cooldowns(&mut self, delta_time: f64) {
        for remaining in self.cooldowns.values_mut() {
            *remaining -= delta_time;
        }
        self.cooldowns.retain(|_, remaining| *remaining > 0.0);
    }

    pub fn total_defense(&self) -> u32 {
        self.stats.defense + self.equipment.armor_defense()
    }

    /// Equips the carried item at `index`. Whatever was in the slot goes
    /// back to the inventory, which always has room since the new item left it.
    pub fn equip(&mut self, index: usize) -> Result<(ItemId, Option<ItemId>), RejectReason> {
        let item = self
            .inventory
            .get(index)
            .ok_or(RejectReason::NoSuchItem(index))?;
        let slot = item
            .definition()
            .slot()
            .ok_or(RejectReason::NotEquippable(item.name()))?;
        self.inventory.remove(index);
        let previous = self.equipment.set(slot, Some(item));
        if let Some(previous) = previous {
            self.inventory.add(previous);
        }
        Ok((item, previous))
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<ItemId, RejectReason> {
        let item = self.equipment.get(slot).ok_or(RejectReason::SlotEmpty)?;
        if self.inventory.is_full() {
            return Err(RejectReason::InventoryFull);
        }
        self.equipment.set(slot, None);
        self.inventory.add(item);
        Ok(item)
    }

    /// Consumes the carried item at `index` and refills the matching pool.
    pub fn use_item(&mut self, index: usize) -> Result<ItemUse, RejectReason> {
        let item = self
            .inventory
            .get(index)
            .ok_or(RejectReason::NoSuchItem(index))?;
        let ItemKind::Consumable(restores) = item.definition().kind else {
            return Err(RejectReason::NotUsable(item.name()));
        };
        self.inventory.remove(index);
        let restored = match restores {
            Restores::Health(amount) => Restores::Health(self.stats.heal(amount)),
            Restores::Mana(amount) => Restores::Mana(self.stats.restore_mana(amount)),
        };
        Ok(ItemUse { item, restored })
    }

    /// Animation-state name for the renderer, e.g. `walk_left` or `idle_down`.
    pub fn animation_state(&self) -> String {
        let action = if self.is_moving { "walk" } else { "idle" };
        format!("{}_{}", action, self.facing.facing())
    }

    /// Re-establishes invariants on a player restored from a save.
    pub fn normalize(&mut self) {
        self.level = self.level.max(1);
        self.experience_to_next_level = self.experience_to_next_level.max(1);
        self.stats.normalize();
        self.equipment.normalize();
        self.inventory.normalize();
        let mut seen = Vec::with_capacity(self.skills.len());
        self.skills.retain(|skill| {
            if seen.contains(skill) {
                false
            } else {
                seen.push(*skill);
                true
            }
        });
        self.cooldowns
            .retain(|_, remaining| remaining.is_finite() && *remaining > 0.0);
        self.is_moving = false;
    }
}

/// Cooldowns as a list of `[skill, seconds]` pairs, since JSON object keys
/// must be strings.
mod cooldown_pairs {
    use super::SkillId;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(map: &BTreeMap<SkillId, f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<SkillId, f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs: Vec<(SkillId, f64)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}
