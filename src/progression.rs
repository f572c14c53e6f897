//! Experience, level-ups, stat growth and skill unlocks.

use crate::character::{Player, SkillId};
use crate::core::constants::XP_THRESHOLD_GROWTH;
use crate::items::ItemId;
use crate::quests::Reward;

/// One level gained, with the skills it unlocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub new_skills: Vec<SkillId>,
}

/// Next threshold after a level-up, floored and never below 1.
pub fn next_threshold(current: u64) -> u64 {
    ((current as f64 * XP_THRESHOLD_GROWTH).floor() as u64).max(1)
}

/// Raises the player one level: pools grow by the class growth and are
/// refilled, the stat-growth table is applied, and new skills are learned.
pub fn level_up(player: &mut Player) -> LevelUp {
    let class = player.class.definition();
    player.level += 1;
    for &(attribute, delta) in class.stat_growth {
        player.stats.apply(attribute, delta);
    }
    player
        .stats
        .grow_and_restore(class.hp_per_level, class.mp_per_level);
    let new_skills = player.learn_skills_for_level(player.level);
    tracing::info!(level = player.level, class = class.name, "level up");
    LevelUp {
        level: player.level,
        new_skills,
    }
}

/// Adds experience and resolves every level-up it pays for, carrying the
/// excess over each threshold.
pub fn award_experience(player: &mut Player, amount: u64) -> Vec<LevelUp> {
    player.experience = player.experience.saturating_add(amount);

    let mut levelups = Vec::new();
    while player.experience >= player.experience_to_next_level {
        player.experience -= player.experience_to_next_level;
        player.experience_to_next_level = next_threshold(player.experience_to_next_level);
        levelups.push(level_up(player));
    }
    levelups
}

/// Pays out a quest reward. Items that do not fit are returned.
pub fn grant_reward(player: &mut Player, reward: &Reward) -> (Vec<LevelUp>, Vec<ItemId>) {
    player.gold = player.gold.saturating_add(reward.gold);
    let levelups = award_experience(player, reward.experience);
    let lost = reward
        .items
        .iter()
        .copied()
        .filter(|&item| !player.inventory.add(item))
        .collect();
    (levelups, lost)
}
