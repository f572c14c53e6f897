//! Pure combat math shared by the resolver and the tests.

use super::types::CombatSession;
use crate::character::{Player, Skill};
use crate::core::constants::*;
use rand::Rng;

/// Result of a player attack calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt (after crit multiplier if applicable).
    pub damage: u32,
    /// Whether this attack was a critical hit.
    pub is_crit: bool,
}

/// Weapon damage (or the unarmed value) plus the class scaling.
pub fn base_attack_value(player: &Player) -> f64 {
    let weapon = player
        .equipment
        .weapon_damage()
        .map(f64::from)
        .unwrap_or(UNARMED_DAMAGE);
    let stats = &player.stats;
    weapon
        + player
            .class
            .attack_bonus(stats.strength, stats.dexterity, stats.intelligence)
}

/// Roll for critical hit. `chance` is a probability in [0, 1].
pub fn roll_crit(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance
}

/// Basic attack damage with crit roll.
pub fn calculate_player_attack(player: &Player, rng: &mut impl Rng) -> AttackResult {
    let mut damage = base_attack_value(player).floor() as u32;
    let is_crit = roll_crit(player.stats.critical_chance(), rng);
    if is_crit {
        damage = (damage as f64 * player.stats.critical_multiplier()).floor() as u32;
    }
    AttackResult { damage, is_crit }
}

/// Damage the player takes after defense. Never below [`MIN_DAMAGE_TAKEN`].
pub fn calculate_damage_taken(incoming: u32, defense: u32) -> u32 {
    incoming.saturating_sub(defense).max(MIN_DAMAGE_TAKEN)
}

pub fn skill_damage(skill: &Skill, level: u32) -> u32 {
    skill
        .base_damage
        .saturating_add(level.saturating_mul(SKILL_DAMAGE_PER_LEVEL))
}

/// Counts a monster turn and returns its raw damage plus the special attack
/// used, if any. Bosses fire a special every third turn, cycling their list.
pub fn monster_attack(session: &mut CombatSession) -> (u32, Option<&'static str>) {
    session.monster_turns += 1;
    let monster = &session.monster;
    let base = monster.damage();
    let specials = &monster.special_attacks;
    if monster.is_boss()
        && !specials.is_empty()
        && session.monster_turns % BOSS_SPECIAL_EVERY_N_TURNS == 0
    {
        let nth = (session.monster_turns / BOSS_SPECIAL_EVERY_N_TURNS - 1) as usize;
        let special = specials[nth % specials.len()];
        let damage = (base as f64 * BOSS_SPECIAL_MULTIPLIER).floor() as u32;
        return (damage, Some(special));
    }
    (base, None)
}
