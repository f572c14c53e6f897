use super::math::{calculate_damage_taken, calculate_player_attack, monster_attack, skill_damage};
use super::types::*;
use crate::character::{Player, SkillEffect};
use crate::core::constants::*;
use crate::core::input::RejectReason;
use crate::items::Restores;
use crate::monsters::{roll_loot, Monster};
use crate::progression::award_experience;
use crate::quests::{ActionType, QuestTracker};
use rand::Rng;

/// Advances one combat session by `delta_time`.
///
/// At most one turn resolves per call. On the player's turn an explicit
/// action resolves it; otherwise, once the turn timer passes
/// [`TURN_TIMEOUT_SECONDS`], a basic attack fires for whichever side holds
/// the turn. Invalid actions are reported as [`CombatEvent::Rejected`] and
/// never consume the turn.
pub fn update_combat(
    session: &mut CombatSession,
    player: &mut Player,
    action: Option<CombatAction>,
    delta_time: f64,
    rng: &mut impl Rng,
) -> CombatUpdate {
    let mut update = CombatUpdate::default();
    session.turn_timer += delta_time;

    if let Some(action) = action {
        if session.turn == Side::Player {
            match resolve_player_action(session, player, action, rng) {
                Ok(turn) => {
                    update.events.extend(turn.events);
                    update.resolved = Some(ResolvedTurn {
                        side: Side::Player,
                        automatic: false,
                    });
                    if turn.fled {
                        update.outcome = CombatOutcome::Fled;
                        return update;
                    }
                }
                Err(reason) => update.events.push(CombatEvent::Rejected(reason)),
            }
        } else {
            update
                .events
                .push(CombatEvent::Rejected(RejectReason::NotPlayerTurn));
        }
    }

    if update.resolved.is_none() && session.turn_timer > TURN_TIMEOUT_SECONDS {
        let side = session.turn;
        match side {
            Side::Player => update.events.push(player_attack(session, player, rng)),
            Side::Monster => update.events.push(monster_turn(session, player)),
        }
        update.resolved = Some(ResolvedTurn {
            side,
            automatic: true,
        });
    }

    if update.resolved.is_some() {
        update.outcome = terminal_check(session, player, &mut update.events);
        if update.outcome == CombatOutcome::Ongoing {
            session.pass_turn();
        }
    }
    update
}

struct PlayerTurn {
    events: Vec<CombatEvent>,
    fled: bool,
}

fn resolve_player_action(
    session: &mut CombatSession,
    player: &mut Player,
    action: CombatAction,
    rng: &mut impl Rng,
) -> Result<PlayerTurn, RejectReason> {
    let mut fled = false;
    let event = match action {
        CombatAction::Attack => player_attack(session, player, rng),
        CombatAction::UseSkill(index) => use_skill(session, player, index)?,
        CombatAction::UseItem(index) => {
            let used = player.use_item(index)?;
            let message = match used.restored {
                Restores::Health(amount) => {
                    format!("You use {} and recover {} HP", used.item.name(), amount)
                }
                Restores::Mana(amount) => {
                    format!("You use {} and recover {} MP", used.item.name(), amount)
                }
            };
            session.add_log_entry(message, false, true);
            CombatEvent::ItemUsed(used)
        }
        CombatAction::Flee => {
            if rng.gen::<f64>() < FLEE_CHANCE {
                session.add_log_entry("You got away!".to_string(), false, true);
                fled = true;
                CombatEvent::Fled
            } else {
                session.add_log_entry("You failed to flee!".to_string(), false, true);
                CombatEvent::FleeFailed
            }
        }
    };
    Ok(PlayerTurn {
        events: vec![event],
        fled,
    })
}

fn player_attack(session: &mut CombatSession, player: &Player, rng: &mut impl Rng) -> CombatEvent {
    let attack = calculate_player_attack(player, rng);
    session.monster.take_damage(attack.damage);
    let message = if attack.is_crit {
        format!("CRITICAL HIT! You deal {} damage", attack.damage)
    } else {
        format!("You hit {} for {} damage", session.monster.name, attack.damage)
    };
    session.add_log_entry(message, attack.is_crit, true);
    CombatEvent::PlayerAttack {
        damage: attack.damage,
        was_crit: attack.is_crit,
    }
}

fn use_skill(
    session: &mut CombatSession,
    player: &mut Player,
    index: usize,
) -> Result<CombatEvent, RejectReason> {
    let skill = player
        .skill_at(index)
        .ok_or(RejectReason::UnknownSkill(index))?
        .definition();
    if player.is_on_cooldown(skill.id) {
        return Err(RejectReason::SkillOnCooldown(skill.name));
    }
    if !player.stats.spend_mana(skill.mana_cost) {
        return Err(RejectReason::InsufficientMana {
            needed: skill.mana_cost,
            available: player.stats.mana_points(),
        });
    }

    let damage = skill_damage(&skill, player.level);
    session.monster.take_damage(damage);
    player.start_cooldown(skill.id, skill.cooldown_seconds);
    for effect in skill.effects {
        match *effect {
            SkillEffect::Buff { attribute, delta } => player.stats.apply(attribute, delta),
            SkillEffect::Debuff { attribute, delta } => session.monster.apply(attribute, delta),
        }
    }

    let message = format!("You use {} for {} damage", skill.name, damage);
    session.add_log_entry(message, false, true);
    Ok(CombatEvent::SkillUsed {
        skill: skill.id,
        damage,
    })
}

fn monster_turn(session: &mut CombatSession, player: &mut Player) -> CombatEvent {
    let (raw, special) = monster_attack(session);
    let damage = calculate_damage_taken(raw, player.total_defense());
    player.stats.take_damage(damage);
    let message = match special {
        Some(name) => format!("{} uses {}! You take {} damage", session.monster.name, name, damage),
        None => format!("{} hits you for {} damage", session.monster.name, damage),
    };
    session.add_log_entry(message, false, false);
    CombatEvent::MonsterAttack { damage, special }
}

/// Defeat is checked before victory.
fn terminal_check(
    session: &mut CombatSession,
    player: &Player,
    events: &mut Vec<CombatEvent>,
) -> CombatOutcome {
    if !player.stats.is_alive() {
        session.add_log_entry("You have been defeated...".to_string(), false, false);
        events.push(CombatEvent::PlayerDied);
        return CombatOutcome::Defeat;
    }
    if !session.monster.is_alive() {
        let message = format!("{} is defeated!", session.monster.name);
        session.add_log_entry(message, false, true);
        events.push(CombatEvent::MonsterDied);
        return CombatOutcome::Victory;
    }
    CombatOutcome::Ongoing
}

/// Pays out a defeated monster: experience and gold, one loot roll per
/// table entry, then quest progress (one `Collect` per kept item and one
/// `Kill` for the monster's type).
pub fn resolve_victory(
    player: &mut Player,
    quests: &mut QuestTracker,
    monster: &Monster,
    rng: &mut impl Rng,
) -> VictoryReport {
    let experience = u64::from(monster.experience_reward);
    let gold = u64::from(monster.gold_reward);
    player.gold = player.gold.saturating_add(gold);
    let levelups = award_experience(player, experience);

    let mut report = VictoryReport {
        experience,
        gold,
        levelups,
        ..VictoryReport::default()
    };
    for item in roll_loot(&monster.loot_table, rng) {
        if player.inventory.add(item) {
            report.loot_kept.push(item);
            report
                .quests_completed
                .extend(quests.update_progress(ActionType::Collect, item.tag(), 1));
        } else {
            report.loot_lost.push(item);
        }
    }
    report
        .quests_completed
        .extend(quests.on_monster_killed(monster.kind));
    report
}
