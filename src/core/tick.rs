//! The per-tick controller.
//!
//! [`game_tick`] is the only function that advances time. It dispatches the
//! tick's intent to the active mode, performs mode transitions, and returns a
//! [`TickResult`] describing what happened so the presentation layer can
//! update without the game logic knowing about any UI or audio types.

use super::constants::{
    ATTACK_RANGE, NPC_COLLISION_RADIUS, NPC_INTERACTION_RANGE, PLAYER_SPEED_PER_SECOND,
    WORLD_HEIGHT, WORLD_WIDTH,
};
use super::context::GameContext;
use super::game_state::{GameMode, GameState, ModeState};
use super::geometry::Rect;
use super::input::{Direction, Intent, RejectReason};
use crate::character::{ItemUse, SkillId};
use crate::combat::{
    resolve_victory, update_combat, CombatAction, CombatEvent, CombatOutcome, CombatSession,
    ResolvedTurn,
};
use crate::dialogue::{nearest_npc_within, Advance, DialogueSession, NpcId};
use crate::items::ItemId;
use crate::progression::{grant_reward, LevelUp};
use crate::quests::{ActionType, QuestStatus, Reward};
use crate::save;
use crate::zones::{get_zone, ZoneId};
use rand::Rng;

const WORLD_BOUNDS: Rect = Rect::new(0.0, WORLD_WIDTH, 0.0, WORLD_HEIGHT);

/// Sound requests for the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Music cue name of the zone just entered.
    ZoneEntered(&'static str),
    CombatStarted,
    Victory,
    Defeat,
    /// Display name of the skill just used.
    SkillUsed(&'static str),
}

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Modes ───────────────────────────────────────────────────
    ModeChanged {
        from: GameMode,
        to: GameMode,
    },
    Audio(AudioCue),
    ZoneEntered {
        zone: ZoneId,
    },

    // ── Combat ──────────────────────────────────────────────────
    CombatStarted {
        monster: String,
        level: u32,
    },
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
    Victory {
        monster: String,
        experience: u64,
        gold: u64,
        loot: Vec<ItemId>,
    },
    /// A dropped or rewarded item did not fit in the inventory.
    LootLost {
        item: ItemId,
    },
    LevelUp {
        level: u32,
        new_skills: Vec<SkillId>,
    },
    Defeat,

    // ── Dialogue & Quests ───────────────────────────────────────
    DialogueLine {
        npc: NpcId,
        line: &'static str,
    },
    QuestAccepted {
        id: String,
    },
    QuestCompleted {
        id: String,
    },
    QuestTurnedIn {
        id: String,
        reward: Reward,
    },

    // ── Inventory ───────────────────────────────────────────────
    ItemEquipped {
        item: ItemId,
        replaced: Option<ItemId>,
    },
    ItemUnequipped {
        item: ItemId,
    },

    // ── Misc ────────────────────────────────────────────────────
    /// The intent was a no-op. `reason` carries a user-visible message.
    ActionRejected {
        reason: RejectReason,
    },
    /// Save text ready to be written by the persistence collaborator.
    Saved {
        data: String,
        autosave: bool,
    },
}

/// Result of one game tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickResult {
    pub events: Vec<TickEvent>,
    /// Which combat turn resolved this tick, if any.
    pub resolved_turn: Option<ResolvedTurn>,
}

impl TickResult {
    fn push(&mut self, event: TickEvent) {
        self.events.push(event);
    }

    fn reject(&mut self, reason: RejectReason) {
        self.events.push(TickEvent::ActionRejected { reason });
    }

    fn push_levelups(&mut self, levelups: Vec<LevelUp>) {
        self.events
            .extend(levelups.into_iter().map(|l| TickEvent::LevelUp {
                level: l.level,
                new_skills: l.new_skills,
            }));
    }
}

/// Advances the game by `delta_time` seconds, applying at most one intent.
///
/// Invalid intents never fail: they surface as
/// [`TickEvent::ActionRejected`] and leave the state untouched. All
/// randomness is drawn from `rng`.
pub fn game_tick<R: Rng>(
    state: &mut GameState,
    ctx: &GameContext,
    intent: Option<Intent>,
    delta_time: f64,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    let delta_time = if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 };
    let from = state.game_mode();

    // ── 1. Clocks ───────────────────────────────────────────────
    if from != GameMode::MainMenu {
        state.play_time += delta_time;
    }
    if matches!(from, GameMode::Exploration | GameMode::Combat) {
        state.player.tick_cooldowns(delta_time);
    }
    state.player.is_moving = false;

    // ── 2. Dispatch to the active mode ──────────────────────────
    let mode = std::mem::replace(&mut state.mode, ModeState::MainMenu);
    let next = match mode {
        ModeState::MainMenu => tick_main_menu(state, ctx, intent, rng, &mut result),
        ModeState::Exploration => {
            tick_exploration(state, ctx, intent, delta_time, rng, &mut result)
        }
        ModeState::Combat(session) => {
            tick_combat(state, session, intent, delta_time, rng, &mut result)
        }
        ModeState::Dialogue(session) => tick_dialogue(state, session, intent, &mut result),
        ModeState::GameOver => tick_game_over(state, ctx, intent, rng, &mut result),
    };
    state.mode = next;

    // ── 3. Report transitions ───────────────────────────────────
    let to = state.game_mode();
    if to != from {
        tracing::debug!(?from, ?to, "mode changed");
        result.push(TickEvent::ModeChanged { from, to });
    }
    result
}

fn tick_main_menu<R: Rng>(
    state: &mut GameState,
    ctx: &GameContext,
    intent: Option<Intent>,
    rng: &mut R,
    result: &mut TickResult,
) -> ModeState {
    match intent {
        Some(Intent::Start) => {
            *state = GameState::new_game(ctx, rng);
            announce_zone(state, result);
            ModeState::Exploration
        }
        Some(Intent::Continue(text)) => {
            *state = save::restore_or_new(&text, ctx, rng);
            announce_zone(state, result);
            ModeState::Exploration
        }
        Some(_) => {
            result.reject(RejectReason::NotAvailableInMode);
            ModeState::MainMenu
        }
        None => ModeState::MainMenu,
    }
}

fn tick_game_over<R: Rng>(
    state: &mut GameState,
    ctx: &GameContext,
    intent: Option<Intent>,
    rng: &mut R,
    result: &mut TickResult,
) -> ModeState {
    match intent {
        Some(Intent::Restart) => {
            *state = GameState::new_game(ctx, rng);
            announce_zone(state, result);
            ModeState::Exploration
        }
        Some(_) => {
            result.reject(RejectReason::NotAvailableInMode);
            ModeState::GameOver
        }
        None => ModeState::GameOver,
    }
}

// =============================================================================
// Exploration
// =============================================================================

fn tick_exploration<R: Rng>(
    state: &mut GameState,
    ctx: &GameContext,
    intent: Option<Intent>,
    delta_time: f64,
    rng: &mut R,
    result: &mut TickResult,
) -> ModeState {
    let next = match intent {
        None => ModeState::Exploration,
        Some(Intent::Move(direction)) => {
            move_player(state, ctx, direction, delta_time, rng, result);
            ModeState::Exploration
        }
        Some(Intent::Attack) => start_combat(state, result),
        Some(Intent::Interact) => start_dialogue(state, ctx, result),
        Some(Intent::UseItem(index)) => {
            match state.player.use_item(index) {
                Ok(used) => result.push(TickEvent::ItemUsed(used)),
                Err(reason) => result.reject(reason),
            }
            ModeState::Exploration
        }
        Some(Intent::Equip(index)) => {
            match state.player.equip(index) {
                Ok((item, replaced)) => result.push(TickEvent::ItemEquipped { item, replaced }),
                Err(reason) => result.reject(reason),
            }
            ModeState::Exploration
        }
        Some(Intent::Unequip(slot)) => {
            match state.player.unequip(slot) {
                Ok(item) => result.push(TickEvent::ItemUnequipped { item }),
                Err(reason) => result.reject(reason),
            }
            ModeState::Exploration
        }
        Some(Intent::Save) => {
            save_game(state, false, result);
            ModeState::Exploration
        }
        Some(_) => {
            result.reject(RejectReason::NotAvailableInMode);
            ModeState::Exploration
        }
    };

    if matches!(next, ModeState::Exploration) {
        let gameplay = &ctx.config().gameplay;
        if gameplay.autosave {
            state.autosave_timer += delta_time;
            if state.autosave_timer >= gameplay.autosave_interval_seconds {
                save_game(state, true, result);
            }
        }
    }
    next
}

fn move_player<R: Rng>(
    state: &mut GameState,
    ctx: &GameContext,
    direction: Direction,
    delta_time: f64,
    rng: &mut R,
    result: &mut TickResult,
) {
    let (dx, dy) = direction.vector();
    let step = PLAYER_SPEED_PER_SECOND * delta_time;
    let zone = state.world.current_zone;
    let target = WORLD_BOUNDS.clamp(state.player.position.offset(dx * step, dy * step));

    state.player.facing = direction;
    let blocked = ctx.npcs().iter().any(|npc| {
        let def = npc.definition();
        def.zone == zone && def.position.distance_to(&target) < NPC_COLLISION_RADIUS
    });
    if blocked {
        return;
    }
    state.player.is_moving = target != state.player.position;
    state.player.position = target;

    let entered = ctx.zone_at(&state.player.position).id;
    if entered != zone {
        state.world.current_zone = entered;
        if state.world.is_cleared(entered) {
            tracing::debug!(zone = ?entered, "respawning cleared zone");
            state
                .world
                .regenerate_zone(entered, ctx.config().gameplay.difficulty, rng);
        }
        announce_zone(state, result);
    }
}

fn announce_zone(state: &mut GameState, result: &mut TickResult) {
    let zone = get_zone(state.world.current_zone);
    result.push(TickEvent::ZoneEntered { zone: zone.id });
    result.push(TickEvent::Audio(AudioCue::ZoneEntered(zone.music)));
    state.add_message(format!("Entered {}", zone.name));
}

fn start_combat(state: &mut GameState, result: &mut TickResult) -> ModeState {
    let zone = state.world.current_zone;
    let monster = state
        .world
        .nearest_monster_within(zone, &state.player.position, ATTACK_RANGE)
        .and_then(|index| state.world.take_monster(zone, index));
    let Some(monster) = monster else {
        result.reject(RejectReason::NoMonsterInRange);
        return ModeState::Exploration;
    };

    tracing::debug!(monster = %monster.name, level = monster.level, "combat started");
    result.push(TickEvent::CombatStarted {
        monster: monster.name.clone(),
        level: monster.level,
    });
    result.push(TickEvent::Audio(AudioCue::CombatStarted));
    ModeState::Combat(CombatSession::new(monster, zone))
}

fn start_dialogue(state: &mut GameState, ctx: &GameContext, result: &mut TickResult) -> ModeState {
    let Some(npc) = nearest_npc_within(
        ctx.npcs(),
        state.world.current_zone,
        &state.player.position,
        NPC_INTERACTION_RANGE,
    ) else {
        result.reject(RejectReason::NoNpcInRange);
        return ModeState::Exploration;
    };

    // Talking counts before the lines are picked, so a quest finished by
    // this conversation is already reported as done.
    for id in state.quests.update_progress(ActionType::Talk, npc.tag(), 1) {
        quest_completed(result, id);
    }
    let session = DialogueSession::start(npc, &state.quests);
    if let Some(line) = session.current_line() {
        result.push(TickEvent::DialogueLine { npc, line });
    }
    ModeState::Dialogue(session)
}

fn save_game(state: &mut GameState, autosave: bool, result: &mut TickResult) {
    match save::serialize(state) {
        Ok(data) => {
            state.autosave_timer = 0.0;
            tracing::debug!(autosave, bytes = data.len(), "game saved");
            result.push(TickEvent::Saved { data, autosave });
        }
        Err(e) => {
            tracing::warn!(error = %e, "save failed");
            result.reject(RejectReason::SaveFailed);
        }
    }
}

fn quest_completed(result: &mut TickResult, id: String) {
    tracing::info!(quest = %id, "quest objectives complete");
    result.push(TickEvent::QuestCompleted { id });
}

// =============================================================================
// Combat
// =============================================================================

fn tick_combat<R: Rng>(
    state: &mut GameState,
    mut session: CombatSession,
    intent: Option<Intent>,
    delta_time: f64,
    rng: &mut R,
    result: &mut TickResult,
) -> ModeState {
    let action = match intent {
        None => None,
        Some(Intent::Attack) => Some(CombatAction::Attack),
        Some(Intent::UseSkill(index)) => Some(CombatAction::UseSkill(index)),
        Some(Intent::Flee) => Some(CombatAction::Flee),
        Some(Intent::UseItem(index)) => Some(CombatAction::UseItem(index)),
        Some(_) => {
            result.reject(RejectReason::NotAvailableInMode);
            None
        }
    };

    let update = update_combat(&mut session, &mut state.player, action, delta_time, rng);
    if let Some(turn) = update.resolved {
        tracing::debug!(side = ?turn.side, automatic = turn.automatic, "turn resolved");
    }
    result.resolved_turn = update.resolved;
    for event in update.events {
        push_combat_event(result, event);
    }

    match update.outcome {
        CombatOutcome::Ongoing => ModeState::Combat(session),
        CombatOutcome::Fled => {
            state.add_message(format!("Escaped from {}", session.monster.name));
            state.world.return_monster(session.zone, session.monster);
            ModeState::Exploration
        }
        CombatOutcome::Defeat => {
            result.push(TickEvent::Defeat);
            result.push(TickEvent::Audio(AudioCue::Defeat));
            ModeState::GameOver
        }
        CombatOutcome::Victory => {
            let monster = session.monster;
            let report = resolve_victory(&mut state.player, &mut state.quests, &monster, rng);
            state.add_message(format!(
                "Defeated {} (+{} XP, +{} gold)",
                monster.name, report.experience, report.gold
            ));
            result.push(TickEvent::Victory {
                monster: monster.name,
                experience: report.experience,
                gold: report.gold,
                loot: report.loot_kept,
            });
            for item in report.loot_lost {
                result.push(TickEvent::LootLost { item });
            }
            result.push_levelups(report.levelups);
            for id in report.quests_completed {
                quest_completed(result, id);
            }
            result.push(TickEvent::Audio(AudioCue::Victory));
            ModeState::Exploration
        }
    }
}

fn push_combat_event(result: &mut TickResult, event: CombatEvent) {
    match event {
        CombatEvent::PlayerAttack { damage, was_crit } => {
            result.push(TickEvent::PlayerAttack { damage, was_crit })
        }
        CombatEvent::SkillUsed { skill, damage } => {
            result.push(TickEvent::SkillUsed { skill, damage });
            result.push(TickEvent::Audio(AudioCue::SkillUsed(skill.name())));
        }
        CombatEvent::ItemUsed(used) => result.push(TickEvent::ItemUsed(used)),
        CombatEvent::MonsterAttack { damage, special } => {
            result.push(TickEvent::MonsterAttack { damage, special })
        }
        CombatEvent::FleeFailed => result.push(TickEvent::FleeFailed),
        CombatEvent::Fled => result.push(TickEvent::Fled),
        // Reported through the outcome.
        CombatEvent::MonsterDied | CombatEvent::PlayerDied => {}
        CombatEvent::Rejected(reason) => result.reject(reason),
    }
}

// =============================================================================
// Dialogue
// =============================================================================

fn tick_dialogue(
    state: &mut GameState,
    mut session: DialogueSession,
    intent: Option<Intent>,
    result: &mut TickResult,
) -> ModeState {
    match intent {
        None => ModeState::Dialogue(session),
        Some(Intent::AdvanceDialogue) => match session.advance() {
            Advance::Line(line) => {
                result.push(TickEvent::DialogueLine {
                    npc: session.npc,
                    line,
                });
                ModeState::Dialogue(session)
            }
            Advance::Finished => {
                finish_dialogue(state, session.npc, result);
                ModeState::Exploration
            }
        },
        Some(Intent::Cancel) => ModeState::Exploration,
        Some(_) => {
            result.reject(RejectReason::NotAvailableInMode);
            ModeState::Dialogue(session)
        }
    }
}

/// Accepts the NPC's quest if it is on offer, or turns it in if its
/// objectives are done.
fn finish_dialogue(state: &mut GameState, npc: NpcId, result: &mut TickResult) {
    let Some(id) = npc.definition().quest else {
        return;
    };
    match state.quests.status(id) {
        Some(QuestStatus::Available) => {
            if state.quests.accept(id) {
                if let Some(quest) = state.quests.find(id) {
                    let message = format!("Quest accepted: {}", quest.title);
                    state.add_message(message);
                }
                result.push(TickEvent::QuestAccepted { id: id.to_string() });
            }
        }
        Some(QuestStatus::Active { completed: true }) => {
            if let Some(reward) = state.quests.turn_in(id) {
                let (levelups, lost) = grant_reward(&mut state.player, &reward);
                tracing::info!(quest = id, "quest turned in");
                state.add_message(format!(
                    "Quest complete! +{} XP, +{} gold",
                    reward.experience, reward.gold
                ));
                result.push(TickEvent::QuestTurnedIn {
                    id: id.to_string(),
                    reward,
                });
                result.push_levelups(levelups);
                for item in lost {
                    result.push(TickEvent::LootLost { item });
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Side;
    use crate::core::constants::TURN_TIMEOUT_SECONDS;
    use crate::core::geometry::Position;
    use crate::items::EquipmentSlot;
    use crate::quests::SLIME_HUNT;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // =========================================================================
    // Test Helpers
    // =========================================================================

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn exploring() -> (GameState, GameContext) {
        let ctx = GameContext::default();
        let state = GameState::new_game(&ctx, &mut test_rng());
        (state, ctx)
    }

    fn tick(state: &mut GameState, ctx: &GameContext, intent: Option<Intent>) -> TickResult {
        game_tick(state, ctx, intent, 0.1, &mut test_rng())
    }

    fn rejected(result: &TickResult) -> Option<&RejectReason> {
        result.events.iter().find_map(|e| match e {
            TickEvent::ActionRejected { reason } => Some(reason),
            _ => None,
        })
    }

    fn stand_next_to_first_forest_monster(state: &mut GameState) {
        state.world.current_zone = ZoneId::Forest;
        let target = state.world.monsters_in(ZoneId::Forest)[0].position;
        state.player.position = target;
    }

    // =========================================================================
    // Main menu
    // =========================================================================

    #[test]
    fn test_start_enters_village() {
        let ctx = GameContext::default();
        let mut state = GameState::new();
        let result = tick(&mut state, &ctx, Some(Intent::Start));
        assert_eq!(state.game_mode(), GameMode::Exploration);
        assert!(result.events.contains(&TickEvent::ZoneEntered {
            zone: ZoneId::Village
        }));
        assert!(result
            .events
            .contains(&TickEvent::Audio(AudioCue::ZoneEntered("village_theme"))));
        assert!(result.events.contains(&TickEvent::ModeChanged {
            from: GameMode::MainMenu,
            to: GameMode::Exploration
        }));
    }

    #[test]
    fn test_menu_ignores_gameplay_intents() {
        let ctx = GameContext::default();
        let mut state = GameState::new();
        let result = tick(&mut state, &ctx, Some(Intent::Attack));
        assert_eq!(state.game_mode(), GameMode::MainMenu);
        assert_eq!(rejected(&result), Some(&RejectReason::NotAvailableInMode));
        assert_eq!(state.play_time, 0.0);
    }

    #[test]
    fn test_continue_with_corrupt_save_starts_fresh() {
        let ctx = GameContext::default();
        let mut state = GameState::new();
        tick(&mut state, &ctx, Some(Intent::Continue("not a save".into())));
        assert_eq!(state.game_mode(), GameMode::Exploration);
        assert_eq!(state.player.level, 1);
    }

    // =========================================================================
    // Exploration
    // =========================================================================

    #[test]
    fn test_move_scales_with_elapsed_time() {
        let (mut state, ctx) = exploring();
        let start = state.player.position;
        let result = game_tick(
            &mut state,
            &ctx,
            Some(Intent::Move(Direction::Right)),
            0.5,
            &mut test_rng(),
        );
        assert!(rejected(&result).is_none());
        assert_eq!(state.player.position, start.offset(90.0, 0.0));
        assert!(state.player.is_moving);
        assert_eq!(state.player.animation_state(), "walk_right");
    }

    #[test]
    fn test_move_is_clamped_to_world() {
        let (mut state, ctx) = exploring();
        state.player.position = Position::new(5.0, 5.0);
        game_tick(
            &mut state,
            &ctx,
            Some(Intent::Move(Direction::UpLeft)),
            1.0,
            &mut test_rng(),
        );
        assert_eq!(state.player.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn test_npc_blocks_movement() {
        let (mut state, ctx) = exploring();
        let merchant = NpcId::Merchant.definition().position;
        state.player.position = merchant.offset(-25.0, 0.0);
        tick(&mut state, &ctx, Some(Intent::Move(Direction::Right)));
        assert_eq!(state.player.position, merchant.offset(-25.0, 0.0));
        assert!(!state.player.is_moving);
    }

    #[test]
    fn test_crossing_into_forest_announces_zone() {
        let (mut state, ctx) = exploring();
        state.player.position = Position::new(399.0, 100.0);
        let result = tick(&mut state, &ctx, Some(Intent::Move(Direction::Right)));
        assert_eq!(state.world.current_zone, ZoneId::Forest);
        assert!(result
            .events
            .contains(&TickEvent::Audio(AudioCue::ZoneEntered("forest_theme"))));
        assert_eq!(state.messages.back().unwrap(), "Entered Forest");
    }

    #[test]
    fn test_cleared_zone_respawns_on_entry() {
        let (mut state, ctx) = exploring();
        while state.world.take_monster(ZoneId::Forest, 0).is_some() {}
        state.player.position = Position::new(399.0, 100.0);
        tick(&mut state, &ctx, Some(Intent::Move(Direction::Right)));
        assert_eq!(state.world.monsters_in(ZoneId::Forest).len(), 3);
    }

    #[test]
    fn test_attack_without_target_is_rejected() {
        let (mut state, ctx) = exploring();
        let result = tick(&mut state, &ctx, Some(Intent::Attack));
        assert_eq!(state.game_mode(), GameMode::Exploration);
        assert_eq!(rejected(&result), Some(&RejectReason::NoMonsterInRange));
    }

    #[test]
    fn test_attack_in_range_starts_combat() {
        let (mut state, ctx) = exploring();
        stand_next_to_first_forest_monster(&mut state);
        let result = tick(&mut state, &ctx, Some(Intent::Attack));
        assert_eq!(state.game_mode(), GameMode::Combat);
        assert_eq!(state.world.monsters_in(ZoneId::Forest).len(), 2);
        assert!(result
            .events
            .contains(&TickEvent::Audio(AudioCue::CombatStarted)));
        let session = state.combat().unwrap();
        assert_eq!(session.turn, Side::Player);
        assert_eq!(session.zone, ZoneId::Forest);
    }

    #[test]
    fn test_interact_opens_dialogue() {
        let (mut state, ctx) = exploring();
        state.player.position = NpcId::Merchant.definition().position.offset(30.0, 0.0);
        let result = tick(&mut state, &ctx, Some(Intent::Interact));
        assert_eq!(state.game_mode(), GameMode::Dialogue);
        assert!(result.events.contains(&TickEvent::DialogueLine {
            npc: NpcId::Merchant,
            line: "Welcome to my shop, adventurer!"
        }));
    }

    #[test]
    fn test_equip_and_unequip() {
        let (mut state, ctx) = exploring();
        state.player.inventory.add(ItemId::LeatherArmor);
        let result = tick(&mut state, &ctx, Some(Intent::Equip(0)));
        assert!(result.events.contains(&TickEvent::ItemEquipped {
            item: ItemId::LeatherArmor,
            replaced: None
        }));
        let result = tick(&mut state, &ctx, Some(Intent::Unequip(EquipmentSlot::Armor)));
        assert!(result.events.contains(&TickEvent::ItemUnequipped {
            item: ItemId::LeatherArmor
        }));
        let result = tick(&mut state, &ctx, Some(Intent::Unequip(EquipmentSlot::Armor)));
        assert_eq!(rejected(&result), Some(&RejectReason::SlotEmpty));
    }

    #[test]
    fn test_save_intent_emits_text() {
        let (mut state, ctx) = exploring();
        let result = tick(&mut state, &ctx, Some(Intent::Save));
        let data = result
            .events
            .iter()
            .find_map(|e| match e {
                TickEvent::Saved { data, autosave: false } => Some(data.clone()),
                _ => None,
            })
            .unwrap();
        assert!(save::deserialize(&data).is_ok());
    }

    #[test]
    fn test_autosave_fires_on_interval() {
        let (mut state, ctx) = exploring();
        let interval = ctx.config().gameplay.autosave_interval_seconds;
        let quiet = game_tick(&mut state, &ctx, None, interval - 1.0, &mut test_rng());
        assert!(quiet.events.is_empty());
        let result = game_tick(&mut state, &ctx, None, 1.0, &mut test_rng());
        assert!(matches!(
            result.events.as_slice(),
            [TickEvent::Saved { autosave: true, .. }]
        ));
        assert_eq!(state.autosave_timer, 0.0);
    }

    // =========================================================================
    // Combat
    // =========================================================================

    #[test]
    fn test_combat_rejects_exploration_intents() {
        let (mut state, ctx) = exploring();
        stand_next_to_first_forest_monster(&mut state);
        tick(&mut state, &ctx, Some(Intent::Attack));
        let result = tick(&mut state, &ctx, Some(Intent::Save));
        assert_eq!(rejected(&result), Some(&RejectReason::NotAvailableInMode));
        assert_eq!(state.game_mode(), GameMode::Combat);
    }

    #[test]
    fn test_timeout_resolves_automatic_turn() {
        let (mut state, ctx) = exploring();
        stand_next_to_first_forest_monster(&mut state);
        tick(&mut state, &ctx, Some(Intent::Attack));
        let result = game_tick(
            &mut state,
            &ctx,
            None,
            TURN_TIMEOUT_SECONDS + 0.1,
            &mut test_rng(),
        );
        let turn = result.resolved_turn.unwrap();
        assert_eq!(turn.side, Side::Player);
        assert!(turn.automatic);
    }

    #[test]
    fn test_defeat_leads_to_game_over_until_restart() {
        let (mut state, ctx) = exploring();
        stand_next_to_first_forest_monster(&mut state);
        tick(&mut state, &ctx, Some(Intent::Attack));
        state.player.stats.take_damage(state.player.stats.hit_points() - 1);
        if let ModeState::Combat(session) = &mut state.mode {
            session.turn = Side::Monster;
            session.turn_timer = TURN_TIMEOUT_SECONDS;
        }
        let result = tick(&mut state, &ctx, None);
        assert_eq!(state.game_mode(), GameMode::GameOver);
        assert!(result.events.contains(&TickEvent::Audio(AudioCue::Defeat)));

        for _ in 0..10 {
            tick(&mut state, &ctx, None);
        }
        let result = tick(&mut state, &ctx, Some(Intent::Start));
        assert_eq!(rejected(&result), Some(&RejectReason::NotAvailableInMode));
        assert_eq!(state.game_mode(), GameMode::GameOver);

        tick(&mut state, &ctx, Some(Intent::Restart));
        assert_eq!(state.game_mode(), GameMode::Exploration);
        assert_eq!(state.player.stats.hit_points(), state.player.stats.max_hit_points());
    }

    // =========================================================================
    // Dialogue
    // =========================================================================

    fn talk_to_merchant(state: &mut GameState, ctx: &GameContext) {
        state.player.position = NpcId::Merchant.definition().position.offset(0.0, 30.0);
        tick(state, ctx, Some(Intent::Interact));
    }

    #[test]
    fn test_finishing_dialogue_accepts_quest() {
        let (mut state, ctx) = exploring();
        talk_to_merchant(&mut state, &ctx);
        let mut accepted = false;
        for _ in 0..10 {
            let result = tick(&mut state, &ctx, Some(Intent::AdvanceDialogue));
            accepted |= result.events.contains(&TickEvent::QuestAccepted {
                id: SLIME_HUNT.to_string(),
            });
            if state.game_mode() == GameMode::Exploration {
                break;
            }
        }
        assert!(accepted);
        assert_eq!(
            state.quests.status(SLIME_HUNT),
            Some(QuestStatus::Active { completed: false })
        );
    }

    #[test]
    fn test_cancel_never_accepts() {
        let (mut state, ctx) = exploring();
        talk_to_merchant(&mut state, &ctx);
        tick(&mut state, &ctx, Some(Intent::Cancel));
        assert_eq!(state.game_mode(), GameMode::Exploration);
        assert!(state.dialogue().is_none());
        assert_eq!(state.quests.status(SLIME_HUNT), Some(QuestStatus::Available));
    }
}
