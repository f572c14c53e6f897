//! Combat driven end to end through `game_tick`: starting an encounter,
//! the turn timer, victory payouts, flight, and seeded determinism.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ycrad::combat::Side;
use ycrad::core::config::Difficulty;
use ycrad::core::constants::TURN_TIMEOUT_SECONDS;
use ycrad::core::geometry::Position;
use ycrad::monsters::{Monster, MonsterKind};
use ycrad::zones::{MonsterSnapshot, World, ZoneId, ZoneSnapshot};
use ycrad::{game_tick, AudioCue, GameContext, GameMode, GameState, Intent, TickEvent};

const ARENA: Position = Position { x: 600.0, y: 250.0 };

/// Fresh game standing next to a single monster in the forest, with crits off.
fn arena(kind: MonsterKind, level: u32) -> (GameState, GameContext) {
    let ctx = GameContext::default();
    let mut state = GameState::new_game(&ctx, &mut ChaCha8Rng::seed_from_u64(42));
    let hit_points = Monster::new(kind, level, ARENA, Difficulty::Normal).max_hit_points();
    state.world = World::from_snapshots(
        ZoneId::Forest,
        &[ZoneSnapshot {
            zone: ZoneId::Forest,
            monsters: vec![MonsterSnapshot {
                kind,
                level,
                position: ARENA,
                hit_points,
            }],
        }],
        Difficulty::Normal,
    );
    state.player.position = ARENA.offset(10.0, 0.0);
    state.player.stats.set_critical_chance(0.0);
    (state, ctx)
}

#[test]
fn test_slime_dies_in_one_hit() {
    let (mut state, ctx) = arena(MonsterKind::Slime, 1);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    assert_eq!(state.game_mode(), GameMode::Combat);
    assert_eq!(state.combat().unwrap().monster.hit_points(), 23);

    let result = game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    assert!(result.events.contains(&TickEvent::PlayerAttack {
        damage: 25,
        was_crit: false
    }));
    assert_eq!(state.game_mode(), GameMode::Exploration);
    assert!(result.events.contains(&TickEvent::Audio(AudioCue::Victory)));
    assert!(state.player.experience >= 10);
    assert_eq!(state.player.experience, 15);
    assert_eq!(state.player.gold, 56);
    assert!(state.world.monsters_in(ZoneId::Forest).is_empty());
}

#[test]
fn test_turn_times_out_after_two_seconds() {
    let (mut state, ctx) = arena(MonsterKind::Korvash, 2);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);

    let first = game_tick(&mut state, &ctx, None, 1.0, &mut rng);
    assert!(first.resolved_turn.is_none());
    let exactly_two = game_tick(&mut state, &ctx, None, TURN_TIMEOUT_SECONDS - 1.0, &mut rng);
    assert!(exactly_two.resolved_turn.is_none());

    let resolved = game_tick(&mut state, &ctx, None, 0.1, &mut rng)
        .resolved_turn
        .unwrap();
    assert_eq!(resolved.side, Side::Player);
    assert!(resolved.automatic);
    assert_eq!(state.combat().unwrap().turn, Side::Monster);

    // The monster's turn times out the same way.
    let resolved = game_tick(&mut state, &ctx, None, TURN_TIMEOUT_SECONDS + 0.1, &mut rng)
        .resolved_turn
        .unwrap();
    assert_eq!(resolved.side, Side::Monster);
    assert!(state.player.stats.hit_points() < state.player.stats.max_hit_points());
}

#[test]
fn test_only_one_turn_per_tick() {
    let (mut state, ctx) = arena(MonsterKind::Korvash, 2);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);

    // A huge delta still resolves a single turn.
    let result = game_tick(&mut state, &ctx, None, 60.0, &mut rng);
    let attacks = result
        .events
        .iter()
        .filter(|e| matches!(e, TickEvent::PlayerAttack { .. } | TickEvent::MonsterAttack { .. }))
        .count();
    assert_eq!(attacks, 1);
}

#[test]
fn test_fleeing_returns_monster_with_its_wounds() {
    let (mut state, ctx) = arena(MonsterKind::Korvash, 2);
    // Every hit is reduced to the minimum so the run cannot end in defeat.
    state.player.stats.defense = 1_000;
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    let wounded = state.combat().unwrap().monster.hit_points();
    assert!(wounded < 200);

    let mut fled = false;
    for _ in 0..200 {
        let Some(session) = state.combat() else {
            break;
        };
        let result = if session.turn == Side::Player {
            game_tick(&mut state, &ctx, Some(Intent::Flee), 0.1, &mut rng)
        } else {
            game_tick(&mut state, &ctx, None, TURN_TIMEOUT_SECONDS + 0.1, &mut rng)
        };
        fled |= result.events.contains(&TickEvent::Fled);
    }
    assert!(fled);
    assert_eq!(state.game_mode(), GameMode::Exploration);
    let monsters = state.world.monsters_in(ZoneId::Forest);
    assert_eq!(monsters.len(), 1);
    assert_eq!(monsters[0].hit_points(), wounded);
}

#[test]
fn test_actions_rejected_on_monster_turn() {
    let (mut state, ctx) = arena(MonsterKind::Korvash, 2);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    assert_eq!(state.combat().unwrap().turn, Side::Monster);

    let hp_before = state.combat().unwrap().monster.hit_points();
    let result = game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    assert!(result.events.contains(&TickEvent::ActionRejected {
        reason: ycrad::RejectReason::NotPlayerTurn
    }));
    assert_eq!(state.combat().unwrap().monster.hit_points(), hp_before);
}

#[test]
fn test_skill_use_emits_cue_and_sets_cooldown() {
    let (mut state, ctx) = arena(MonsterKind::Korvash, 2);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    let result = game_tick(&mut state, &ctx, Some(Intent::UseSkill(0)), 0.1, &mut rng);
    assert!(result
        .events
        .contains(&TickEvent::Audio(AudioCue::SkillUsed("Sword Strike"))));
    let skill = state.player.skill_at(0).unwrap();
    assert!(state.player.is_on_cooldown(skill));
}

/// Same seed, same intents: same events and same final state.
#[test]
fn test_seeded_runs_are_identical() {
    fn run(seed: u64) -> (Vec<TickEvent>, GameState) {
        let (mut state, ctx) = arena(MonsterKind::Korvash, 2);
        state.player.stats.set_critical_chance(0.3);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut events = Vec::new();
        let mut script = vec![Some(Intent::Attack)];
        script.extend(std::iter::repeat(None).take(60));
        for intent in script {
            let result = game_tick(&mut state, &ctx, intent, 0.7, &mut rng);
            events.extend(result.events);
        }
        (events, state)
    }

    let (events_a, state_a) = run(99);
    let (events_b, state_b) = run(99);
    assert!(!events_a.is_empty());
    assert_eq!(events_a, events_b);
    assert_eq!(state_a, state_b);
}
