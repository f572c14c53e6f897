//! Mode machine, persistence through the tick API, and invariants that must
//! hold after any sequence of intents.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ycrad::character::SkillId;
use ycrad::core::geometry::Position;
use ycrad::dialogue::NpcId;
use ycrad::items::{EquipmentSlot, ItemId};
use ycrad::save;
use ycrad::zones::ZoneId;
use ycrad::{
    game_tick, snapshot, Direction, GameConfig, GameContext, GameMode, GameState, Intent,
    TickEvent,
};

fn started() -> (GameState, GameContext, ChaCha8Rng) {
    let ctx = GameContext::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut state = GameState::new();
    game_tick(&mut state, &ctx, Some(Intent::Start), 0.1, &mut rng);
    (state, ctx, rng)
}

fn saved_text(events: &[TickEvent]) -> Option<String> {
    events.iter().find_map(|e| match e {
        TickEvent::Saved { data, .. } => Some(data.clone()),
        _ => None,
    })
}

#[test]
fn test_main_menu_waits_for_start() {
    let ctx = GameContext::default();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut state = GameState::new();
    for _ in 0..50 {
        let result = game_tick(&mut state, &ctx, None, 0.5, &mut rng);
        assert!(result.events.is_empty());
    }
    assert_eq!(state.game_mode(), GameMode::MainMenu);
    assert_eq!(state.play_time, 0.0);
}

#[test]
fn test_mode_round_trip() {
    let (mut state, ctx, mut rng) = started();
    assert_eq!(state.game_mode(), GameMode::Exploration);
    assert_eq!(state.player.position, Position::new(400.0, 300.0));

    // Exploration -> Dialogue -> Exploration
    state.player.position = NpcId::Innkeeper.definition().position.offset(40.0, 0.0);
    let result = game_tick(&mut state, &ctx, Some(Intent::Interact), 0.1, &mut rng);
    assert!(result.events.contains(&TickEvent::ModeChanged {
        from: GameMode::Exploration,
        to: GameMode::Dialogue
    }));
    assert!(snapshot(&state).dialogue.is_some());
    game_tick(&mut state, &ctx, Some(Intent::Cancel), 0.1, &mut rng);
    assert_eq!(state.game_mode(), GameMode::Exploration);
    assert!(snapshot(&state).dialogue.is_none());

    // Walk into the forest; the zone change is announced once.
    state.player.position = Position::new(390.0, 100.0);
    let mut zone_events = 0;
    for _ in 0..5 {
        let result = game_tick(
            &mut state,
            &ctx,
            Some(Intent::Move(Direction::Right)),
            0.1,
            &mut rng,
        );
        zone_events += result
            .events
            .iter()
            .filter(|e| matches!(e, TickEvent::ZoneEntered { .. }))
            .count();
    }
    assert_eq!(state.world.current_zone, ZoneId::Forest);
    assert_eq!(zone_events, 1);
}

#[test]
fn test_dialogue_rejects_combat_intents() {
    let (mut state, ctx, mut rng) = started();
    state.player.position = NpcId::Merchant.definition().position.offset(0.0, 30.0);
    game_tick(&mut state, &ctx, Some(Intent::Interact), 0.1, &mut rng);
    let line = state.dialogue().unwrap().line_index();
    let result = game_tick(&mut state, &ctx, Some(Intent::Attack), 0.1, &mut rng);
    assert!(matches!(
        result.events.as_slice(),
        [TickEvent::ActionRejected { .. }]
    ));
    assert_eq!(state.dialogue().unwrap().line_index(), line);
}

#[test]
fn test_save_and_continue_restores_player() {
    let (mut state, ctx, mut rng) = started();
    state.player.inventory.add(ItemId::SmallSword);
    game_tick(&mut state, &ctx, Some(Intent::Equip(0)), 0.1, &mut rng);
    state.player.start_cooldown(SkillId::PowerStrike, 2.25);
    state.player.stats.take_damage(17);
    state.player.gold = 777;

    let result = game_tick(&mut state, &ctx, Some(Intent::Save), 0.1, &mut rng);
    let text = saved_text(&result.events).unwrap();

    let mut restored = GameState::new();
    game_tick(&mut restored, &ctx, Some(Intent::Continue(text)), 0.1, &mut rng);
    assert_eq!(restored.game_mode(), GameMode::Exploration);
    assert_eq!(restored.player, state.player);
    assert_eq!(
        restored.player.equipment.get(EquipmentSlot::Weapon),
        Some(ItemId::SmallSword)
    );
    assert!(restored.player.is_on_cooldown(SkillId::PowerStrike));
    assert_eq!(restored.quests, state.quests);
    assert_eq!(restored.world.current_zone, state.world.current_zone);
    assert_eq!(
        restored.world.monsters_in(ZoneId::Marsh),
        state.world.monsters_in(ZoneId::Marsh)
    );
}

#[test]
fn test_tampered_save_starts_fresh() {
    let (mut state, ctx, mut rng) = started();
    state.player.gold = 777;
    let result = game_tick(&mut state, &ctx, Some(Intent::Save), 0.1, &mut rng);
    let text = saved_text(&result.events).unwrap().replace("777", "778");
    assert!(matches!(
        save::deserialize(&text),
        Err(save::SaveError::ChecksumMismatch)
    ));

    let mut restored = GameState::new();
    game_tick(&mut restored, &ctx, Some(Intent::Continue(text)), 0.1, &mut rng);
    assert_eq!(restored.game_mode(), GameMode::Exploration);
    assert_eq!(restored.player.gold, 50);
}

#[test]
fn test_autosave_respects_config() {
    let mut config = GameConfig::from_json_str(r#"{"gameplay": {"autosave": false}}"#);
    let ctx = GameContext::new(config.clone());
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut state = GameState::new_game(&ctx, &mut rng);
    let result = game_tick(&mut state, &ctx, None, 10_000.0, &mut rng);
    assert!(saved_text(&result.events).is_none());

    config.gameplay.autosave = true;
    config.gameplay.autosave_interval_seconds = 1.0;
    config.clamp();
    let ctx = GameContext::new(config);
    let mut saves = 0;
    for _ in 0..100 {
        let result = game_tick(&mut state, &ctx, None, 1.0, &mut rng);
        saves += usize::from(saved_text(&result.events).is_some());
    }
    // The interval is clamped up to ten seconds.
    assert_eq!(saves, 10);
}

/// Random intents against a seeded game: pools and ratios stay in range and
/// quest lists stay disjoint no matter what.
#[test]
fn test_invariants_hold_under_random_play() {
    let (mut state, ctx, mut rng) = started();
    let mut chooser = ChaCha8Rng::seed_from_u64(7);
    state.player.change_class(ycrad::character::ClassKind::Mage);

    let directions = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];
    for _ in 0..3_000 {
        // Bias toward monsters so combat actually happens.
        if state.game_mode() == GameMode::Exploration && chooser.gen_bool(0.02) {
            let zone = state.world.current_zone;
            if let Some(monster) = state.world.monsters_in(zone).first() {
                state.player.position = monster.position;
            }
        }
        let intent = match chooser.gen_range(0..14) {
            0 => None,
            1 => Some(Intent::Move(directions[chooser.gen_range(0..directions.len())])),
            2 | 3 => Some(Intent::Attack),
            4 | 5 => Some(Intent::UseSkill(chooser.gen_range(0..4))),
            6 => Some(Intent::Flee),
            7 => Some(Intent::UseItem(chooser.gen_range(0..3))),
            8 => Some(Intent::Equip(chooser.gen_range(0..3))),
            9 => Some(Intent::Interact),
            10 => Some(Intent::AdvanceDialogue),
            11 => Some(Intent::Cancel),
            12 => Some(Intent::Restart),
            _ => Some(Intent::Move(Direction::Right)),
        };
        let delta = chooser.gen_range(0.05..0.8);
        game_tick(&mut state, &ctx, intent, delta, &mut rng);

        let stats = &state.player.stats;
        assert!(stats.hit_points() <= stats.max_hit_points());
        assert!(stats.mana_points() <= stats.max_mana_points());
        assert!((0.0..=1.0).contains(&stats.critical_chance()));
        assert!(stats.critical_multiplier() >= 1.0);
        assert!(state.player.level >= 1);
        assert!(state.player.experience < state.player.experience_to_next_level);
        assert!(state.player.inventory.len() <= 20);
        assert!(state.player.cooldowns().all(|(_, remaining)| remaining > 0.0));

        let pos = state.player.position;
        assert!((0.0..=800.0).contains(&pos.x) && (0.0..=600.0).contains(&pos.y));

        let quests = &state.quests;
        for quest in &quests.available {
            assert!(!quests.active.iter().any(|q| q.id == quest.id));
            assert!(!quests.completed.iter().any(|q| q.id == quest.id));
        }
        for quest in &quests.active {
            assert!(!quests.completed.iter().any(|q| q.id == quest.id));
        }

        if let Some(session) = state.combat() {
            assert!(session.log.len() <= 10);
            assert!(session.monster.hit_points() <= session.monster.max_hit_points());
        }
        assert!(state.messages.len() <= 5);
    }
}
