//! Headless autoplay driver.
//!
//! Plays the game with a simple scripted policy (take the slime quest, hunt
//! in the forest, turn the quest in) and prints every tick event. Useful for
//! eyeballing balance changes.
//!
//! Usage:
//!   cargo run --bin autoplay -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin autoplay -- --seed 7 --ticks 5000
//!   RUST_LOG=debug cargo run --bin autoplay -- --class mage

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use ycrad::character::ClassKind;
use ycrad::combat::Side;
use ycrad::core::constants::{ATTACK_RANGE, NPC_INTERACTION_RANGE};
use ycrad::core::geometry::Position;
use ycrad::dialogue::NpcId;
use ycrad::items::{ItemKind, Restores};
use ycrad::quests::{QuestStatus, SLIME_HUNT};
use ycrad::zones::ZoneId;
use ycrad::{game_tick, snapshot, Direction, GameConfig, GameContext, GameMode, GameState, Intent};

const TICK_SECONDS: f64 = 0.1;
/// Close enough on one axis to switch to the other.
const AXIS_TOLERANCE: f64 = 5.0;

struct Options {
    seed: u64,
    ticks: u64,
    class: ClassKind,
    config: GameConfig,
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);
    let ctx = GameContext::new(options.config);
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut state = GameState::new();
    let mut bot = Bot::default();

    println!("Autoplay: seed {}, {} ticks, {}", options.seed, options.ticks, options.class.name());

    for tick in 0..options.ticks {
        let intent = bot.choose(&state);
        let fresh = matches!(state.game_mode(), GameMode::MainMenu | GameMode::GameOver);
        let result = game_tick(&mut state, &ctx, intent, TICK_SECONDS, &mut rng);
        if fresh && state.game_mode() == GameMode::Exploration {
            state.player.change_class(options.class);
        }
        if !options.quiet {
            for event in &result.events {
                println!("[{:>6}] {:?}", tick, event);
            }
        }
    }

    let view = snapshot(&state);
    println!();
    println!("Final state:");
    println!("  Mode:      {:?}", view.mode);
    println!("  Zone:      {}", view.zone_name);
    println!("  Level:     {}", view.level);
    println!("  HP:        {}/{}", view.hit_points.0, view.hit_points.1);
    println!("  MP:        {}/{}", view.mana_points.0, view.mana_points.1);
    println!("  Gold:      {}", view.gold);
    println!("  Play time: {:.1}s", state.play_time);
    println!("  Deaths:    {}", bot.deaths);
    for quest in &state.quests.completed {
        println!("  Completed: {}", quest.title);
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        seed: 42,
        ticks: 10_000,
        class: ClassKind::default(),
        config: GameConfig::default(),
        quiet: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.seed = args[i + 1].parse().unwrap_or(42);
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    options.ticks = args[i + 1].parse().unwrap_or(10_000);
                    i += 1;
                }
            }
            "-c" | "--class" => {
                if i + 1 < args.len() {
                    options.class = ClassKind::from_name(&args[i + 1]).unwrap_or_default();
                    i += 1;
                }
            }
            "--config" => {
                if i + 1 < args.len() {
                    match std::fs::read_to_string(&args[i + 1]) {
                        Ok(text) => options.config = GameConfig::from_json_str(&text),
                        Err(e) => eprintln!("could not read {}: {}", args[i + 1], e),
                    }
                    i += 1;
                }
            }
            "-q" | "--quiet" => {
                options.quiet = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }
    options
}

fn print_help() {
    println!("Ycrad autoplay");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin autoplay -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>      Random seed (default: 42)");
    println!("    -t, --ticks <T>     Ticks to play, 0.1s each (default: 10,000)");
    println!("    -c, --class <NAME>  warrior, archer, mage or thief");
    println!("    --config <PATH>     JSON settings file");
    println!("    -q, --quiet         Only print the final summary");
    println!("    -h, --help          Show this help");
}

/// Scripted player. Walks axis-first so it does not clip into NPCs on
/// diagonals, and sidesteps when a move goes nowhere.
#[derive(Default)]
struct Bot {
    last_position: Option<Position>,
    deaths: u32,
}

impl Bot {
    fn choose(&mut self, state: &GameState) -> Option<Intent> {
        match state.game_mode() {
            GameMode::MainMenu => Some(Intent::Start),
            GameMode::GameOver => {
                self.deaths += 1;
                Some(Intent::Restart)
            }
            GameMode::Dialogue => Some(Intent::AdvanceDialogue),
            GameMode::Combat => self.fight(state),
            GameMode::Exploration => self.explore(state),
        }
    }

    fn fight(&self, state: &GameState) -> Option<Intent> {
        let session = state.combat()?;
        if session.turn != Side::Player {
            return None;
        }
        let stats = &state.player.stats;
        if stats.health_ratio() < 0.3 {
            if let Some(index) = find_restorative(state) {
                return Some(Intent::UseItem(index));
            }
        }
        // First skill if it is ready and affordable, otherwise a plain attack.
        match state.player.skill_at(0) {
            Some(skill)
                if !state.player.is_on_cooldown(skill)
                    && stats.mana_points() >= skill.definition().mana_cost =>
            {
                Some(Intent::UseSkill(0))
            }
            _ => Some(Intent::Attack),
        }
    }

    fn explore(&mut self, state: &GameState) -> Option<Intent> {
        let here = state.player.position;
        let stuck = self.last_position == Some(here);
        let intent = next_exploration_step(state, stuck);
        self.last_position = matches!(intent, Some(Intent::Move(_))).then_some(here);
        intent
    }
}

fn next_exploration_step(state: &GameState, stuck: bool) -> Option<Intent> {
    let here = state.player.position;

    let wants_merchant = matches!(
        state.quests.status(SLIME_HUNT),
        Some(QuestStatus::Available) | Some(QuestStatus::Active { completed: true })
    );
    if wants_merchant {
        let merchant = NpcId::Merchant.definition().position;
        if state.world.current_zone == ZoneId::Village
            && here.distance_to(&merchant) <= NPC_INTERACTION_RANGE
        {
            return Some(Intent::Interact);
        }
        return walk(here, merchant.offset(0.0, NPC_INTERACTION_RANGE - 5.0), stuck);
    }

    if state.world.current_zone != ZoneId::Forest {
        return walk(here, Position::new(500.0, 60.0), stuck);
    }
    let nearest = state
        .world
        .monsters_in(ZoneId::Forest)
        .iter()
        .min_by(|a, b| {
            a.position
                .distance_to(&here)
                .total_cmp(&b.position.distance_to(&here))
        });
    match nearest {
        Some(monster) if monster.position.distance_to(&here) < ATTACK_RANGE => {
            Some(Intent::Attack)
        }
        Some(monster) => walk(here, monster.position, stuck),
        // Cleared: step back to the village so the forest respawns.
        None => walk(here, Position::new(300.0, 60.0), stuck),
    }
}

fn find_restorative(state: &GameState) -> Option<usize> {
    state.player.inventory.items().iter().position(|item| {
        matches!(
            item.definition().kind,
            ItemKind::Consumable(Restores::Health(_))
        )
    })
}

fn walk(from: Position, to: Position, stuck: bool) -> Option<Intent> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if stuck {
        return Some(Intent::Move(if dy > 0.0 { Direction::Up } else { Direction::Down }));
    }
    let direction = if dx.abs() > AXIS_TOLERANCE {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy.abs() > AXIS_TOLERANCE {
        if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    } else {
        return None;
    };
    Some(Intent::Move(direction))
}
