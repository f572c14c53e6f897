use super::constants::MESSAGE_LOG_CAPACITY;
use super::context::GameContext;
use crate::character::{ClassKind, Player};
use crate::combat::CombatSession;
use crate::dialogue::DialogueSession;
use crate::quests::QuestTracker;
use crate::save::SaveData;
use crate::zones::World;
use rand::Rng;
use std::collections::VecDeque;

/// Which mode is active, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    MainMenu,
    Exploration,
    Combat,
    Dialogue,
    GameOver,
}

/// The active mode together with the data scoped to it. Leaving a mode
/// drops its session.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeState {
    MainMenu,
    Exploration,
    Combat(CombatSession),
    Dialogue(DialogueSession),
    GameOver,
}

impl ModeState {
    pub fn mode(&self) -> GameMode {
        match self {
            ModeState::MainMenu => GameMode::MainMenu,
            ModeState::Exploration => GameMode::Exploration,
            ModeState::Combat(_) => GameMode::Combat,
            ModeState::Dialogue(_) => GameMode::Dialogue,
            ModeState::GameOver => GameMode::GameOver,
        }
    }
}

pub const DEFAULT_PLAYER_NAME: &str = "Hero";

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub mode: ModeState,
    pub player: Player,
    pub world: World,
    pub quests: QuestTracker,
    /// Recent exploration messages, newest last.
    pub messages: VecDeque<String>,
    /// Seconds of exploration since the last autosave.
    pub autosave_timer: f64,
    pub play_time: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Main menu with an empty world. Nothing is generated until `Start`.
    pub fn new() -> Self {
        Self {
            mode: ModeState::MainMenu,
            player: Player::new(DEFAULT_PLAYER_NAME, ClassKind::default()),
            world: World::default(),
            quests: QuestTracker::new(),
            messages: VecDeque::with_capacity(MESSAGE_LOG_CAPACITY),
            autosave_timer: 0.0,
            play_time: 0.0,
        }
    }

    /// Fresh player, freshly spawned zones, full quest catalog.
    pub fn new_game(ctx: &GameContext, rng: &mut impl Rng) -> Self {
        Self {
            mode: ModeState::Exploration,
            world: World::generate(ctx.config().gameplay.difficulty, rng),
            ..Self::new()
        }
    }

    pub fn from_save(data: SaveData, ctx: &GameContext) -> Self {
        Self {
            mode: ModeState::Exploration,
            player: data.player,
            world: World::from_snapshots(
                data.current_zone,
                &data.zones,
                ctx.config().gameplay.difficulty,
            ),
            quests: data.quests,
            play_time: data.play_time,
            ..Self::new()
        }
    }

    pub fn game_mode(&self) -> GameMode {
        self.mode.mode()
    }

    pub fn combat(&self) -> Option<&CombatSession> {
        match &self.mode {
            ModeState::Combat(session) => Some(session),
            _ => None,
        }
    }

    pub fn dialogue(&self) -> Option<&DialogueSession> {
        match &self.mode {
            ModeState::Dialogue(session) => Some(session),
            _ => None,
        }
    }

    /// Record an exploration message, keeping only the most recent ones.
    pub fn add_message(&mut self, message: String) {
        if self.messages.len() >= MESSAGE_LOG_CAPACITY {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ZoneId;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_state_is_main_menu() {
        let state = GameState::new();
        assert_eq!(state.game_mode(), GameMode::MainMenu);
        assert!(state.combat().is_none());
        assert!(state.world.monsters_in(ZoneId::Forest).is_empty());
    }

    #[test]
    fn test_new_game_spawns_world() {
        let ctx = GameContext::default();
        let state = GameState::new_game(&ctx, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(state.game_mode(), GameMode::Exploration);
        assert_eq!(state.world.monsters_in(ZoneId::Forest).len(), 3);
        assert_eq!(state.quests.available.len(), 4);
    }

    #[test]
    fn test_message_log_is_bounded() {
        let mut state = GameState::new();
        for i in 0..12 {
            state.add_message(format!("message {}", i));
        }
        assert_eq!(state.messages.len(), MESSAGE_LOG_CAPACITY);
        assert_eq!(state.messages.front().unwrap(), "message 7");
        assert_eq!(state.messages.back().unwrap(), "message 11");
    }
}
