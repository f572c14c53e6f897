//! Read-only snapshot handed to the renderer each frame.

use super::game_state::{GameMode, GameState};
use super::geometry::Position;
use crate::combat::{CombatLogEntry, Side};
use crate::dialogue::NpcId;
use crate::monsters::MonsterKind;
use crate::zones::{get_zone, ZoneId};

#[derive(Debug, Clone, PartialEq)]
pub struct MonsterView {
    pub kind: MonsterKind,
    pub position: Position,
    pub health_ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CombatView {
    pub monster_name: String,
    pub monster_level: u32,
    pub monster_health_ratio: f64,
    pub player_turn: bool,
    /// Oldest first, at most ten entries.
    pub log: Vec<CombatLogEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueView {
    pub npc: NpcId,
    pub speaker: &'static str,
    pub line: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub mode: GameMode,
    pub zone: ZoneId,
    pub zone_name: &'static str,
    pub player_position: Position,
    pub animation_state: String,
    pub hit_points: (u32, u32),
    pub mana_points: (u32, u32),
    pub level: u32,
    pub gold: u64,
    /// Monsters standing in the current zone.
    pub monsters: Vec<MonsterView>,
    pub combat: Option<CombatView>,
    pub dialogue: Option<DialogueView>,
    pub messages: Vec<String>,
    /// One block of lines per active quest.
    pub quests: Vec<Vec<String>>,
}

pub fn snapshot(state: &GameState) -> RenderSnapshot {
    let zone = state.world.current_zone;
    let stats = &state.player.stats;

    let monsters = state
        .world
        .monsters_in(zone)
        .iter()
        .map(|m| MonsterView {
            kind: m.kind,
            position: m.position,
            health_ratio: m.health_ratio(),
        })
        .collect();

    let combat = state.combat().map(|session| CombatView {
        monster_name: session.monster.name.clone(),
        monster_level: session.monster.level,
        monster_health_ratio: session.monster.health_ratio(),
        player_turn: session.turn == Side::Player,
        log: session.log.iter().cloned().collect(),
    });

    let dialogue = state.dialogue().map(|session| DialogueView {
        npc: session.npc,
        speaker: session.npc.definition().name,
        line: session.current_line(),
    });

    RenderSnapshot {
        mode: state.game_mode(),
        zone,
        zone_name: get_zone(zone).name,
        player_position: state.player.position,
        animation_state: state.player.animation_state(),
        hit_points: (stats.hit_points(), stats.max_hit_points()),
        mana_points: (stats.mana_points(), stats.max_mana_points()),
        level: state.player.level,
        gold: state.player.gold,
        monsters,
        combat,
        dialogue,
        messages: state.messages.iter().cloned().collect(),
        quests: state.quests.active.iter().map(|q| q.summary_lines()).collect(),
    }
}
