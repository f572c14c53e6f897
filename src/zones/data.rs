//! Zone definitions: bounds, monster roster, NPCs and music cue.

use crate::core::geometry::Rect;
use crate::dialogue::NpcId;
use crate::monsters::MonsterKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum ZoneId {
    #[default]
    Village,
    Forest,
    Marsh,
}

#[derive(Debug)]
pub struct ZoneDefinition {
    pub id: ZoneId,
    pub name: &'static str,
    pub bounds: Rect,
    /// Monster seeds as (kind, level), expanded at spawn time.
    pub roster: &'static [(MonsterKind, u32)],
    pub npcs: &'static [NpcId],
    pub music: &'static str,
}

static ZONES: [ZoneDefinition; 3] = [
    ZoneDefinition {
        id: ZoneId::Village,
        name: "Village",
        bounds: Rect::new(0.0, 400.0, 0.0, 300.0),
        roster: &[],
        npcs: &[NpcId::Merchant, NpcId::Blacksmith, NpcId::Innkeeper],
        music: "village_theme",
    },
    ZoneDefinition {
        id: ZoneId::Forest,
        name: "Forest",
        bounds: Rect::new(400.0, 800.0, 0.0, 300.0),
        roster: &[
            (MonsterKind::Slime, 1),
            (MonsterKind::Rat, 1),
            (MonsterKind::Slime, 2),
        ],
        npcs: &[NpcId::Hunter],
        music: "forest_theme",
    },
    ZoneDefinition {
        id: ZoneId::Marsh,
        name: "Marsh",
        bounds: Rect::new(0.0, 400.0, 300.0, 600.0),
        roster: &[
            (MonsterKind::Slime, 3),
            (MonsterKind::Rat, 4),
            (MonsterKind::Slime, 5),
            (MonsterKind::Korvash, 2),
        ],
        npcs: &[NpcId::Hermit],
        music: "marsh_theme",
    },
];

/// Returns all zones in lookup order.
pub fn get_all_zones() -> &'static [ZoneDefinition] {
    &ZONES
}

pub fn get_zone(id: ZoneId) -> &'static ZoneDefinition {
    match id {
        ZoneId::Village => &ZONES[0],
        ZoneId::Forest => &ZONES[1],
        ZoneId::Marsh => &ZONES[2],
    }
}
