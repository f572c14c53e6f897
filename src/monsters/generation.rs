use super::types::{LootEntry, Monster, MonsterKind};
use crate::core::config::Difficulty;
use crate::core::geometry::{Position, Rect};
use crate::items::ItemId;
use crate::zones::ZoneDefinition;
use rand::Rng;

/// Picks a uniformly random integer position inside `bounds` (inclusive).
pub fn random_position<R: Rng>(bounds: &Rect, rng: &mut R) -> Position {
    let x = rng.gen_range(bounds.x_min as i64..=bounds.x_max as i64);
    let y = rng.gen_range(bounds.y_min as i64..=bounds.y_max as i64);
    Position::new(x as f64, y as f64)
}

pub fn spawn_monster(
    kind: MonsterKind,
    level: u32,
    position: Position,
    difficulty: Difficulty,
) -> Monster {
    Monster::new(kind, level, position, difficulty)
}

/// Expands a zone's roster into live monsters, in roster order.
pub fn spawn_zone<R: Rng>(zone: &ZoneDefinition, difficulty: Difficulty, rng: &mut R) -> Vec<Monster> {
    zone.roster
        .iter()
        .map(|&(kind, level)| {
            let position = random_position(&zone.bounds, rng);
            spawn_monster(kind, level, position, difficulty)
        })
        .collect()
}

/// Rolls each entry against its own uniform draw in `[0, 1)`. An entry is
/// kept when the draw is below its probability, so 1.0 always drops and
/// 0.0 never does.
pub fn roll_loot<R: Rng>(table: &[LootEntry], rng: &mut R) -> Vec<ItemId> {
    table
        .iter()
        .filter(|entry| rng.gen::<f64>() < entry.probability)
        .map(|entry| entry.item)
        .collect()
}
