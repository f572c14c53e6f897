//! Live world: the current zone and the monsters standing in each zone.

use super::data::{get_all_zones, get_zone, ZoneId};
use crate::core::config::Difficulty;
use crate::core::geometry::Position;
use crate::monsters::{spawn_monster, spawn_zone, Monster, MonsterKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted form of one idle monster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterSnapshot {
    pub kind: MonsterKind,
    pub level: u32,
    pub position: Position,
    pub hit_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSnapshot {
    pub zone: ZoneId,
    pub monsters: Vec<MonsterSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    pub current_zone: ZoneId,
    monsters: BTreeMap<ZoneId, Vec<Monster>>,
}

impl World {
    /// Spawns every zone's roster.
    pub fn generate<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let monsters = get_all_zones()
            .iter()
            .map(|zone| (zone.id, spawn_zone(zone, difficulty, rng)))
            .collect();
        Self {
            current_zone: ZoneId::default(),
            monsters,
        }
    }

    pub fn regenerate_zone<R: Rng>(&mut self, zone: ZoneId, difficulty: Difficulty, rng: &mut R) {
        self.monsters
            .insert(zone, spawn_zone(get_zone(zone), difficulty, rng));
    }

    pub fn monsters_in(&self, zone: ZoneId) -> &[Monster] {
        self.monsters.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when the zone's roster has monsters and all of them are gone.
    pub fn is_cleared(&self, zone: ZoneId) -> bool {
        !get_zone(zone).roster.is_empty() && self.monsters_in(zone).is_empty()
    }

    /// Index of the nearest monster strictly closer than `range`.
    /// Ties go to the earliest one in roster order.
    pub fn nearest_monster_within(&self, zone: ZoneId, pos: &Position, range: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, monster) in self.monsters_in(zone).iter().enumerate() {
            let distance = monster.position.distance_to(pos);
            if distance >= range {
                continue;
            }
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Removes a monster from its zone so a combat session can own it.
    pub fn take_monster(&mut self, zone: ZoneId, index: usize) -> Option<Monster> {
        let list = self.monsters.get_mut(&zone)?;
        (index < list.len()).then(|| list.remove(index))
    }

    /// Puts a monster back after a successful flee, keeping its current health.
    pub fn return_monster(&mut self, zone: ZoneId, monster: Monster) {
        self.monsters.entry(zone).or_default().push(monster);
    }

    pub fn snapshots(&self) -> Vec<ZoneSnapshot> {
        self.monsters
            .iter()
            .map(|(zone, monsters)| ZoneSnapshot {
                zone: *zone,
                monsters: monsters
                    .iter()
                    .map(|m| MonsterSnapshot {
                        kind: m.kind,
                        level: m.level,
                        position: m.position,
                        hit_points: m.hit_points(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Rebuilds live monsters from snapshots. Zones absent from the save are
    /// left empty; dead snapshots are dropped.
    pub fn from_snapshots(current_zone: ZoneId, snapshots: &[ZoneSnapshot], difficulty: Difficulty) -> Self {
        let mut monsters: BTreeMap<ZoneId, Vec<Monster>> = BTreeMap::new();
        for snapshot in snapshots {
            let list = monsters.entry(snapshot.zone).or_default();
            for saved in &snapshot.monsters {
                if saved.hit_points == 0 {
                    continue;
                }
                let mut monster = spawn_monster(saved.kind, saved.level, saved.position, difficulty);
                monster.set_hit_points(saved.hit_points);
                list.push(monster);
            }
        }
        Self {
            current_zone,
            monsters,
        }
    }
}
