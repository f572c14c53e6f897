use super::config::GameConfig;
use super::geometry::Position;
use crate::dialogue::NpcId;
use crate::zones::{get_all_zones, get_zone, ZoneDefinition, ZoneId};

/// Read-only data every tick needs: settings plus the zone and NPC catalogs.
/// Built once at startup and passed by reference.
#[derive(Debug)]
pub struct GameContext {
    config: GameConfig,
    zones: &'static [ZoneDefinition],
    npcs: [NpcId; 5],
}

impl GameContext {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            zones: get_all_zones(),
            npcs: NpcId::all(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn zones(&self) -> &'static [ZoneDefinition] {
        self.zones
    }

    pub fn npcs(&self) -> &[NpcId] {
        &self.npcs
    }

    /// First zone whose rectangle contains `pos`; the default zone when none does.
    pub fn zone_at(&self, pos: &Position) -> &'static ZoneDefinition {
        self.zones
            .iter()
            .find(|zone| zone.bounds.contains(pos))
            .unwrap_or_else(|| get_zone(ZoneId::default()))
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_at() {
        let ctx = GameContext::default();
        let at = |x, y| ctx.zone_at(&Position::new(x, y)).id;
        assert_eq!(at(100.0, 100.0), ZoneId::Village);
        assert_eq!(at(600.0, 100.0), ZoneId::Forest);
        assert_eq!(at(100.0, 500.0), ZoneId::Marsh);
        // Shared edges resolve to the first zone listed.
        assert_eq!(at(400.0, 300.0), ZoneId::Village);
        // Uncovered area falls back to the village.
        assert_eq!(at(700.0, 500.0), ZoneId::Village);
    }

    #[test]
    fn test_catalogs_are_complete() {
        let ctx = GameContext::default();
        assert_eq!(ctx.zones().len(), 3);
        assert_eq!(ctx.npcs().len(), 5);
    }
}
