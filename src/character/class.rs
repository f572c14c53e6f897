//! Character classes: growth per level-up and the skill unlock table.

use super::skills::SkillId;
use super::stats::PlayerAttribute;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    #[default]
    Warrior,
    Archer,
    Mage,
    Thief,
}

#[derive(Debug)]
pub struct ClassDefinition {
    pub name: &'static str,
    pub hp_per_level: u32,
    pub mp_per_level: u32,
    pub stat_growth: &'static [(PlayerAttribute, f64)],
    /// (unlock level, skill), ascending by level.
    pub skill_unlocks: &'static [(u32, SkillId)],
}

static WARRIOR: ClassDefinition = ClassDefinition {
    name: "Warrior",
    hp_per_level: 20,
    mp_per_level: 5,
    stat_growth: &[(PlayerAttribute::Strength, 2.0), (PlayerAttribute::Defense, 1.0)],
    skill_unlocks: &[
        (1, SkillId::SwordStrike),
        (3, SkillId::PowerStrike),
        (5, SkillId::WarCry),
        (8, SkillId::Shatter),
    ],
};

static ARCHER: ClassDefinition = ClassDefinition {
    name: "Archer",
    hp_per_level: 10,
    mp_per_level: 10,
    stat_growth: &[
        (PlayerAttribute::Dexterity, 3.0),
        (PlayerAttribute::CriticalChance, 0.02),
    ],
    skill_unlocks: &[
        (1, SkillId::QuickShot),
        (3, SkillId::MultiShot),
        (5, SkillId::PoisonArrow),
    ],
};

static MAGE: ClassDefinition = ClassDefinition {
    name: "Mage",
    hp_per_level: 5,
    mp_per_level: 20,
    stat_growth: &[
        (PlayerAttribute::Intelligence, 3.0),
        (PlayerAttribute::MaxManaPoints, 5.0),
    ],
    skill_unlocks: &[
        (1, SkillId::Fireball),
        (3, SkillId::LightningBolt),
        (5, SkillId::MagicBarrier),
        (8, SkillId::IceStorm),
    ],
};

static THIEF: ClassDefinition = ClassDefinition {
    name: "Thief",
    hp_per_level: 8,
    mp_per_level: 12,
    stat_growth: &[
        (PlayerAttribute::Dexterity, 2.0),
        (PlayerAttribute::CriticalChance, 0.03),
        (PlayerAttribute::CriticalMultiplier, 0.1),
    ],
    skill_unlocks: &[
        (1, SkillId::SneakStrike),
        (3, SkillId::SurpriseAttack),
        (5, SkillId::Pickpocket),
    ],
};

impl ClassKind {
    pub fn all() -> [ClassKind; 4] {
        [
            ClassKind::Warrior,
            ClassKind::Archer,
            ClassKind::Mage,
            ClassKind::Thief,
        ]
    }

    pub fn definition(&self) -> &'static ClassDefinition {
        match self {
            ClassKind::Warrior => &WARRIOR,
            ClassKind::Archer => &ARCHER,
            ClassKind::Mage => &MAGE,
            ClassKind::Thief => &THIEF,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    /// Scaling applied on top of the weapon for a basic attack.
    pub fn attack_bonus(&self, strength: u32, dexterity: u32, intelligence: u32) -> f64 {
        match self {
            ClassKind::Warrior => strength as f64 * WARRIOR_STRENGTH_FACTOR,
            ClassKind::Archer => dexterity as f64 * ARCHER_DEXTERITY_FACTOR,
            ClassKind::Mage => intelligence as f64 * MAGE_INTELLIGENCE_FACTOR,
            ClassKind::Thief => dexterity as f64 * THIEF_DEXTERITY_FACTOR,
        }
    }

    /// Skills unlocked at or below `level`, in unlock order.
    pub fn skills_up_to(&self, level: u32) -> impl Iterator<Item = SkillId> {
        self.definition()
            .skill_unlocks
            .iter()
            .filter(move |(unlock, _)| *unlock <= level)
            .map(|(_, skill)| *skill)
    }

    /// Parses a class name case-insensitively.
    pub fn from_name(name: &str) -> Option<ClassKind> {
        ClassKind::all()
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_tables_are_sorted() {
        for class in ClassKind::all() {
            let levels: Vec<u32> = class
                .definition()
                .skill_unlocks
                .iter()
                .map(|(l, _)| *l)
                .collect();
            let mut sorted = levels.clone();
            sorted.sort();
            assert_eq!(levels, sorted, "{} unlocks out of order", class.name());
        }
    }

    #[test]
    fn test_skills_up_to_level() {
        let skills: Vec<_> = ClassKind::Warrior.skills_up_to(4).collect();
        assert_eq!(skills, vec![SkillId::SwordStrike, SkillId::PowerStrike]);
        assert_eq!(ClassKind::Mage.skills_up_to(8).count(), 4);
        assert_eq!(ClassKind::Thief.skills_up_to(0).count(), 0);
    }

    #[test]
    fn test_attack_bonus_per_class() {
        assert_eq!(ClassKind::Warrior.attack_bonus(10, 10, 10), 20.0);
        assert_eq!(ClassKind::Archer.attack_bonus(10, 10, 10), 15.0);
        assert_eq!(ClassKind::Mage.attack_bonus(10, 10, 10), 12.0);
        assert_eq!(ClassKind::Thief.attack_bonus(10, 10, 10), 13.0);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ClassKind::from_name("mage"), Some(ClassKind::Mage));
        assert_eq!(ClassKind::from_name("Paladin"), None);
    }
}
