//! Skill catalog. Every skill is a closed enum variant with a static definition.

use super::stats::PlayerAttribute;
use serde::{Deserialize, Serialize};

/// Monster attributes a debuff may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterAttribute {
    HitPoints,
    MaxHitPoints,
    Damage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillEffect {
    /// Applied to the caster.
    Buff {
        attribute: PlayerAttribute,
        delta: f64,
    },
    /// Applied to the target.
    Debuff {
        attribute: MonsterAttribute,
        delta: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub id: SkillId,
    pub name: &'static str,
    pub mana_cost: u32,
    /// Added to twice the caster's level. Zero for pure buffs.
    pub base_damage: u32,
    pub cooldown_seconds: f64,
    pub effects: &'static [SkillEffect],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillId {
    SwordStrike,
    PowerStrike,
    WarCry,
    Shatter,
    QuickShot,
    MultiShot,
    PoisonArrow,
    Fireball,
    LightningBolt,
    MagicBarrier,
    IceStorm,
    SneakStrike,
    SurpriseAttack,
    Pickpocket,
}

const POWER_STRIKE_EFFECTS: &[SkillEffect] = &[SkillEffect::Debuff {
    attribute: MonsterAttribute::Damage,
    delta: -5.0,
}];

const WAR_CRY_EFFECTS: &[SkillEffect] = &[
    SkillEffect::Buff {
        attribute: PlayerAttribute::Strength,
        delta: 5.0,
    },
    SkillEffect::Buff {
        attribute: PlayerAttribute::MaxHitPoints,
        delta: 20.0,
    },
];

const POISON_ARROW_EFFECTS: &[SkillEffect] = &[SkillEffect::Debuff {
    attribute: MonsterAttribute::HitPoints,
    delta: -5.0,
}];

const MAGIC_BARRIER_EFFECTS: &[SkillEffect] = &[SkillEffect::Buff {
    attribute: PlayerAttribute::Defense,
    delta: 15.0,
}];

impl SkillId {
    pub fn definition(&self) -> Skill {
        // (name, mana, damage, cooldown, effects)
        let (name, mana_cost, base_damage, cooldown_seconds, effects): (
            &'static str,
            u32,
            u32,
            f64,
            &'static [SkillEffect],
        ) = match self {
            SkillId::SwordStrike => ("Sword Strike", 0, 10, 1.0, &[]),
            SkillId::PowerStrike => ("Power Strike", 15, 30, 3.0, POWER_STRIKE_EFFECTS),
            SkillId::WarCry => ("War Cry", 20, 0, 4.0, WAR_CRY_EFFECTS),
            SkillId::Shatter => ("Shatter", 40, 60, 5.0, &[]),
            SkillId::QuickShot => ("Quick Shot", 5, 8, 1.0, &[]),
            SkillId::MultiShot => ("Multi Shot", 15, 6, 3.0, &[]),
            SkillId::PoisonArrow => ("Poison Arrow", 20, 10, 4.0, POISON_ARROW_EFFECTS),
            SkillId::Fireball => ("Fireball", 10, 15, 1.0, &[]),
            SkillId::LightningBolt => ("Lightning Bolt", 15, 20, 3.0, &[]),
            SkillId::MagicBarrier => ("Magic Barrier", 20, 0, 5.0, MAGIC_BARRIER_EFFECTS),
            SkillId::IceStorm => ("Ice Storm", 50, 70, 6.0, &[]),
            SkillId::SneakStrike => ("Sneak Strike", 5, 12, 1.0, &[]),
            SkillId::SurpriseAttack => ("Surprise Attack", 10, 18, 3.0, &[]),
            SkillId::Pickpocket => ("Pickpocket", 0, 5, 4.0, &[]),
        };
        Skill {
            id: *self,
            name,
            mana_cost,
            base_damage,
            cooldown_seconds,
            effects,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }
}
