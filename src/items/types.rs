use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Accessory,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 3] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Accessory,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Accessory => "Accessory",
        }
    }
}

/// Which pool a consumable refills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restores {
    Health(u32),
    Mana(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Weapon { damage: u32 },
    Armor { defense: u32 },
    Accessory,
    Consumable(Restores),
    Material,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDefinition {
    pub name: &'static str,
    pub kind: ItemKind,
    pub value: u32,
}

impl ItemDefinition {
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self.kind {
            ItemKind::Weapon { .. } => Some(EquipmentSlot::Weapon),
            ItemKind::Armor { .. } => Some(EquipmentSlot::Armor),
            ItemKind::Accessory => Some(EquipmentSlot::Accessory),
            ItemKind::Consumable(_) | ItemKind::Material => None,
        }
    }
}

/// Every item the game knows about. Loot tables and quest rewards refer to
/// these ids, so a dangling item reference cannot be written down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemId {
    SmallSword,
    CursedSword,
    LeatherArmor,
    MarshAmulet,
    SmallPotion,
    HealthPotion,
    ManaPotion,
    StolenCheese,
    StickyJelly,
    RatTail,
}

impl ItemId {
    pub fn all() -> [ItemId; 10] {
        [
            ItemId::SmallSword,
            ItemId::CursedSword,
            ItemId::LeatherArmor,
            ItemId::MarshAmulet,
            ItemId::SmallPotion,
            ItemId::HealthPotion,
            ItemId::ManaPotion,
            ItemId::StolenCheese,
            ItemId::StickyJelly,
            ItemId::RatTail,
        ]
    }

    pub fn definition(&self) -> ItemDefinition {
        let (name, kind, value) = match self {
            ItemId::SmallSword => ("Small Sword", ItemKind::Weapon { damage: 8 }, 20),
            ItemId::CursedSword => ("Cursed Sword", ItemKind::Weapon { damage: 18 }, 120),
            ItemId::LeatherArmor => ("Leather Armor", ItemKind::Armor { defense: 3 }, 30),
            ItemId::MarshAmulet => ("Marsh Amulet", ItemKind::Accessory, 150),
            ItemId::SmallPotion => (
                "Small Potion",
                ItemKind::Consumable(Restores::Health(25)),
                10,
            ),
            ItemId::HealthPotion => (
                "Health Potion",
                ItemKind::Consumable(Restores::Health(50)),
                25,
            ),
            ItemId::ManaPotion => (
                "Mana Potion",
                ItemKind::Consumable(Restores::Mana(30)),
                25,
            ),
            ItemId::StolenCheese => (
                "Stolen Cheese",
                ItemKind::Consumable(Restores::Health(10)),
                3,
            ),
            ItemId::StickyJelly => ("Sticky Jelly", ItemKind::Material, 2),
            ItemId::RatTail => ("Rat Tail", ItemKind::Material, 1),
        };
        ItemDefinition { name, kind, value }
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    /// Target id used by `Collect` quest objectives.
    pub fn tag(&self) -> &'static str {
        match self {
            ItemId::SmallSword => "small_sword",
            ItemId::CursedSword => "cursed_sword",
            ItemId::LeatherArmor => "leather_armor",
            ItemId::MarshAmulet => "marsh_amulet",
            ItemId::SmallPotion => "small_potion",
            ItemId::HealthPotion => "health_potion",
            ItemId::ManaPotion => "mana_potion",
            ItemId::StolenCheese => "stolen_cheese",
            ItemId::StickyJelly => "sticky_jelly",
            ItemId::RatTail => "rat_tail",
        }
    }
}
