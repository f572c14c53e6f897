use super::types::{EquipmentSlot, ItemId, ItemKind};
use serde::{Deserialize, Serialize};

/// Equipped items, at most one per slot.
///
/// New slots need `#[serde(default)]` so older saves still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub weapon: Option<ItemId>,
    #[serde(default)]
    pub armor: Option<ItemId>,
    #[serde(default)]
    pub accessory: Option<ItemId>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<ItemId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
            EquipmentSlot::Accessory => self.accessory,
        }
    }

    /// Puts `item` in `slot`, returning whatever was there.
    pub fn set(&mut self, slot: EquipmentSlot, item: Option<ItemId>) -> Option<ItemId> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Accessory => &mut self.accessory,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = ItemId> {
        [self.weapon, self.armor, self.accessory]
            .into_iter()
            .flatten()
    }

    pub fn weapon_damage(&self) -> Option<u32> {
        self.weapon.and_then(|id| match id.definition().kind {
            ItemKind::Weapon { damage } => Some(damage),
            _ => None,
        })
    }

    pub fn armor_defense(&self) -> u32 {
        self.iter_equipped()
            .map(|id| match id.definition().kind {
                ItemKind::Armor { defense } => defense,
                _ => 0,
            })
            .sum()
    }

    /// Drops anything sitting in a slot its kind does not belong to.
    pub fn normalize(&mut self) {
        for slot in EquipmentSlot::all() {
            if let Some(id) = self.get(slot) {
                if id.definition().slot() != Some(slot) {
                    self.set(slot, None);
                }
            }
        }
    }
}
