use super::types::ItemId;
use crate::core::constants::MAX_INVENTORY_SIZE;
use serde::{Deserialize, Serialize};

/// Carried items, bounded by [`MAX_INVENTORY_SIZE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<ItemId>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_INVENTORY_SIZE
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).copied()
    }

    /// Adds the item if there is room. Returns false when full.
    pub fn add(&mut self, item: ItemId) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<ItemId> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn count(&self, item: ItemId) -> usize {
        self.items.iter().filter(|&&i| i == item).count()
    }

    /// Truncates anything past capacity (restored saves).
    pub fn normalize(&mut self) {
        self.items.truncate(MAX_INVENTORY_SIZE);
    }
}
