//! Carried items and worn equipment.
//!
//! Items are plain identifiers; nothing in combat reads them yet.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Gloves,
    Boots,
    Amulet,
    Ring,
}

/// Ordered list of carried item ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Removes the first matching item. Returns false if none was carried.
    pub fn remove(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Comma-separated item list, or "Empty".
    pub fn describe(&self) -> String {
        if self.items.is_empty() {
            "Empty".to_string()
        } else {
            self.items.join(", ")
        }
    }
}

/// Sparse slot to item mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, String>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Puts `item` in `slot`, returning whatever was there before.
    pub fn equip(&mut self, slot: EquipmentSlot, item: impl Into<String>) -> Option<String> {
        self.slots.insert(slot, item.into())
    }

    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<String> {
        self.slots.remove(&slot)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &str)> {
        self.slots.iter().map(|(slot, item)| (*slot, item.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inventory_describes_as_empty() {
        assert_eq!(Inventory::new().describe(), "Empty");
    }

    #[test]
    fn test_inventory_keeps_order() {
        let mut inv = Inventory::new();
        inv.add("Potion");
        inv.add("Rope");
        inv.add("Potion");
        assert_eq!(inv.describe(), "Potion, Rope, Potion");

        assert!(inv.remove("Potion"));
        assert_eq!(inv.items(), ["Rope".to_string(), "Potion".to_string()]);
        assert!(!inv.remove("Sword"));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_equip_replaces_previous_item() {
        let mut equipment = Equipment::new();
        assert!(equipment.is_empty());
        assert_eq!(equipment.equip(EquipmentSlot::Weapon, "Dagger"), None);
        assert_eq!(
            equipment.equip(EquipmentSlot::Weapon, "Sword"),
            Some("Dagger".to_string())
        );
        assert_eq!(equipment.get(EquipmentSlot::Weapon), Some("Sword"));
        assert_eq!(equipment.get(EquipmentSlot::Ring), None);
    }

    #[test]
    fn test_unequip() {
        let mut equipment = Equipment::new();
        equipment.equip(EquipmentSlot::Boots, "Sandals");
        assert_eq!(
            equipment.unequip(EquipmentSlot::Boots),
            Some("Sandals".to_string())
        );
        assert_eq!(equipment.iter_equipped().count(), 0);
    }
}
