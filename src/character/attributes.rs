use crate::core::constants::NUM_ATTRIBUTES;
use crate::world::ClassTemplate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttributeType {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Dexterity,
            AttributeType::Constitution,
            AttributeType::Intelligence,
            AttributeType::Wisdom,
            AttributeType::Charisma,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Dexterity => "DEX",
            AttributeType::Constitution => "CON",
            AttributeType::Intelligence => "INT",
            AttributeType::Wisdom => "WIS",
            AttributeType::Charisma => "CHA",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Dexterity => 1,
            AttributeType::Constitution => 2,
            AttributeType::Intelligence => 3,
            AttributeType::Wisdom => 4,
            AttributeType::Charisma => 5,
        }
    }
}

/// The six core attributes of a character.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Attributes {
    pub fn new(str: u32, dex: u32, con: u32, int: u32, wis: u32, cha: u32) -> Self {
        Self {
            values: [str, dex, con, int, wis, cha],
        }
    }

    pub fn from_class(template: &ClassTemplate) -> Self {
        Self::new(
            template.str,
            template.dex,
            template.con,
            template.int,
            template.wis,
            template.cha,
        )
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn raise(&mut self, attr: AttributeType, amount: u32) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }

    pub fn strength(&self) -> u32 {
        self.get(AttributeType::Strength)
    }

    pub fn dexterity(&self) -> u32 {
        self.get(AttributeType::Dexterity)
    }

    pub fn constitution(&self) -> u32 {
        self.get(AttributeType::Constitution)
    }

    pub fn intelligence(&self) -> u32 {
        self.get(AttributeType::Intelligence)
    }

    pub fn wisdom(&self) -> u32 {
        self.get(AttributeType::Wisdom)
    }

    pub fn charisma(&self) -> u32 {
        self.get(AttributeType::Charisma)
    }

    /// "STR 18 DEX 10 ..." in attribute order.
    pub fn summary(&self) -> String {
        AttributeType::all()
            .iter()
            .map(|attr| format!("{} {}", attr.abbrev(), self.get(*attr)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::builtin_classes;

    #[test]
    fn test_from_class_copies_every_attribute() {
        let warrior = &builtin_classes()[0];
        let attrs = Attributes::from_class(warrior);
        assert_eq!(attrs.strength(), 18);
        assert_eq!(attrs.dexterity(), 10);
        assert_eq!(attrs.constitution(), 16);
        assert_eq!(attrs.intelligence(), 8);
        assert_eq!(attrs.wisdom(), 10);
        assert_eq!(attrs.charisma(), 11);
    }

    #[test]
    fn test_get_by_type() {
        let attrs = Attributes::new(16, 10, 10, 10, 10, 10);
        assert_eq!(attrs.get(AttributeType::Strength), 16);
        assert_eq!(attrs.get(AttributeType::Dexterity), 10);
    }

    #[test]
    fn test_raise_saturates() {
        let mut attrs = Attributes::new(u32::MAX, 1, 1, 1, 1, 1);
        attrs.raise(AttributeType::Strength, 2);
        attrs.raise(AttributeType::Wisdom, 3);
        assert_eq!(attrs.strength(), u32::MAX);
        assert_eq!(attrs.wisdom(), 4);
    }

    #[test]
    fn test_attribute_type_abbrev() {
        assert_eq!(AttributeType::Strength.abbrev(), "STR");
        assert_eq!(AttributeType::Dexterity.abbrev(), "DEX");
        assert_eq!(AttributeType::Constitution.abbrev(), "CON");
        assert_eq!(AttributeType::Intelligence.abbrev(), "INT");
        assert_eq!(AttributeType::Wisdom.abbrev(), "WIS");
        assert_eq!(AttributeType::Charisma.abbrev(), "CHA");
    }

    #[test]
    fn test_index_returns_unique_values() {
        let all = AttributeType::all();
        for (i, attr) in all.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn test_summary_lists_in_order() {
        let attrs = Attributes::new(1, 2, 3, 4, 5, 6);
        assert_eq!(attrs.summary(), "STR 1 DEX 2 CON 3 INT 4 WIS 5 CHA 6");
    }
}
