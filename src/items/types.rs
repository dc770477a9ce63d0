use serde::{Deserialize, Serialize};

use crate::core::constants::{POTION_HEAL, POTION_VALUE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Consumable,
    Weapon,
    Armor,
}

impl ItemCategory {
    /// Returns the display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Consumable => "Consumable",
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
        }
    }
}

/// What using an item does. Only consumables with `Heal` have an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    None,
    Heal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub effect: ItemEffect,
    pub value: u32,
    /// Effect magnitude (hp restored for healing items).
    pub modifier: u32,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: ItemCategory,
        effect: ItemEffect,
        value: u32,
        modifier: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            effect,
            value,
            modifier,
        }
    }

    /// The starting healing potion.
    pub fn health_potion() -> Self {
        Self::new(
            "Health Potion",
            format!("Restores {} HP", POTION_HEAL),
            ItemCategory::Consumable,
            ItemEffect::Heal,
            POTION_VALUE,
            POTION_HEAL,
        )
    }

    pub fn is_consumable(&self) -> bool {
        self.category == ItemCategory::Consumable
    }
}
