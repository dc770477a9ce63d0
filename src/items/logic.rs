//! Item effects and inventory consumption.

use super::types::{Item, ItemCategory, ItemEffect};
use crate::character::{Combatant, Player};
use crate::core::constants::STARTING_POTIONS;

/// Outcome of consuming one inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUse {
    /// The item removed from the inventory.
    pub item: Item,
    /// Whether its effect fired.
    pub applied: bool,
    /// HP actually restored.
    pub healed: u32,
}

impl ItemUse {
    pub fn message(&self) -> String {
        if self.applied {
            format!("You use {}. HP +{}", self.item.name, self.healed)
        } else {
            format!("You use {}. Nothing happens.", self.item.name)
        }
    }
}

/// Applies an item to a target. Only healing consumables do anything;
/// weapon and armor effects are not modelled.
pub fn use_item(item: &Item, target: &mut Combatant) -> (bool, u32) {
    match (item.category, item.effect) {
        (ItemCategory::Consumable, ItemEffect::Heal) => (true, target.heal(item.modifier)),
        _ => (false, 0),
    }
}

/// Consumes the item at `index` if it is a consumable.
pub fn consume_at(player: &mut Player, index: usize) -> Option<ItemUse> {
    if !player.inventory.get(index)?.is_consumable() {
        return None;
    }
    let item = player.inventory.remove(index);
    let (applied, healed) = use_item(&item, &mut player.combatant);
    tracing::debug!(item = %item.name, applied, healed, "item consumed");
    Some(ItemUse {
        item,
        applied,
        healed,
    })
}

/// Consumes the first consumable in insertion order.
pub fn consume_first(player: &mut Player) -> Option<ItemUse> {
    let index = player.first_consumable()?;
    consume_at(player, index)
}

/// Potions every new character starts with.
pub fn starting_kit() -> Vec<Item> {
    (0..STARTING_POTIONS).map(|_| Item::health_potion()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{PlayerClass, Position};

    fn sword() -> Item {
        Item::new("Iron Sword", "A plain blade", ItemCategory::Weapon, ItemEffect::None, 80, 5)
    }

    fn hurt_player() -> Player {
        let mut player = Player::new("Hero", PlayerClass::Archer, Position::default());
        player.combatant.hp = 50;
        player
    }

    #[test]
    fn test_use_potion_heals() {
        let mut player = hurt_player();
        let (applied, healed) = use_item(&Item::health_potion(), &mut player.combatant);
        assert!(applied);
        assert_eq!(healed, 20);
        assert_eq!(player.combatant.hp, 70);
    }

    #[test]
    fn test_use_weapon_is_noop() {
        let mut player = hurt_player();
        assert_eq!(use_item(&sword(), &mut player.combatant), (false, 0));
        assert_eq!(player.combatant.hp, 50);
    }

    #[test]
    fn test_consumable_without_heal_effect_is_noop() {
        let mut player = hurt_player();
        let bread = Item::new("Stale Bread", "", ItemCategory::Consumable, ItemEffect::None, 1, 30);
        assert_eq!(use_item(&bread, &mut player.combatant), (false, 0));
    }

    #[test]
    fn test_consume_first_skips_non_consumables() {
        let mut player = hurt_player();
        player.inventory = vec![sword(), Item::health_potion(), Item::health_potion()];

        let used = consume_first(&mut player).expect("potion should be used");
        assert!(used.applied);
        assert_eq!(used.item.name, "Health Potion");
        assert_eq!(player.inventory.len(), 2);
        assert_eq!(player.inventory[0].name, "Iron Sword");
        assert_eq!(used.message(), "You use Health Potion. HP +20");
    }

    #[test]
    fn test_consume_first_with_no_consumables() {
        let mut player = hurt_player();
        player.inventory = vec![sword()];
        assert!(consume_first(&mut player).is_none());
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_consume_at_rejects_weapon_and_bad_index() {
        let mut player = hurt_player();
        player.inventory = vec![sword()];
        assert!(consume_at(&mut player, 0).is_none());
        assert!(consume_at(&mut player, 5).is_none());
        assert_eq!(player.inventory.len(), 1);
    }

    #[test]
    fn test_starting_kit() {
        let kit = starting_kit();
        assert_eq!(kit.len(), STARTING_POTIONS);
        assert!(kit.iter().all(|item| item.effect == ItemEffect::Heal));
    }
}
