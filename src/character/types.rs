use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::*;
use crate::items::Item;
use crate::quests::Quest;

/// Continuous world position (top-left corner of the entity's box).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which side of the capability table an actor dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Enemy,
}

/// Fields shared by every combat-capable actor.
///
/// `alive` is private: it only ever flips from true to false, inside
/// [`Combatant::receive_damage`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub role: Role,
    pub hp: u32,
    pub hp_max: u32,
    pub atk: u32,
    pub defense: u32,
    pub level: u32,
    pub experience: u32,
    pub(crate) alive: bool,
    pub position: Position,
    /// Presentation-only flash timer, set when damage lands.
    #[serde(skip)]
    pub hit_flash: f64,
}

/// Gold and experience granted to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reward {
    pub gold: u32,
    pub experience: u32,
}

impl Reward {
    pub fn new(gold: u32, experience: u32) -> Self {
        Self { gold, experience }
    }
}

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageTaken {
    /// Post-mitigation damage actually subtracted from hp.
    pub realized: u32,
    /// True only on the hit that killed the entity.
    pub died: bool,
}

/// Result of one attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOutcome {
    pub damage: u32,
    pub is_crit: bool,
    pub killed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    Mage,
    Archer,
}

/// Base stats for a class: (hp, atk, defense).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub hp: u32,
    pub atk: u32,
    pub defense: u32,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 3] = [PlayerClass::Warrior, PlayerClass::Mage, PlayerClass::Archer];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerClass::Warrior => "Warrior",
            PlayerClass::Mage => "Mage",
            PlayerClass::Archer => "Archer",
        }
    }

    pub fn base_stats(&self) -> ClassStats {
        match self {
            PlayerClass::Warrior => ClassStats {
                hp: 120,
                atk: 15,
                defense: 10,
            },
            PlayerClass::Mage => ClassStats {
                hp: 80,
                atk: 20,
                defense: 5,
            },
            PlayerClass::Archer => ClassStats {
                hp: 100,
                atk: 18,
                defense: 7,
            },
        }
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The player character. Lives for the whole game once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub combatant: Combatant,
    pub class: PlayerClass,
    pub gold: u32,
    /// Owned items in insertion order.
    pub inventory: Vec<Item>,
    pub quests: Vec<Quest>,
}

/// Stable handle for an enemy in the exploration roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Enemy templates the world spawns from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    WildWolf,
    Bandit,
}

/// Fixed stats and reward for an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub hp: u32,
    pub atk: u32,
    pub defense: u32,
    /// Creature family tag ("beast", "human").
    pub tag: &'static str,
    pub reward: Reward,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 2] = [EnemyKind::WildWolf, EnemyKind::Bandit];

    pub fn template(&self) -> EnemyTemplate {
        match self {
            EnemyKind::WildWolf => EnemyTemplate {
                name: "Wild Wolf",
                hp: 40,
                atk: 10,
                defense: 2,
                tag: "beast",
                reward: Reward::new(20, 50),
            },
            EnemyKind::Bandit => EnemyTemplate {
                name: "Bandit",
                hp: 60,
                atk: 15,
                defense: 5,
                tag: "human",
                reward: Reward::new(40, 80),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.template().name
    }
}

/// An enemy in the world roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub combatant: Combatant,
    pub kind: EnemyKind,
    pub reward: Reward,
    /// Seconds until the next wander direction is picked.
    pub wander_timer: f64,
    /// Unit vector of the current wander heading.
    pub wander_direction: (f64, f64),
}

impl Enemy {
    pub fn from_kind(id: EnemyId, kind: EnemyKind, position: Position) -> Self {
        let t = kind.template();
        Self {
            id,
            combatant: Combatant::new(t.name, Role::Enemy, t.hp, t.atk, t.defense, position),
            kind,
            reward: t.reward,
            wander_timer: 0.0,
            wander_direction: (0.0, 0.0),
        }
    }
}

impl Player {
    /// Creates a level 1 player with the class's base stats.
    pub fn new(name: impl Into<String>, class: PlayerClass, position: Position) -> Self {
        let stats = class.base_stats();
        Self {
            combatant: Combatant::new(
                name,
                Role::Player,
                stats.hp,
                stats.atk,
                stats.defense,
                position,
            ),
            class,
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            quests: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.combatant.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_base_stats() {
        assert_eq!(
            PlayerClass::Warrior.base_stats(),
            ClassStats {
                hp: 120,
                atk: 15,
                defense: 10
            }
        );
        assert_eq!(PlayerClass::Mage.base_stats().atk, 20);
        assert_eq!(PlayerClass::Archer.base_stats().hp, 100);
    }

    #[test]
    fn test_new_player_has_class_stats() {
        let player = Player::new("Aria", PlayerClass::Mage, Position::new(1.0, 2.0));
        assert_eq!(player.name(), "Aria");
        assert_eq!(player.combatant.hp, 80);
        assert_eq!(player.combatant.hp_max, 80);
        assert_eq!(player.combatant.level, 1);
        assert_eq!(player.combatant.experience, 0);
        assert_eq!(player.combatant.role, Role::Player);
        assert_eq!(player.gold, STARTING_GOLD);
        assert!(player.inventory.is_empty());
        assert!(player.combatant.is_alive());
    }

    #[test]
    fn test_enemy_from_template() {
        let enemy = Enemy::from_kind(EnemyId(3), EnemyKind::Bandit, Position::default());
        assert_eq!(enemy.combatant.name, "Bandit");
        assert_eq!(enemy.combatant.hp, 60);
        assert_eq!(enemy.combatant.defense, 5);
        assert_eq!(enemy.combatant.role, Role::Enemy);
        assert_eq!(enemy.reward, Reward::new(40, 80));
        assert_eq!(enemy.kind.template().tag, "human");
    }

    #[test]
    fn test_enemy_id_display() {
        assert_eq!(EnemyId(7).to_string(), "#7");
    }
}
