//! Read-only views of a session for the presentation layer.

use serde::Serialize;

use super::session::{GameFlow, Session};
use crate::character::{Enemy, Player, PlayerClass, Position};
use crate::combat::CombatPhase;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestSnapshot {
    pub name: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub class: PlayerClass,
    pub hp: u32,
    pub hp_max: u32,
    pub atk: u32,
    pub defense: u32,
    pub level: u32,
    pub experience: u32,
    pub gold: u32,
    pub position: Position,
    pub inventory: Vec<String>,
    pub quests: Vec<QuestSnapshot>,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        let c = &player.combatant;
        Self {
            name: c.name.clone(),
            class: player.class,
            hp: c.hp,
            hp_max: c.hp_max,
            atk: c.atk,
            defense: c.defense,
            level: c.level,
            experience: c.experience,
            gold: player.gold,
            position: c.position,
            inventory: player.inventory.iter().map(|item| item.name.clone()).collect(),
            quests: player
                .quests
                .iter()
                .map(|quest| QuestSnapshot {
                    name: quest.name.clone(),
                    completed: quest.is_completed(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemySnapshot {
    pub name: String,
    pub tag: &'static str,
    pub hp: u32,
    pub hp_max: u32,
    pub atk: u32,
    pub defense: u32,
    pub alive: bool,
}

impl From<&Enemy> for EnemySnapshot {
    fn from(enemy: &Enemy) -> Self {
        let c = &enemy.combatant;
        Self {
            name: c.name.clone(),
            tag: enemy.kind.template().tag,
            hp: c.hp,
            hp_max: c.hp_max,
            atk: c.atk,
            defense: c.defense,
            alive: c.is_alive(),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub flow: GameFlow,
    pub player: Option<PlayerSnapshot>,
    pub enemy: Option<EnemySnapshot>,
    pub combat_phase: Option<CombatPhase>,
    pub combat_message: Option<String>,
    pub combat_log: Vec<String>,
    pub status_message: Option<String>,
    pub roster_size: usize,
}

impl Session {
    pub fn snapshot(&self) -> SessionSnapshot {
        let in_combat = self.flow() == GameFlow::Combat;
        SessionSnapshot {
            flow: self.flow(),
            player: self.player.as_ref().map(PlayerSnapshot::from),
            enemy: self.current_enemy().map(EnemySnapshot::from),
            combat_phase: in_combat.then_some(self.combat.phase),
            combat_message: in_combat.then(|| self.combat.message.clone()),
            combat_log: if in_combat {
                self.combat
                    .combat_log
                    .iter()
                    .map(|entry| entry.message.clone())
                    .collect()
            } else {
                Vec::new()
            },
            status_message: self.status_message.clone(),
            roster_size: self.world.enemies.len(),
        }
    }
}
