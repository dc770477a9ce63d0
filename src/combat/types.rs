use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::character::Reward;
use crate::core::constants::*;

/// Whose action is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Enemy,
}

/// Turn state machine for one encounter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CombatPhase {
    /// Waiting for the player to pick an action.
    PlayerTurn,
    /// The enemy is acting. Passed through within a single update.
    EnemyTurn,
    /// Pacing wait after `actor`'s action; no side effects besides the countdown.
    Resolving { actor: Turn, remaining: f64 },
    /// Enemy defeated, rewards granted. Waits for acknowledgment.
    Victory,
    /// Player defeated. Waits for acknowledgment.
    Defeat,
}

impl CombatPhase {
    pub fn name(&self) -> &'static str {
        match self {
            CombatPhase::PlayerTurn => "Your turn",
            CombatPhase::EnemyTurn => "Enemy turn",
            CombatPhase::Resolving { .. } => "...",
            CombatPhase::Victory => "Victory",
            CombatPhase::Defeat => "Defeat",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, CombatPhase::Victory | CombatPhase::Defeat)
    }
}

/// Actions offered on the player's turn, in button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Attack,
    UseItem,
}

impl CombatAction {
    pub const ALL: [CombatAction; 2] = [CombatAction::Attack, CombatAction::UseItem];

    pub fn label(&self) -> &'static str {
        match self {
            CombatAction::Attack => "Attack",
            CombatAction::UseItem => "Use Item",
        }
    }
}

/// How an encounter ended, once acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Victory,
    Defeat,
}

/// What the player got out of a won fight.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VictorySummary {
    pub reward: Reward,
    pub leveled_up: bool,
    pub new_level: u32,
    pub quests_completed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub message: String,
    pub is_crit: bool,
    pub is_player_action: bool,
}

/// Per-encounter combat state. Allocated once per session and reset on
/// every combat entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatState {
    pub phase: CombatPhase,
    /// Latest status line.
    pub message: String,
    pub combat_log: VecDeque<CombatLogEntry>,
    /// Highlighted action button.
    pub selected_action: usize,
    pub victory: Option<VictorySummary>,
    /// Seconds each action pauses before its consequences apply.
    pub animation_delay: f64,
}

impl Default for CombatState {
    fn default() -> Self {
        Self::new(ANIMATION_DELAY_SECONDS)
    }
}

impl CombatState {
    pub fn new(animation_delay: f64) -> Self {
        Self {
            phase: CombatPhase::PlayerTurn,
            message: String::new(),
            combat_log: VecDeque::with_capacity(COMBAT_LOG_CAPACITY),
            selected_action: 0,
            victory: None,
            animation_delay,
        }
    }

    /// Starts a fresh encounter.
    pub fn reset(&mut self, opening_message: String) {
        self.phase = CombatPhase::PlayerTurn;
        self.combat_log.clear();
        self.selected_action = 0;
        self.victory = None;
        self.message = opening_message;
    }

    pub fn add_log_entry(&mut self, message: String, is_crit: bool, is_player_action: bool) {
        if self.combat_log.len() >= COMBAT_LOG_CAPACITY {
            self.combat_log.pop_front();
        }
        self.message = message.clone();
        self.combat_log.push_back(CombatLogEntry {
            message,
            is_crit,
            is_player_action,
        });
    }

    pub fn start_delay(&mut self, actor: Turn) {
        self.phase = CombatPhase::Resolving {
            actor,
            remaining: self.animation_delay,
        };
    }

    pub fn is_player_turn(&self) -> bool {
        self.phase == CombatPhase::PlayerTurn
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn selected(&self) -> CombatAction {
        CombatAction::ALL[self.selected_action % CombatAction::ALL.len()]
    }

    pub fn move_selection(&mut self, forward: bool) {
        let len = CombatAction::ALL.len();
        self.selected_action = if forward {
            (self.selected_action + 1) % len
        } else {
            (self.selected_action + len - 1) % len
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combat_state_creation() {
        let combat = CombatState::new(0.5);
        assert!(combat.is_player_turn());
        assert!(!combat.is_finished());
        assert!(combat.combat_log.is_empty());
        assert_eq!(combat.selected(), CombatAction::Attack);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut combat = CombatState::default();
        for i in 0..(COMBAT_LOG_CAPACITY + 5) {
            combat.add_log_entry(format!("hit {}", i), false, true);
        }
        assert_eq!(combat.combat_log.len(), COMBAT_LOG_CAPACITY);
        assert_eq!(combat.message, format!("hit {}", COMBAT_LOG_CAPACITY + 4));
        assert_eq!(combat.combat_log.front().map(|e| e.message.as_str()), Some("hit 5"));
    }

    #[test]
    fn test_reset_clears_encounter() {
        let mut combat = CombatState::default();
        combat.add_log_entry("old".to_string(), false, true);
        combat.phase = CombatPhase::Defeat;
        combat.selected_action = 1;
        combat.reset("A Bandit appears!".to_string());
        assert!(combat.is_player_turn());
        assert!(combat.combat_log.is_empty());
        assert_eq!(combat.selected_action, 0);
        assert_eq!(combat.message, "A Bandit appears!");
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut combat = CombatState::default();
        combat.move_selection(false);
        assert_eq!(combat.selected(), CombatAction::UseItem);
        combat.move_selection(true);
        assert_eq!(combat.selected(), CombatAction::Attack);
    }

    #[test]
    fn test_finished_phases() {
        assert!(CombatPhase::Victory.is_finished());
        assert!(CombatPhase::Defeat.is_finished());
        assert!(!CombatPhase::EnemyTurn.is_finished());
        assert!(!CombatPhase::Resolving {
            actor: Turn::Player,
            remaining: 0.1
        }
        .is_finished());
    }
}
