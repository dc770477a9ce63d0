use super::types::*;
use crate::character::{attack, Enemy, Player, Reward};
use crate::core::constants::NO_ITEMS_MESSAGE;
use crate::items::consume_first;
use crate::quests::record_kill;
use rand::Rng;

#[derive(Debug, Clone)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
        was_crit: bool,
    },
    ItemUsed {
        item_name: String,
        healed: u32,
    },
    /// The chosen action could not be taken; nothing changed.
    ActionRejected {
        reason: String,
    },
    EnemyAttack {
        damage: u32,
        was_crit: bool,
    },
    EnemyDied {
        reward: Reward,
        leveled_up: bool,
    },
    PlayerDied,
}

/// Applies the player's chosen action. Ignored outside the player's turn.
pub fn process_action(
    state: &mut CombatState,
    action: CombatAction,
    player: &mut Player,
    enemy: &mut Enemy,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();
    if !state.is_player_turn() {
        return events;
    }

    match action {
        CombatAction::Attack => {
            let outcome = attack(&player.combatant, &mut enemy.combatant, rng);
            let crit_note = if outcome.is_crit { " (CRITICAL!)" } else { "" };
            state.add_log_entry(
                format!("You attack for {} damage{}!", outcome.damage, crit_note),
                outcome.is_crit,
                true,
            );
            state.start_delay(Turn::Player);
            events.push(CombatEvent::PlayerAttack {
                damage: outcome.damage,
                was_crit: outcome.is_crit,
            });
        }
        CombatAction::UseItem => match consume_first(player) {
            Some(used) => {
                state.add_log_entry(used.message(), false, true);
                state.start_delay(Turn::Player);
                events.push(CombatEvent::ItemUsed {
                    item_name: used.item.name,
                    healed: used.healed,
                });
            }
            None => {
                tracing::debug!("use item rejected: no consumables");
                state.message = NO_ITEMS_MESSAGE.to_string();
                events.push(CombatEvent::ActionRejected {
                    reason: NO_ITEMS_MESSAGE.to_string(),
                });
            }
        },
    }
    events
}

/// Advances the pacing delay and resolves the turn once it expires.
pub fn update_combat(
    state: &mut CombatState,
    delta_time: f64,
    player: &mut Player,
    enemy: &mut Enemy,
    rng: &mut impl Rng,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    player.combatant.tick(delta_time);
    enemy.combatant.tick(delta_time);

    let CombatPhase::Resolving { actor, remaining } = state.phase else {
        return events;
    };

    let remaining = remaining - delta_time;
    if remaining > 0.0 {
        state.phase = CombatPhase::Resolving { actor, remaining };
        return events;
    }

    if !enemy.combatant.is_alive() {
        let summary = resolve_victory(state, player, enemy);
        events.push(CombatEvent::EnemyDied {
            reward: summary.reward,
            leveled_up: summary.leveled_up,
        });
    } else if !player.combatant.is_alive() {
        state.phase = CombatPhase::Defeat;
        state.add_log_entry("You have been defeated...".to_string(), false, false);
        tracing::info!(enemy = %enemy.combatant.name, "player defeated");
        events.push(CombatEvent::PlayerDied);
    } else if actor == Turn::Player {
        state.phase = CombatPhase::EnemyTurn;
        events.push(enemy_turn(state, player, enemy, rng));
    } else {
        state.phase = CombatPhase::PlayerTurn;
    }

    events
}

fn enemy_turn(
    state: &mut CombatState,
    player: &mut Player,
    enemy: &Enemy,
    rng: &mut impl Rng,
) -> CombatEvent {
    let outcome = attack(&enemy.combatant, &mut player.combatant, rng);
    let crit_note = if outcome.is_crit { " (CRITICAL!)" } else { "" };
    state.add_log_entry(
        format!(
            "{} attacks for {} damage{}!",
            enemy.combatant.name, outcome.damage, crit_note
        ),
        outcome.is_crit,
        false,
    );
    state.start_delay(Turn::Enemy);
    CombatEvent::EnemyAttack {
        damage: outcome.damage,
        was_crit: outcome.is_crit,
    }
}

/// Grants the enemy's reward and applies at most one level-up.
fn resolve_victory(state: &mut CombatState, player: &mut Player, enemy: &Enemy) -> VictorySummary {
    player.grant_reward(enemy.reward);
    let leveled_up = player.try_level_up();
    let quests_completed = record_kill(player, enemy.kind.name());

    state.phase = CombatPhase::Victory;
    state.add_log_entry(
        format!(
            "You defeated {}! +{} gold, +{} XP",
            enemy.combatant.name, enemy.reward.gold, enemy.reward.experience
        ),
        false,
        true,
    );
    if leveled_up {
        state.add_log_entry(
            format!("Level up! You are now level {}", player.combatant.level),
            false,
            true,
        );
    }
    for quest in &quests_completed {
        state.add_log_entry(format!("Quest complete: {}", quest), false, true);
    }

    let summary = VictorySummary {
        reward: enemy.reward,
        leveled_up,
        new_level: player.combatant.level,
        quests_completed,
    };
    tracing::info!(
        enemy = %enemy.combatant.name,
        gold = summary.reward.gold,
        experience = summary.reward.experience,
        leveled_up,
        "combat won"
    );
    state.victory = Some(summary.clone());
    summary
}

/// Confirms a finished encounter. None while the fight is still running.
pub fn acknowledge(state: &CombatState) -> Option<CombatOutcome> {
    match state.phase {
        CombatPhase::Victory => Some(CombatOutcome::Victory),
        CombatPhase::Defeat => Some(CombatOutcome::Defeat),
        _ => None,
    }
}
