//! Quest progress tracking and rewards.

use super::types::{ObjectiveKind, Objectives, Quest};
use crate::character::{EnemyKind, Player, Reward};
use std::collections::BTreeMap;

impl Quest {
    /// Counts one occurrence of `target`. Targets outside the quest's
    /// objectives are ignored. Returns true on the call that completes it.
    pub fn record_progress(&mut self, kind: ObjectiveKind, target: &str) -> bool {
        let Some(count) = self.progress_mut(kind, target) else {
            return false;
        };
        *count = count.saturating_add(1);

        if !self.is_completed() && self.requirements_met() {
            self.mark_completed();
            tracing::info!(quest = %self.name, "quest completed");
            return true;
        }
        false
    }
}

/// Records a defeated enemy on every quest and pays out newly completed
/// quests. Returns the names of quests completed by this kill.
pub fn record_kill(player: &mut Player, enemy_name: &str) -> Vec<String> {
    let mut completed = Vec::new();
    let mut earned = Reward::default();

    for quest in &mut player.quests {
        if quest.record_progress(ObjectiveKind::Enemies, enemy_name) {
            earned.gold += quest.reward.gold;
            earned.experience += quest.reward.experience;
            completed.push(quest.name.clone());
        }
    }

    if !completed.is_empty() {
        player.grant_reward(earned);
    }
    completed
}

/// The quest every new character starts with.
pub fn wolf_hunt() -> Quest {
    let mut enemies = BTreeMap::new();
    enemies.insert(EnemyKind::WildWolf.name().to_string(), 3);
    let mut requirements: Objectives = BTreeMap::new();
    requirements.insert(ObjectiveKind::Enemies, enemies);

    Quest::new(
        "Wolf Hunt",
        "Defeat 3 Wild Wolves roaming the plains",
        requirements,
        Reward::new(100, 150),
    )
}
