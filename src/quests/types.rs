use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::character::Reward;

/// Category of objective a quest counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectiveKind {
    Enemies,
    Items,
}

/// kind -> (target -> count)
pub type Objectives = BTreeMap<ObjectiveKind, BTreeMap<String, u32>>;

/// A quest with counted objectives.
///
/// `progress` mirrors the shape of `requirements` and only ever grows;
/// `completed` latches once every count is met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub name: String,
    pub description: String,
    pub reward: Reward,
    requirements: Objectives,
    progress: Objectives,
    completed: bool,
}

impl Quest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        requirements: Objectives,
        reward: Reward,
    ) -> Self {
        let progress = requirements
            .iter()
            .map(|(kind, targets)| {
                let zeroed = targets.keys().map(|target| (target.clone(), 0)).collect();
                (*kind, zeroed)
            })
            .collect();
        let mut quest = Self {
            name: name.into(),
            description: description.into(),
            reward,
            requirements,
            progress,
            completed: false,
        };
        quest.completed = quest.requirements_met();
        quest
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn requirements(&self) -> &Objectives {
        &self.requirements
    }

    pub fn requirement(&self, kind: ObjectiveKind, target: &str) -> Option<u32> {
        self.requirements.get(&kind)?.get(target).copied()
    }

    pub fn progress(&self, kind: ObjectiveKind, target: &str) -> u32 {
        self.progress
            .get(&kind)
            .and_then(|targets| targets.get(target))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn progress_mut(&mut self, kind: ObjectiveKind, target: &str) -> Option<&mut u32> {
        self.progress.get_mut(&kind)?.get_mut(target)
    }

    pub(crate) fn requirements_met(&self) -> bool {
        self.requirements.iter().all(|(kind, targets)| {
            targets
                .iter()
                .all(|(target, needed)| self.progress(*kind, target) >= *needed)
        })
    }

    pub(crate) fn mark_completed(&mut self) {
        self.completed = true;
    }
}
