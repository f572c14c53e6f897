use super::catalog::starting_quests;
use super::types::{ActionType, Quest, Reward};
use crate::monsters::MonsterKind;
use serde::{Deserialize, Serialize};

/// Where a quest currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    Available,
    Active { completed: bool },
    Completed,
}

/// Quests split into three disjoint lists. A quest only ever moves
/// available → active → completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestTracker {
    pub available: Vec<Quest>,
    pub active: Vec<Quest>,
    pub completed: Vec<Quest>,
}

impl Default for QuestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestTracker {
    pub fn new() -> Self {
        Self {
            available: starting_quests(),
            active: Vec::new(),
            completed: Vec::new(),
        }
    }

    pub fn status(&self, id: &str) -> Option<QuestStatus> {
        if self.available.iter().any(|q| q.id == id) {
            return Some(QuestStatus::Available);
        }
        if let Some(quest) = self.active.iter().find(|q| q.id == id) {
            return Some(QuestStatus::Active {
                completed: quest.completed,
            });
        }
        self.completed
            .iter()
            .any(|q| q.id == id)
            .then_some(QuestStatus::Completed)
    }

    /// Moves an available quest to active. False if it was not available.
    pub fn accept(&mut self, id: &str) -> bool {
        let Some(index) = self.available.iter().position(|q| q.id == id) else {
            return false;
        };
        let quest = self.available.remove(index);
        self.active.push(quest);
        true
    }

    /// Applies progress to every active quest with a matching objective.
    /// Returns the ids of quests this update completed.
    pub fn update_progress(&mut self, action: ActionType, target: &str, amount: u32) -> Vec<String> {
        self.active
            .iter_mut()
            .filter_map(|quest| {
                quest
                    .update_progress(action, target, amount)
                    .then(|| quest.id.clone())
            })
            .collect()
    }

    pub fn on_monster_killed(&mut self, kind: MonsterKind) -> Vec<String> {
        self.update_progress(ActionType::Kill, kind.tag(), 1)
    }

    /// Releases the reward of a completed active quest and archives it.
    /// Returns `None` if the quest is not active or not yet complete.
    pub fn turn_in(&mut self, id: &str) -> Option<Reward> {
        let index = self
            .active
            .iter()
            .position(|q| q.id == id && q.completed)?;
        let quest = self.active.remove(index);
        let reward = quest.reward.clone();
        self.completed.push(quest);
        Some(reward)
    }

    pub fn find(&self, id: &str) -> Option<&Quest> {
        self.available
            .iter()
            .chain(&self.active)
            .chain(&self.completed)
            .find(|q| q.id == id)
    }

    /// Restores disjointness on loaded data: an id keeps only its most
    /// advanced copy, and a quest in `completed` is marked complete.
    pub fn normalize(&mut self) {
        for quest in &mut self.completed {
            quest.completed = true;
        }
        let completed_ids: Vec<String> = self.completed.iter().map(|q| q.id.clone()).collect();
        self.active.retain(|q| !completed_ids.contains(&q.id));
        let active_ids: Vec<String> = self.active.iter().map(|q| q.id.clone()).collect();
        self.available
            .retain(|q| !completed_ids.contains(&q.id) && !active_ids.contains(&q.id));
    }
}
