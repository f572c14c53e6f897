use crate::items::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    Kill,
    Talk,
    Collect,
}

impl ActionType {
    pub fn verb(&self) -> &'static str {
        match self {
            ActionType::Kill => "Kill",
            ActionType::Talk => "Talk to",
            ActionType::Collect => "Collect",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub action: ActionType,
    pub target: String,
    pub required: u32,
}

impl Objective {
    pub fn new(action: ActionType, target: &str, required: u32) -> Self {
        Self {
            action,
            target: target.to_string(),
            required,
        }
    }

    fn matches(&self, action: ActionType, target: &str) -> bool {
        self.action == action && self.target == target
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub experience: u64,
    pub gold: u64,
    #[serde(default)]
    pub items: Vec<ItemId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub objectives: Vec<Objective>,
    pub reward: Reward,
    /// Counter per objective target.
    #[serde(default)]
    pub progress: BTreeMap<String, u32>,
    #[serde(default)]
    pub completed: bool,
}

impl Quest {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        objectives: Vec<Objective>,
        reward: Reward,
    ) -> Self {
        let progress = objectives
            .iter()
            .map(|objective| (objective.target.clone(), 0))
            .collect();
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            objectives,
            reward,
            progress,
            completed: false,
        }
    }

    pub fn progress_for(&self, target: &str) -> u32 {
        self.progress.get(target).copied().unwrap_or(0)
    }

    fn all_objectives_met(&self) -> bool {
        self.objectives
            .iter()
            .all(|objective| self.progress_for(&objective.target) >= objective.required)
    }

    /// Records progress on a matching objective. Returns true only on the
    /// update that completes the quest; completed quests are frozen.
    pub fn update_progress(&mut self, action: ActionType, target: &str, amount: u32) -> bool {
        if self.completed
            || !self
                .objectives
                .iter()
                .any(|objective| objective.matches(action, target))
        {
            return false;
        }
        let counter = self.progress.entry(target.to_string()).or_insert(0);
        *counter = counter.saturating_add(amount);
        if self.all_objectives_met() {
            self.completed = true;
            return true;
        }
        false
    }

    /// One line per objective, e.g. `Kill slime 3/5`.
    pub fn summary_lines(&self) -> Vec<String> {
        self.objectives
            .iter()
            .map(|objective| {
                format!(
                    "{} {} {}/{}",
                    objective.action.verb(),
                    objective.target,
                    self.progress_for(&objective.target).min(objective.required),
                    objective.required
                )
            })
            .collect()
    }
}
