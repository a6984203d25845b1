use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::ModuleId;

/// Completion state of one module as shown in the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Aggregate course progress, derived from per-module completion flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    completed: BTreeSet<ModuleId>,
}

impl Progress {
    #[must_use]
    pub fn new(completed: impl IntoIterator<Item = ModuleId>) -> Self {
        Self {
            completed: completed.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn completed(&self) -> &BTreeSet<ModuleId> {
        &self.completed
    }

    #[must_use]
    pub fn is_complete(&self, id: ModuleId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        ModuleId::COUNT
    }

    /// Percentage of completed modules, in `0.0..=100.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        self.completed.len() as f64 / ModuleId::COUNT as f64 * 100.0
    }
}

/// Progress read back from durable storage at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub progress: Progress,
    pub last_viewed: Option<ModuleId>,
}

impl ProgressSnapshot {
    /// A module is in progress when it was the last one viewed and is not yet complete.
    #[must_use]
    pub fn status(&self, id: ModuleId) -> ModuleStatus {
        if self.progress.is_complete(id) {
            ModuleStatus::Completed
        } else if self.last_viewed == Some(id) {
            ModuleStatus::InProgress
        } else {
            ModuleStatus::NotStarted
        }
    }
}
