//! Aggregate root owned by the store.

use crate::model::note::Note;
use crate::model::task::{Task, TaskId};
use crate::model::user::UserStats;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Full application state.
///
/// Missing fields in a persisted record fall back to the initial values, so
/// older records with fewer fields still hydrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    /// Newest first.
    pub tasks: Vec<Task>,
    /// Newest first.
    pub notes: Vec<Note>,
    pub user: UserStats,
    pub theme: Theme,
    pub onboarded: bool,
    pub focus_mode: bool,
    pub active_task_id: Option<TaskId>,
    pub ai_enabled: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            notes: Vec::new(),
            user: UserStats::default(),
            theme: Theme::Light,
            onboarded: false,
            focus_mode: false,
            active_task_id: None,
            ai_enabled: true,
        }
    }
}

impl AppState {
    /// Fixed initial value used when no snapshot can be loaded.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn active_task(&self) -> Option<&Task> {
        self.active_task_id.as_deref().and_then(|id| self.task(id))
    }
}
