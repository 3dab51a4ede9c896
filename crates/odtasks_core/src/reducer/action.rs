//! Actions accepted by the reducer.
//!
//! The JSON shape mirrors what hosts send over the FFI boundary:
//! `{"type": "ADD_TASK", "payload": {...}}`.

use crate::model::note::{Note, NoteId};
use crate::model::state::{AppState, Theme};
use crate::model::task::{Task, TaskId};
use crate::model::user::UserStatsPatch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddTask(Task),
    UpdateTask(Task),
    DeleteTask(TaskId),
    /// Flips a task between pending and completed and awards completion xp.
    ToggleTaskCompletion(TaskId),
    #[serde(rename_all = "camelCase")]
    ToggleSubTask {
        task_id: TaskId,
        subtask_id: String,
    },
    AddNote(Note),
    UpdateNote(Note),
    DeleteNote(NoteId),
    UpdateUser(UserStatsPatch),
    /// A finished focus session of `minutes` length.
    RecordFocusSession {
        minutes: u64,
    },
    SetFocusMode(bool),
    SetTheme(Theme),
    SetAiEnabled(bool),
    SetActiveTask(Option<TaskId>),
    CompleteOnboarding,
    /// Wipes everything back to the initial state and commits it.
    ResetAll,
    /// Startup-only wholesale replacement from a persisted snapshot.
    Hydrate(Box<AppState>),
}

impl Action {
    /// Stable name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddTask(_) => "add_task",
            Self::UpdateTask(_) => "update_task",
            Self::DeleteTask(_) => "delete_task",
            Self::ToggleTaskCompletion(_) => "toggle_task_completion",
            Self::ToggleSubTask { .. } => "toggle_subtask",
            Self::AddNote(_) => "add_note",
            Self::UpdateNote(_) => "update_note",
            Self::DeleteNote(_) => "delete_note",
            Self::UpdateUser(_) => "update_user",
            Self::RecordFocusSession { .. } => "record_focus_session",
            Self::SetFocusMode(_) => "set_focus_mode",
            Self::SetTheme(_) => "set_theme",
            Self::SetAiEnabled(_) => "set_ai_enabled",
            Self::SetActiveTask(_) => "set_active_task",
            Self::CompleteOnboarding => "complete_onboarding",
            Self::ResetAll => "reset_all",
            Self::Hydrate(_) => "hydrate",
        }
    }

    /// Whether the store must persist the state produced by this action.
    pub fn commits(&self) -> bool {
        !matches!(self, Self::Hydrate(_))
    }
}
