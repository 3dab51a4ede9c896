//! Task domain model.
//!
//! # Responsibility
//! - Define `Task`, `SubTask` and their enumerations.
//! - Provide the draft constructor used by task creation flows.
//!
//! # Invariants
//! - `status == Completed` iff `completion_percentage == 100`. This holds after
//!   every completion toggle; it is not re-validated on plain updates.
//! - Subtasks have no lifecycle outside their parent task.

use crate::clock::Clock;
use crate::model::new_entity_id;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type TaskId = String;

/// Default estimate assigned to new task drafts, in minutes.
pub const DEFAULT_ESTIMATED_MINUTES: u32 = 30;
/// Default focus session length assigned to new task drafts, in minutes.
pub const DEFAULT_FOCUS_SESSION_MINUTES: u32 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Study,
    Work,
    Leisure,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Work => "work",
            Self::Leisure => "leisure",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttachmentKind {
    Image,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
}

impl SubTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            title: title.into(),
            is_completed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    /// Minutes.
    pub estimated_duration: u32,
    /// Minutes per focus session for this task.
    pub focus_session_length: u32,
    pub notes: String,
    pub sub_tasks: Vec<SubTask>,
    pub video_links: Vec<String>,
    pub external_links: Vec<String>,
    pub attachments: Vec<Attachment>,
    /// 0..=100.
    pub completion_percentage: u8,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task draft due today with default durations.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            id: new_entity_id(),
            title: title.into(),
            description: description.into(),
            category,
            priority,
            status: TaskStatus::Pending,
            due_date: clock.today(),
            estimated_duration: DEFAULT_ESTIMATED_MINUTES,
            focus_session_length: DEFAULT_FOCUS_SESSION_MINUTES,
            notes: String::new(),
            sub_tasks: Vec::new(),
            video_links: Vec::new(),
            external_links: Vec::new(),
            attachments: Vec::new(),
            completion_percentage: 0,
            created_at: clock.now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Sets both halves of the completion invariant at once.
    pub fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
        self.completion_percentage = 100;
    }

    /// Reverts both halves of the completion invariant at once.
    pub fn mark_pending(&mut self) {
        self.status = TaskStatus::Pending;
        self.completion_percentage = 0;
    }
}
