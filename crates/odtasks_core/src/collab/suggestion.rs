//! Contracts for the external AI suggestion service.
//!
//! # Responsibility
//! - Describe the two request/response shapes the UI exchanges with the
//!   service: task breakdown and behavioral insights.
//! - Turn a breakdown into an `UpdateTask` payload.
//!
//! # Invariants
//! - Nothing here performs network I/O; results re-enter the store only as
//!   ordinary dispatched actions.
//! - An empty service response is an empty suggestion, not an error.

use crate::model::state::AppState;
use crate::model::task::{Category, SubTask, Task, TaskStatus};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Number of recent tasks sent along with an insights request.
pub const INSIGHT_TASK_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedSubTask {
    pub title: String,
    /// Expected minutes; informational only.
    #[serde(default)]
    pub duration: u32,
}

/// Service answer to "split this task into steps".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskBreakdown {
    #[serde(default)]
    pub subtasks: Vec<SuggestedSubTask>,
    /// Suggested focus session length in minutes; 0 means no suggestion.
    #[serde(rename = "recommendedPomodoro", default)]
    pub recommended_focus_minutes: u32,
}

/// Compact task view sent to the insights request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub title: String,
    pub category: Category,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// The user switched AI suggestions off.
    Disabled,
    /// The host reports no connectivity.
    Offline,
    /// Insights need at least one task to look at.
    NoTasks,
    /// Provider-side failure, passed through as text.
    Provider(String),
    /// The provider answered with a body that does not match the contract.
    InvalidResponse(String),
}

impl Display for SuggestionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled => write!(f, "AI suggestions are disabled"),
            Self::Offline => write!(f, "AI suggestions need a network connection"),
            Self::NoTasks => write!(f, "insights need at least one task"),
            Self::Provider(message) => write!(f, "suggestion provider failed: {message}"),
            Self::InvalidResponse(message) => {
                write!(f, "invalid suggestion response: {message}")
            }
        }
    }
}

impl Error for SuggestionError {}

/// External AI collaborator.
pub trait SuggestionProvider {
    fn break_down_task(
        &self,
        title: &str,
        description: &str,
    ) -> Result<TaskBreakdown, SuggestionError>;

    fn behavioral_insights(
        &self,
        recent_tasks: &[TaskSummary],
        total_focus_minutes: u64,
    ) -> Result<Vec<String>, SuggestionError>;
}

/// Checks the user toggle and connectivity before calling a provider.
pub fn ensure_suggestions_available(
    state: &AppState,
    online: bool,
) -> Result<(), SuggestionError> {
    if !state.ai_enabled {
        return Err(SuggestionError::Disabled);
    }
    if !online {
        return Err(SuggestionError::Offline);
    }
    Ok(())
}

/// Gate for the insights request: the general checks plus a non-empty task
/// list, so an empty workspace never reaches the provider.
pub fn ensure_insights_available(state: &AppState, online: bool) -> Result<(), SuggestionError> {
    ensure_suggestions_available(state, online)?;
    if state.tasks.is_empty() {
        return Err(SuggestionError::NoTasks);
    }
    Ok(())
}

/// Parses a breakdown body; a blank body is an empty breakdown.
pub fn parse_breakdown(raw: &str) -> Result<TaskBreakdown, SuggestionError> {
    if raw.trim().is_empty() {
        return Ok(TaskBreakdown::default());
    }
    serde_json::from_str(raw).map_err(|err| SuggestionError::InvalidResponse(err.to_string()))
}

/// Parses an insights body (a JSON string array); blank is empty.
pub fn parse_insights(raw: &str) -> Result<Vec<String>, SuggestionError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|err| SuggestionError::InvalidResponse(err.to_string()))
}

/// Returns `task` with suggested subtasks appended and the recommended
/// session length adopted when the service gave one.
pub fn apply_breakdown(task: &Task, breakdown: &TaskBreakdown) -> Task {
    let mut next = task.clone();
    next.sub_tasks.extend(
        breakdown
            .subtasks
            .iter()
            .filter(|suggested| !suggested.title.trim().is_empty())
            .map(|suggested| SubTask::new(suggested.title.trim())),
    );
    if breakdown.recommended_focus_minutes > 0 {
        next.focus_session_length = breakdown.recommended_focus_minutes;
    }
    next
}

/// The newest `limit` tasks in summary form.
pub fn recent_task_summaries(state: &AppState, limit: usize) -> Vec<TaskSummary> {
    state
        .tasks
        .iter()
        .take(limit)
        .map(|task| TaskSummary {
            title: task.title.clone(),
            category: task.category,
            status: task.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_breakdown, parse_insights, SuggestionError};

    #[test]
    fn breakdown_parses_service_shape() {
        let raw = r#"{"subtasks":[{"title":"Outline","duration":15}],"recommendedPomodoro":40}"#;
        let breakdown = parse_breakdown(raw).unwrap();
        assert_eq!(breakdown.subtasks.len(), 1);
        assert_eq!(breakdown.subtasks[0].title, "Outline");
        assert_eq!(breakdown.recommended_focus_minutes, 40);
    }

    #[test]
    fn blank_bodies_are_empty_suggestions() {
        assert!(parse_breakdown("").unwrap().subtasks.is_empty());
        assert!(parse_insights("  ").unwrap().is_empty());
    }

    #[test]
    fn malformed_insights_are_invalid_response() {
        let err = parse_insights("{\"tips\": 3}").unwrap_err();
        assert!(matches!(err, SuggestionError::InvalidResponse(_)));
    }
}
