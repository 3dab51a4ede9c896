//! Read-only progress summary derived from `AppState`.

use crate::engine::level::{level_progress, LevelProgress};
use crate::model::state::AppState;
use crate::model::task::TaskStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total_tasks: usize,
    pub pending_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
    /// Share of tasks in the completed state, 0..=100.
    pub completion_rate: u8,
    pub level: LevelProgress,
    /// Percent through the current level band.
    pub level_percent: u8,
    pub streak: u32,
    pub total_focus_minutes: u64,
    pub focus_sessions: u64,
}

pub fn dashboard(state: &AppState) -> Dashboard {
    let count = |status: TaskStatus| state.tasks.iter().filter(|t| t.status == status).count();
    let total_tasks = state.tasks.len();
    let completed_tasks = count(TaskStatus::Completed);
    let completion_rate = if total_tasks == 0 {
        0
    } else {
        ((completed_tasks * 100) / total_tasks) as u8
    };
    let level = level_progress(state.user.xp);

    Dashboard {
        total_tasks,
        pending_tasks: count(TaskStatus::Pending),
        in_progress_tasks: count(TaskStatus::InProgress),
        completed_tasks,
        completion_rate,
        level,
        level_percent: level.percent(state.user.xp),
        streak: state.user.streak,
        total_focus_minutes: state.user.total_focus_minutes,
        focus_sessions: state.user.focus_sessions,
    }
}
