//! Pure state transition function.
//!
//! # Invariants
//! - `reduce` never fails and never performs I/O.
//! - Unknown ids turn update/delete/toggle actions into no-ops.
//! - User stats change only through `update_user`, which always applies raw
//!   fields first and recomputes derived fields second.

use crate::clock::Clock;
use crate::engine::level::level_for;
use crate::engine::streak::next_streak;
use crate::model::state::AppState;
use crate::model::user::{UserStats, UserStatsPatch};
use crate::reducer::action::Action;
use chrono::NaiveDate;

/// xp awarded when a task moves into the completed state.
pub const TASK_COMPLETION_XP: u64 = 50;
/// xp awarded for each finished focus session.
pub const FOCUS_SESSION_XP: u64 = 100;

/// Computes the state that follows `action`.
pub fn reduce(state: &AppState, action: &Action, clock: &dyn Clock) -> AppState {
    let mut next = state.clone();
    match action {
        Action::AddTask(task) => next.tasks.insert(0, task.clone()),
        Action::UpdateTask(task) => replace_by_id(&mut next.tasks, task.clone(), |t| &t.id),
        Action::DeleteTask(id) => next.tasks.retain(|task| &task.id != id),
        Action::ToggleTaskCompletion(id) => toggle_task_completion(&mut next, id, clock.today()),
        Action::ToggleSubTask {
            task_id,
            subtask_id,
        } => {
            if let Some(sub_task) = next
                .tasks
                .iter_mut()
                .find(|task| &task.id == task_id)
                .and_then(|task| task.sub_tasks.iter_mut().find(|sub| &sub.id == subtask_id))
            {
                sub_task.is_completed = !sub_task.is_completed;
            }
        }
        Action::AddNote(note) => next.notes.insert(0, note.clone()),
        Action::UpdateNote(note) => {
            let mut note = note.clone();
            note.updated_at = clock.now();
            replace_by_id(&mut next.notes, note, |n| &n.id);
        }
        Action::DeleteNote(id) => next.notes.retain(|note| &note.id != id),
        Action::UpdateUser(patch) => {
            if !patch.is_empty() {
                next.user = update_user(&state.user, patch, clock.today());
            }
        }
        Action::RecordFocusSession { minutes } => {
            let user = &state.user;
            let patch = UserStatsPatch {
                xp: Some(user.xp.saturating_add(FOCUS_SESSION_XP)),
                total_focus_minutes: Some(user.total_focus_minutes.saturating_add(*minutes)),
                focus_sessions: Some(user.focus_sessions.saturating_add(1)),
                ..UserStatsPatch::default()
            };
            next.user = update_user(user, &patch, clock.today());
        }
        Action::SetFocusMode(active) => next.focus_mode = *active,
        Action::SetTheme(theme) => next.theme = *theme,
        Action::SetAiEnabled(enabled) => next.ai_enabled = *enabled,
        Action::SetActiveTask(id) => next.active_task_id = id.clone(),
        Action::CompleteOnboarding => next.onboarded = true,
        Action::ResetAll => next = AppState::initial(),
        Action::Hydrate(snapshot) => next = hydrate(snapshot),
    }
    next
}

/// Applies a caller patch to `current` and recomputes derived fields.
pub fn update_user(current: &UserStats, patch: &UserStatsPatch, today: NaiveDate) -> UserStats {
    let mut next = current.clone();
    patch.apply_raw(&mut next);
    recompute_derived(current, &mut next, today);
    next
}

/// Recomputes level from the resulting xp, and runs the streak engine when
/// the completed task counter went up. A decrement leaves the streak as is.
pub fn recompute_derived(previous: &UserStats, next: &mut UserStats, today: NaiveDate) {
    next.level = level_for(next.xp);

    if next.completed_tasks > previous.completed_tasks {
        let update = next_streak(previous.streak, previous.last_activity_date, today);
        next.streak = update.streak;
        next.last_activity_date = Some(update.last_activity_date);
    } else {
        next.streak = previous.streak;
        next.last_activity_date = previous.last_activity_date;
    }
}

fn hydrate(snapshot: &AppState) -> AppState {
    let mut state = snapshot.clone();
    state.user.level = level_for(state.user.xp);
    state
}

fn toggle_task_completion(state: &mut AppState, id: &str, today: NaiveDate) {
    let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
        return;
    };

    if task.is_completed() {
        task.mark_pending();
        return;
    }

    task.mark_completed();
    let patch = UserStatsPatch {
        xp: Some(state.user.xp.saturating_add(TASK_COMPLETION_XP)),
        completed_tasks: Some(state.user.completed_tasks.saturating_add(1)),
        ..UserStatsPatch::default()
    };
    state.user = update_user(&state.user, &patch, today);
}

fn replace_by_id<T>(items: &mut [T], replacement: T, id_of: impl Fn(&T) -> &String) {
    let target = id_of(&replacement);
    if let Some(index) = items.iter().position(|item| id_of(item) == target) {
        items[index] = replacement;
    }
}
