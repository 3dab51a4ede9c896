use chrono::NaiveDate;
use odtasks_core::collab::suggestion::{
    apply_breakdown, ensure_insights_available, ensure_suggestions_available,
    recent_task_summaries, SuggestedSubTask,
    SuggestionError, SuggestionProvider, TaskBreakdown, TaskSummary, INSIGHT_TASK_LIMIT,
};
use odtasks_core::{
    reduce, Action, AppState, AppStore, Category, Connectivity, FixedClock,
    MemoryStateRepository, Priority, Task,
};

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
}

struct CannedProvider;

impl SuggestionProvider for CannedProvider {
    fn break_down_task(
        &self,
        title: &str,
        _description: &str,
    ) -> Result<TaskBreakdown, SuggestionError> {
        Ok(TaskBreakdown {
            subtasks: vec![
                SuggestedSubTask {
                    title: format!("Outline {title}"),
                    duration: 10,
                },
                SuggestedSubTask {
                    title: "  ".to_string(),
                    duration: 5,
                },
                SuggestedSubTask {
                    title: "Review".to_string(),
                    duration: 15,
                },
            ],
            recommended_focus_minutes: 45,
        })
    }

    fn behavioral_insights(
        &self,
        recent_tasks: &[TaskSummary],
        total_focus_minutes: u64,
    ) -> Result<Vec<String>, SuggestionError> {
        Ok(vec![format!(
            "{} tasks, {} minutes",
            recent_tasks.len(),
            total_focus_minutes
        )])
    }
}

#[test]
fn breakdown_result_reenters_store_as_update_task() {
    let task = Task::new("essay", "", Category::Study, Priority::High, &clock());
    let mut store = AppStore::open(MemoryStateRepository::new(), clock(), Connectivity::default());
    store.dispatch(Action::AddTask(task.clone())).unwrap();

    ensure_suggestions_available(store.state(), store.is_online()).unwrap();
    let breakdown = CannedProvider.break_down_task(&task.title, &task.description).unwrap();
    let updated = apply_breakdown(&task, &breakdown);
    store.dispatch(Action::UpdateTask(updated)).unwrap();

    let stored = &store.state().tasks[0];
    let titles: Vec<&str> = stored.sub_tasks.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Outline essay", "Review"]);
    assert!(stored.sub_tasks.iter().all(|s| !s.is_completed));
    assert_eq!(stored.focus_session_length, 45);
}

#[test]
fn zero_recommendation_keeps_session_length() {
    let task = Task::new("essay", "", Category::Study, Priority::High, &clock());
    let updated = apply_breakdown(&task, &TaskBreakdown::default());
    assert_eq!(updated, task);
}

#[test]
fn insights_request_uses_the_newest_tasks() {
    let clock = clock();
    let mut state = AppState::initial();
    for index in 0..12 {
        let task = Task::new(format!("t{index}"), "", Category::Work, Priority::Low, &clock);
        state = reduce(&state, &Action::AddTask(task), &clock);
    }

    ensure_insights_available(&state, true).unwrap();
    let summaries = recent_task_summaries(&state, INSIGHT_TASK_LIMIT);
    assert_eq!(summaries.len(), 10);
    assert_eq!(summaries[0].title, "t11");

    let insights = CannedProvider
        .behavioral_insights(&summaries, state.user.total_focus_minutes)
        .unwrap();
    assert_eq!(insights, ["10 tasks, 0 minutes"]);
}

#[test]
fn suggestions_are_gated_by_toggle_and_connectivity() {
    let clock = clock();
    let state = AppState::initial();
    assert_eq!(
        ensure_suggestions_available(&state, false),
        Err(SuggestionError::Offline)
    );

    let disabled = reduce(&state, &Action::SetAiEnabled(false), &clock);
    assert_eq!(
        ensure_suggestions_available(&disabled, true),
        Err(SuggestionError::Disabled)
    );
}

#[test]
fn insights_are_skipped_without_tasks() {
    let clock = clock();
    let empty = AppState::initial();
    assert_eq!(
        ensure_insights_available(&empty, true),
        Err(SuggestionError::NoTasks)
    );
    assert_eq!(
        ensure_insights_available(&empty, false),
        Err(SuggestionError::Offline)
    );

    let task = Task::new("essay", "", Category::Study, Priority::High, &clock);
    let state = reduce(&empty, &Action::AddTask(task), &clock);
    assert_eq!(ensure_insights_available(&state, true), Ok(()));
}
