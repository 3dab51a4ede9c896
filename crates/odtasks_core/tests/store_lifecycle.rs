use chrono::NaiveDate;
use odtasks_core::{
    Action, AppState, AppStore, Category, Connectivity, FixedClock, MemoryStateRepository,
    Priority, RepoError, RepoResult, SqliteStateRepository, StateRepository, StoreError, Task,
    TaskStatus, Theme,
};
use std::cell::Cell;

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
}

fn draft(title: &str) -> Task {
    Task::new(title, "", Category::Other, Priority::Low, &clock())
}

#[test]
fn empty_store_starts_from_initial_state_without_writing() {
    let store = AppStore::open(MemoryStateRepository::new(), clock(), Connectivity::default());

    assert_eq!(store.state(), &AppState::initial());
    assert!(store.state().ai_enabled);
    assert!(!store.state().onboarded);
    assert_eq!(store.repository().raw(), None);
}

#[test]
fn every_dispatch_commits_the_new_state() {
    let mut store = AppStore::open(MemoryStateRepository::new(), clock(), Connectivity::default());

    store.dispatch(Action::SetTheme(Theme::Dark)).unwrap();
    assert_eq!(store.repository().load().unwrap(), *store.state());

    store.dispatch(Action::AddTask(draft("Walk"))).unwrap();
    assert_eq!(store.repository().load().unwrap(), *store.state());
    assert_eq!(store.state().tasks.len(), 1);
}

#[test]
fn noop_dispatch_still_commits() {
    let mut store = AppStore::open(MemoryStateRepository::new(), clock(), Connectivity::default());

    store
        .dispatch(Action::DeleteTask("missing".to_string()))
        .unwrap();

    assert_eq!(store.state(), &AppState::initial());
    assert_eq!(store.repository().load(), Some(AppState::initial()));
}

#[test]
fn reopening_a_database_file_restores_the_last_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.db");
    let task = draft("Persist me");

    let expected = {
        let repo = SqliteStateRepository::open(&path).unwrap();
        let mut store = AppStore::open(repo, clock(), Connectivity::default());
        store
            .dispatch_all([
                Action::CompleteOnboarding,
                Action::AddTask(task.clone()),
                Action::ToggleTaskCompletion(task.id.clone()),
            ])
            .unwrap();
        store.state().clone()
    };

    let repo = SqliteStateRepository::open(&path).unwrap();
    let store = AppStore::open(repo, clock(), Connectivity::default());

    assert_eq!(store.state(), &expected);
    assert!(store.state().onboarded);
    assert_eq!(store.state().tasks[0].status, TaskStatus::Completed);
    assert_eq!(store.state().user.streak, 1);
}

#[test]
fn reset_all_is_durable_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.db");

    {
        let repo = SqliteStateRepository::open(&path).unwrap();
        let mut store = AppStore::open(repo, clock(), Connectivity::default());
        store
            .dispatch_all([
                Action::SetTheme(Theme::Dark),
                Action::CompleteOnboarding,
                Action::RecordFocusSession { minutes: 25 },
                Action::AddTask(draft("Wipe me")),
            ])
            .unwrap();
        store.dispatch(Action::ResetAll).unwrap();
        assert_eq!(store.state(), &AppState::initial());
    }

    let repo = SqliteStateRepository::open(&path).unwrap();
    let store = AppStore::open(repo, clock(), Connectivity::default());

    assert_eq!(store.state(), &AppState::initial());
    assert_eq!(store.state().theme, Theme::Light);
    assert_eq!(store.state().user.xp, 0);
}

#[test]
fn corrupt_record_falls_back_to_initial_state() {
    let repo = MemoryStateRepository::with_raw("{\"version\": 1, \"state\": [");
    let store = AppStore::open(repo, clock(), Connectivity::default());

    assert_eq!(store.state(), &AppState::initial());
}

#[test]
fn hydrate_on_open_rederives_level() {
    let mut snapshot = AppState::initial();
    snapshot.user.xp = 3_200;
    snapshot.user.level = 1;
    let repo = MemoryStateRepository::new();
    repo.save(&snapshot).unwrap();

    let store = AppStore::open(repo, clock(), Connectivity::default());

    assert_eq!(store.state().user.level, 4);
}

#[test]
fn hydrate_dispatch_does_not_commit() {
    let mut store = AppStore::open(MemoryStateRepository::new(), clock(), Connectivity::default());
    let mut snapshot = AppState::initial();
    snapshot.theme = Theme::Dark;

    store.dispatch(Action::Hydrate(Box::new(snapshot))).unwrap();

    assert_eq!(store.state().theme, Theme::Dark);
    assert_eq!(store.repository().raw(), None);
}

struct FailingRepository {
    attempts: Cell<u32>,
}

impl StateRepository for FailingRepository {
    fn save(&self, _state: &AppState) -> RepoResult<()> {
        self.attempts.set(self.attempts.get() + 1);
        Err(RepoError::from(rusqlite::Error::QueryReturnedNoRows))
    }

    fn load(&self) -> Option<AppState> {
        None
    }
}

#[test]
fn commit_failure_keeps_new_state_and_reports_error() {
    let repo = FailingRepository {
        attempts: Cell::new(0),
    };
    let mut store = AppStore::open(repo, clock(), Connectivity::default());

    let err = store.dispatch(Action::SetFocusMode(true)).unwrap_err();

    assert!(matches!(err, StoreError::Commit { action: "set_focus_mode", .. }));
    assert!(store.state().focus_mode);
    assert_eq!(store.repository().attempts.get(), 1);
}

#[test]
fn store_reads_connectivity_updated_by_host() {
    let host_signal = Connectivity::new(true);
    let store = AppStore::open(MemoryStateRepository::new(), clock(), host_signal.clone());
    assert!(store.is_online());

    host_signal.set_online(false);
    assert!(!store.is_online());

    host_signal.set_online(true);
    assert!(store.is_online());
}
