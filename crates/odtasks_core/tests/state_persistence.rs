use chrono::NaiveDate;
use odtasks_core::db::open_db_in_memory;
use odtasks_core::{
    AppState, Attachment, AttachmentKind, Category, Clock, FixedClock, MemoryStateRepository,
    Note, Priority, SqliteStateRepository, StateRepository, SubTask, Task, TaskStatus, Theme,
    STATE_RECORD_KEY,
};
use rusqlite::params;

fn populated_state() -> AppState {
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
    let mut task = Task::new(
        "Write thesis",
        "chapter 2",
        Category::Study,
        Priority::High,
        &clock,
    );
    task.status = TaskStatus::InProgress;
    task.completion_percentage = 40;
    task.sub_tasks.push(SubTask::new("collect sources"));
    task.video_links.push("https://video.example/lecture".to_string());
    task.external_links.push("https://example.org/paper".to_string());
    task.attachments.push(Attachment {
        name: "figure.png".to_string(),
        url: "file:///tmp/figure.png".to_string(),
        kind: AttachmentKind::Image,
    });

    let mut note = Note::new(&clock);
    note.content = "# Ideas\n- one".to_string();
    note.attachments.push("sketch.jpg".to_string());

    let mut state = AppState::initial();
    state.tasks.push(task.clone());
    state.notes.push(note);
    state.user.xp = 1_550;
    state.user.level = 3;
    state.user.streak = 2;
    state.user.completed_tasks = 7;
    state.user.last_activity_date = Some(clock.today());
    state.theme = Theme::Dark;
    state.onboarded = true;
    state.active_task_id = Some(task.id);
    state
}

#[test]
fn sqlite_round_trip_preserves_state() {
    let repo = SqliteStateRepository::new(open_db_in_memory().unwrap());
    let state = populated_state();

    repo.save(&state).unwrap();

    assert_eq!(repo.load(), Some(state));
}

#[test]
fn memory_round_trip_preserves_state() {
    let repo = MemoryStateRepository::new();
    let state = populated_state();

    repo.save(&state).unwrap();

    assert_eq!(repo.load(), Some(state));
}

#[test]
fn save_overwrites_the_single_record() {
    let repo = SqliteStateRepository::new(open_db_in_memory().unwrap());
    let mut state = AppState::initial();
    repo.save(&state).unwrap();
    state.theme = Theme::Dark;
    repo.save(&state).unwrap();

    let rows: i64 = repo
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(repo.load().unwrap().theme, Theme::Dark);
}

#[test]
fn missing_record_loads_as_absent() {
    let repo = SqliteStateRepository::new(open_db_in_memory().unwrap());
    assert_eq!(repo.load(), None);
    assert_eq!(MemoryStateRepository::new().load(), None);
}

#[test]
fn corrupt_record_loads_as_absent() {
    let repo = SqliteStateRepository::new(open_db_in_memory().unwrap());
    repo.connection()
        .execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2);",
            params![STATE_RECORD_KEY, "{not json"],
        )
        .unwrap();

    assert_eq!(repo.load(), None);
}

#[test]
fn foreign_version_loads_as_absent() {
    let raw = serde_json::json!({ "version": 99, "state": {} }).to_string();
    assert_eq!(MemoryStateRepository::with_raw(raw).load(), None);
}

#[test]
fn unknown_enum_value_loads_as_absent() {
    let raw = serde_json::json!({
        "version": 1,
        "state": { "theme": "sepia" }
    })
    .to_string();
    assert_eq!(MemoryStateRepository::with_raw(raw).load(), None);
}

#[test]
fn record_missing_fields_falls_back_to_initial_values() {
    let raw = serde_json::json!({
        "version": 1,
        "state": { "onboarded": true, "user": { "name": "Lina", "xp": 600 } }
    })
    .to_string();

    let loaded = MemoryStateRepository::with_raw(raw).load().unwrap();

    assert!(loaded.onboarded);
    assert!(loaded.ai_enabled);
    assert_eq!(loaded.theme, Theme::Light);
    assert_eq!(loaded.user.name, "Lina");
    assert_eq!(loaded.user.xp, 600);
    assert!(loaded.tasks.is_empty());
}

#[test]
fn persisted_record_uses_camel_case_wire_fields() {
    let repo = MemoryStateRepository::new();
    repo.save(&populated_state()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&repo.raw().unwrap()).unwrap();
    let state = &json["state"];
    assert_eq!(state["theme"], "dark");
    assert_eq!(state["aiEnabled"], true);
    assert_eq!(state["user"]["lastActivityDate"], "2026-10-16");
    assert_eq!(state["user"]["completedTasks"], 7);
    assert_eq!(state["tasks"][0]["status"], "in-progress");
    assert_eq!(state["tasks"][0]["category"], "study");
    assert_eq!(state["tasks"][0]["completionPercentage"], 40);
    assert_eq!(state["tasks"][0]["dueDate"], "2026-10-16");
    assert_eq!(state["tasks"][0]["attachments"][0]["type"], "image");
    assert_eq!(state["tasks"][0]["subTasks"][0]["isCompleted"], false);
}
