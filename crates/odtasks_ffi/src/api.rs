//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the store (state read, dispatch) and read projections to Dart
//!   via FRB.
//! - Keep error semantics simple: envelopes with `ok + message`.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One store per process; all dispatches go through its lock, so
//!   reductions never interleave.
//! - Actions and state cross the boundary as the same JSON shapes the
//!   durable record uses.

use log::warn;
use odtasks_core::collab::debounce::{Debouncer, NOTE_AUTOSAVE_QUIET};
use odtasks_core::search::filter::{filter_notes, filter_tasks};
use odtasks_core::search::preview::note_summaries;
use odtasks_core::{
    core_version as core_version_inner, dashboard, init_logging as init_logging_inner,
    ping as ping_inner, Action, AppStore, Connectivity, Note, SqliteStateRepository, SystemClock,
};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::Instant;

const APP_DB_FILE_NAME: &str = "odtasks_state.sqlite3";
const DB_PATH_ENV: &str = "ODTASKS_DB_PATH";

static STORE: Mutex<Option<OpenStore>> = Mutex::new(None);
static CONNECTIVITY: OnceLock<Connectivity> = OnceLock::new();
static NOTE_DRAFT: Mutex<Debouncer<Note>> = Mutex::new(Debouncer::new(NOTE_AUTOSAVE_QUIET));

struct OpenStore {
    db_path: PathBuf,
    store: AppStore<SqliteStateRepository>,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic response envelope for store calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppActionResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl AppActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// State snapshot envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppStateResponse {
    pub ok: bool,
    /// Serialized `AppState`; empty on failure.
    pub state_json: String,
    pub message: String,
}

/// Dashboard figures for the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub total_tasks: u32,
    pub pending_tasks: u32,
    pub in_progress_tasks: u32,
    pub completed_tasks: u32,
    pub completion_rate: u8,
    pub level: u32,
    pub level_percent: u8,
    /// `None` at the top level.
    pub next_level_xp: Option<u64>,
    pub xp: u64,
    pub streak: u32,
    pub total_focus_minutes: u64,
    pub focus_sessions: u64,
}

/// Task list row returned by `search_tasks`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListItem {
    pub task_id: String,
    pub title: String,
    /// `study|work|leisure|other`.
    pub category: String,
    /// `low|medium|high`.
    pub priority: String,
    /// `pending|in-progress|completed`.
    pub status: String,
    pub completion_percentage: u8,
}

/// Note list row returned by `search_notes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub note_id: String,
    pub title: String,
    pub folder: String,
    /// Markdown-stripped preview; `None` for blank notes.
    pub preview: Option<String>,
    pub updated_at_epoch_ms: i64,
}

/// Opens (or reopens) the store backed by the SQLite file at `db_path`.
///
/// Input semantics:
/// - `db_path`: `None` or blank falls back to `ODTASKS_DB_PATH`, then to a
///   file in the OS temp directory.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Reopening the same path is a no-op; another path replaces the store.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn app_open(db_path: Option<String>) -> AppActionResponse {
    let path = resolve_db_path(db_path.as_deref());
    let mut guard = lock_store();
    if let Some(open) = guard.as_ref() {
        if open.db_path == path {
            return AppActionResponse::success("Store already open.");
        }
    }
    match open_store(path) {
        Ok(open) => {
            *guard = Some(open);
            AppActionResponse::success("Store opened.")
        }
        Err(err) => AppActionResponse::failure(format!("app_open failed: {err}")),
    }
}

/// Returns the current state as JSON.
///
/// # FFI contract
/// - Opens the default store on first use.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn app_state_json() -> AppStateResponse {
    let result = with_store(|store| {
        serde_json::to_string(store.state()).map_err(|err| format!("encode state failed: {err}"))
    });
    match result {
        Ok(state_json) => AppStateResponse {
            ok: true,
            state_json,
            message: String::new(),
        },
        Err(err) => AppStateResponse {
            ok: false,
            state_json: String::new(),
            message: format!("app_state_json failed: {err}"),
        },
    }
}

/// Dispatches one action given as `{"type": ..., "payload": ...}` JSON.
///
/// # FFI contract
/// - Malformed actions are rejected without touching state.
/// - A failed commit reports `ok=false` but the in-memory state has still
///   moved on; callers re-read it with `app_state_json`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn app_dispatch(action_json: String) -> AppActionResponse {
    let action: Action = match serde_json::from_str(&action_json) {
        Ok(action) => action,
        Err(err) => {
            warn!("event=ffi_dispatch module=ffi status=error error_code=invalid_action");
            return AppActionResponse::failure(format!("invalid action: {err}"));
        }
    };
    let kind = action.kind();
    match with_store(|store| store.dispatch(action).map_err(|err| err.to_string())) {
        Ok(()) => AppActionResponse::success(format!("{kind} applied.")),
        Err(err) => AppActionResponse::failure(format!("app_dispatch failed: {err}")),
    }
}

/// Erases every task, note and stat and commits the initial state.
///
/// # FFI contract
/// - Also drops any pending note draft.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn app_reset() -> AppActionResponse {
    lock_draft().cancel();
    match with_store(|store| store.dispatch(Action::ResetAll).map_err(|err| err.to_string())) {
        Ok(()) => AppActionResponse::success("All data erased."),
        Err(err) => AppActionResponse::failure(format!("app_reset failed: {err}")),
    }
}

/// Stages an edited note; only the last edit in a burst is saved.
///
/// Input semantics:
/// - `note_json`: full `Note` record as JSON.
///
/// # FFI contract
/// - Nothing is dispatched here; call `note_draft_poll` on a timer and
///   `note_draft_flush` when the editor closes.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_draft_update(note_json: String) -> AppActionResponse {
    match serde_json::from_str::<Note>(&note_json) {
        Ok(note) => {
            lock_draft().push(note, Instant::now());
            AppActionResponse::success("Draft staged.")
        }
        Err(err) => AppActionResponse::failure(format!("invalid note: {err}")),
    }
}

/// Saves the staged note once the autosave quiet period has passed.
#[flutter_rust_bridge::frb(sync)]
pub fn note_draft_poll() -> AppActionResponse {
    let ready = lock_draft().poll(Instant::now());
    save_draft(ready)
}

/// Saves the staged note immediately.
#[flutter_rust_bridge::frb(sync)]
pub fn note_draft_flush() -> AppActionResponse {
    let ready = lock_draft().flush();
    save_draft(ready)
}

/// Records the host's connectivity. Returns whether the flag changed.
#[flutter_rust_bridge::frb(sync)]
pub fn set_online(online: bool) -> bool {
    connectivity().set_online(online)
}

/// Dashboard figures for the current state.
///
/// # FFI contract
/// - Returns `None` when the store cannot be opened.
#[flutter_rust_bridge::frb(sync)]
pub fn app_dashboard() -> Option<DashboardView> {
    with_store(|store| {
        let state = store.state();
        let summary = dashboard(state);
        Ok(DashboardView {
            total_tasks: count_u32(summary.total_tasks),
            pending_tasks: count_u32(summary.pending_tasks),
            in_progress_tasks: count_u32(summary.in_progress_tasks),
            completed_tasks: count_u32(summary.completed_tasks),
            completion_rate: summary.completion_rate,
            level: summary.level.level,
            level_percent: summary.level_percent,
            next_level_xp: summary.level.next_xp,
            xp: state.user.xp,
            streak: summary.streak,
            total_focus_minutes: summary.total_focus_minutes,
            focus_sessions: summary.focus_sessions,
        })
    })
    .ok()
}

/// Tasks matching `term` (title, category or priority); blank lists all.
#[flutter_rust_bridge::frb(sync)]
pub fn search_tasks(term: String) -> Vec<TaskListItem> {
    with_store(|store| {
        Ok(filter_tasks(&store.state().tasks, &term)
            .into_iter()
            .map(|task| TaskListItem {
                task_id: task.id.clone(),
                title: task.title.clone(),
                category: task.category.label().to_string(),
                priority: task.priority.label().to_string(),
                status: task.status.label().to_string(),
                completion_percentage: task.completion_percentage,
            })
            .collect())
    })
    .unwrap_or_default()
}

/// Notes matching `term` (title or content); blank lists all.
#[flutter_rust_bridge::frb(sync)]
pub fn search_notes(term: String) -> Vec<NoteListItem> {
    with_store(|store| {
        let hits = filter_notes(&store.state().notes, &term)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        Ok(note_summaries(&hits)
            .into_iter()
            .map(|row| NoteListItem {
                note_id: row.id,
                title: row.title,
                folder: row.folder,
                preview: row.preview,
                updated_at_epoch_ms: row.updated_at.timestamp_millis(),
            })
            .collect())
    })
    .unwrap_or_default()
}

fn connectivity() -> &'static Connectivity {
    CONNECTIVITY.get_or_init(Connectivity::default)
}

fn lock_store() -> MutexGuard<'static, Option<OpenStore>> {
    STORE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn lock_draft() -> MutexGuard<'static, Debouncer<Note>> {
    NOTE_DRAFT
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn save_draft(ready: Option<Note>) -> AppActionResponse {
    let Some(note) = ready else {
        return AppActionResponse::success("Nothing to save.");
    };
    match with_store(|store| {
        store
            .dispatch(Action::UpdateNote(note))
            .map_err(|err| err.to_string())
    }) {
        Ok(()) => AppActionResponse::success("Note saved."),
        Err(err) => AppActionResponse::failure(format!("note autosave failed: {err}")),
    }
}

fn open_store(db_path: PathBuf) -> Result<OpenStore, String> {
    let repo = SqliteStateRepository::open(&db_path)
        .map_err(|err| format!("state DB open failed: {err}"))?;
    let store = AppStore::open(repo, SystemClock, connectivity().clone());
    Ok(OpenStore { db_path, store })
}

fn with_store<T>(
    f: impl FnOnce(&mut AppStore<SqliteStateRepository>) -> Result<T, String>,
) -> Result<T, String> {
    let mut guard = lock_store();
    if guard.is_none() {
        *guard = Some(open_store(resolve_db_path(None))?);
    }
    match guard.as_mut() {
        Some(open) => f(&mut open.store),
        None => Err("store is not open".to_string()),
    }
}

fn resolve_db_path(explicit: Option<&str>) -> PathBuf {
    if let Some(raw) = explicit {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    if let Ok(raw) = std::env::var(DB_PATH_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    std::env::temp_dir().join(APP_DB_FILE_NAME)
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
