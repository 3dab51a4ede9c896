//! Core state engine for OD Tasks.
//! This crate is the single source of truth for progress invariants
//! (levels, streaks, completion) and for the durable state record.

pub mod clock;
pub mod collab;
pub mod dashboard;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod reducer;
pub mod repo;
pub mod search;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{dashboard, Dashboard};
pub use engine::level::{level_for, level_progress, LevelProgress, LEVEL_THRESHOLDS, MAX_LEVEL};
pub use engine::streak::{next_streak, StreakUpdate};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::state::{AppState, Theme};
pub use model::task::{
    Attachment, AttachmentKind, Category, Priority, SubTask, Task, TaskId, TaskStatus,
};
pub use model::user::{UserStats, UserStatsPatch};
pub use reducer::{reduce, Action};
pub use repo::state_repo::{
    MemoryStateRepository, RepoError, RepoResult, SqliteStateRepository, StateRepository,
    STATE_RECORD_KEY,
};
pub use store::{AppStore, Connectivity, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
