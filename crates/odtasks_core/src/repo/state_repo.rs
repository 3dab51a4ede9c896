//! Durable snapshot of `AppState` under one fixed key.
//!
//! # Responsibility
//! - Serialize the whole state into a versioned JSON record.
//! - Read the record back, or report it as absent.
//!
//! # Invariants
//! - `save` writes exactly one row (`STATE_RECORD_KEY`) and never debounces.
//! - `load` never returns an error: missing, unparseable or foreign-version
//!   records are all `None`.
//! - Record content (task/note text) is never logged.

use crate::db::{open_db, DbError};
use crate::model::state::AppState;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Storage key of the single state record.
pub const STATE_RECORD_KEY: &str = "od_tasks_pro_state";
/// Record envelope version written by this build.
pub const STATE_RECORD_VERSION: u32 = 1;

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode state record: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Save/load contract for the durable state record.
pub trait StateRepository {
    fn save(&self, state: &AppState) -> RepoResult<()>;
    fn load(&self) -> Option<AppState>;
}

#[derive(Serialize)]
struct RecordOut<'a> {
    version: u32,
    state: &'a AppState,
}

#[derive(Deserialize)]
struct RecordIn {
    version: u32,
    state: AppState,
}

/// Encodes `state` into the versioned record text.
pub fn encode_record(state: &AppState) -> RepoResult<String> {
    let record = RecordOut {
        version: STATE_RECORD_VERSION,
        state,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Decodes record text, treating every failure as an absent record.
pub fn decode_record(raw: &str) -> Option<AppState> {
    let record = match serde_json::from_str::<RecordIn>(raw) {
        Ok(record) => record,
        Err(err) => {
            warn!(
                "event=state_load module=repo status=discarded reason=parse_failed line={} column={}",
                err.line(),
                err.column()
            );
            return None;
        }
    };

    if record.version != STATE_RECORD_VERSION {
        warn!(
            "event=state_load module=repo status=discarded reason=version_mismatch found={} supported={}",
            record.version, STATE_RECORD_VERSION
        );
        return None;
    }

    Some(record.state)
}

/// SQLite-backed state record in the `kv_store` table.
pub struct SqliteStateRepository {
    conn: Connection,
}

impl SqliteStateRepository {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Opens the database at `path`, applying migrations.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn read_raw(&self) -> RepoResult<Option<String>> {
        let raw = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [STATE_RECORD_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(raw)
    }
}

impl StateRepository for SqliteStateRepository {
    fn save(&self, state: &AppState) -> RepoResult<()> {
        let raw = encode_record(state)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![STATE_RECORD_KEY, raw],
        )?;
        debug!(
            "event=state_save module=repo status=ok bytes={} tasks={} notes={}",
            raw.len(),
            state.tasks.len(),
            state.notes.len()
        );
        Ok(())
    }

    fn load(&self) -> Option<AppState> {
        match self.read_raw() {
            Ok(Some(raw)) => decode_record(&raw),
            Ok(None) => {
                debug!("event=state_load module=repo status=absent");
                None
            }
            Err(err) => {
                warn!("event=state_load module=repo status=discarded reason=read_failed error={err}");
                None
            }
        }
    }
}

/// In-process record holder for tests and hosts without a disk.
#[derive(Debug, Default)]
pub struct MemoryStateRepository {
    record: RefCell<Option<String>>,
}

impl MemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the holder with raw record text, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            record: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl StateRepository for MemoryStateRepository {
    fn save(&self, state: &AppState) -> RepoResult<()> {
        let raw = encode_record(state)?;
        *self.record.borrow_mut() = Some(raw);
        Ok(())
    }

    fn load(&self) -> Option<AppState> {
        self.record.borrow().as_deref().and_then(decode_record)
    }
}
