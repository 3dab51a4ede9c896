//! Progress statistics and the restricted patch type used to change them.
//!
//! # Responsibility
//! - Hold cumulative counters (xp, focus minutes, completions, sessions).
//! - Hold derived fields (level, streak, last activity date).
//!
//! # Invariants
//! - Derived fields never appear in `UserStatsPatch`, so a collaborator has
//!   no way to set them.
//! - `level` always equals `level_for(xp)` after any reducer step.

use crate::engine::level::MIN_LEVEL;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_NAME: &str = "OD User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub name: String,
    pub xp: u64,
    /// Derived from `xp`.
    pub level: u32,
    /// Derived by the streak engine.
    pub streak: u32,
    /// Minutes.
    pub total_focus_minutes: u64,
    pub completed_tasks: u64,
    pub focus_sessions: u64,
    /// Derived by the streak engine.
    pub last_activity_date: Option<NaiveDate>,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            name: DEFAULT_USER_NAME.to_string(),
            xp: 0,
            level: MIN_LEVEL,
            streak: 0,
            total_focus_minutes: 0,
            completed_tasks: 0,
            focus_sessions: 0,
            last_activity_date: None,
        }
    }
}

/// Caller-supplied overrides for `UserStats`.
///
/// `None` leaves a field untouched. Level, streak and last activity date are
/// intentionally absent; the reducer recomputes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatsPatch {
    pub name: Option<String>,
    pub xp: Option<u64>,
    pub total_focus_minutes: Option<u64>,
    pub completed_tasks: Option<u64>,
    pub focus_sessions: Option<u64>,
}

impl UserStatsPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Writes every present raw field into `stats`. Derived fields are left
    /// stale; `reducer::recompute_derived` runs next.
    pub fn apply_raw(&self, stats: &mut UserStats) {
        if let Some(name) = &self.name {
            stats.name = name.clone();
        }
        if let Some(xp) = self.xp {
            stats.xp = xp;
        }
        if let Some(minutes) = self.total_focus_minutes {
            stats.total_focus_minutes = minutes;
        }
        if let Some(count) = self.completed_tasks {
            stats.completed_tasks = count;
        }
        if let Some(count) = self.focus_sessions {
            stats.focus_sessions = count;
        }
    }
}
