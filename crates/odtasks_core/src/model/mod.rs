//! Domain model for tasks, notes and progress statistics.
//!
//! # Responsibility
//! - Define the vocabulary shared by engines, reducer, persistence and hosts.
//! - Keep the persisted JSON shape in one place (camelCase fields,
//!   kebab-case enum values).
//!
//! # Invariants
//! - Enum values are closed sets; unknown values fail deserialization.
//! - `UserStats::level`, `streak` and `last_activity_date` are derived and
//!   are only written by the reducer.
//! - `AppState` is replaced wholesale by each accepted action.

pub mod note;
pub mod state;
pub mod task;
pub mod user;

use uuid::Uuid;

/// Generates a fresh opaque entity identifier.
pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}
