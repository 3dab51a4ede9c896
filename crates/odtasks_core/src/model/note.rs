//! Note domain model.

use crate::clock::Clock;
use crate::model::new_entity_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type NoteId = String;

pub const DEFAULT_NOTE_TITLE: &str = "New note";
pub const DEFAULT_NOTE_FOLDER: &str = "Main";

/// Free-text note. `updated_at` is owned by the reducer: every update
/// action refreshes it, callers never set it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub folder: String,
    pub updated_at: DateTime<Utc>,
    pub attachments: Vec<String>,
}

impl Note {
    /// Creates an empty note draft in the default folder.
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            id: new_entity_id(),
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            folder: DEFAULT_NOTE_FOLDER.to_string(),
            updated_at: clock.now(),
            attachments: Vec::new(),
        }
    }
}
