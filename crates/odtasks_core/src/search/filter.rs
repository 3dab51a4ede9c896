//! Term filters for the task and note lists.
//!
//! # Invariants
//! - Matching is case-insensitive on Unicode lowercase.
//! - A blank term matches everything; input order is preserved.

use crate::model::note::Note;
use crate::model::task::Task;

/// Tasks whose title, category or priority contains `term`.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let needle = term.trim().to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            needle.is_empty()
                || task.title.to_lowercase().contains(&needle)
                || task.category.label().contains(&needle)
                || task.priority.label().contains(&needle)
        })
        .collect()
}

/// Notes whose title or content contains `term`.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    let needle = term.trim().to_lowercase();
    notes
        .iter()
        .filter(|note| {
            needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .collect()
}
