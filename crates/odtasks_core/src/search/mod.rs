//! In-memory list queries over the current state.
//!
//! # Responsibility
//! - Filter task and note lists by a free-text term.
//! - Shape note list rows with plain-text previews.

pub mod filter;
pub mod preview;
