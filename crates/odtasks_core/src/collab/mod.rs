//! Contracts and helpers for collaborators outside the state engine.
//!
//! # Responsibility
//! - Describe the AI suggestion service contract without implementing it.
//! - Provide the debounce gate editors use before dispatching updates.

pub mod debounce;
pub mod suggestion;
