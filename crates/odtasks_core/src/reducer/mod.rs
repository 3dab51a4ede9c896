//! Action-driven state transitions.
//!
//! # Responsibility
//! - Define the closed set of actions collaborators may dispatch.
//! - Compute the next `AppState` from the current one, composing the level
//!   and streak engines.
//!
//! # Invariants
//! - Reduction is pure; persisting the result is the store's commit step.
//! - Level and streak are never taken from caller payloads.

pub mod action;
pub mod reduce;

pub use action::Action;
pub use reduce::{
    recompute_derived, reduce, update_user, FOCUS_SESSION_XP, TASK_COMPLETION_XP,
};
