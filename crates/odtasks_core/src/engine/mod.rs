//! Pure derivation engines used by the reducer.
//!
//! # Responsibility
//! - Map xp to a level (`level`).
//! - Advance the consecutive-day streak on qualifying completions (`streak`).
//!
//! # Invariants
//! - Both engines are pure functions of their arguments; no hidden state,
//!   no clock access.

pub mod level;
pub mod streak;
