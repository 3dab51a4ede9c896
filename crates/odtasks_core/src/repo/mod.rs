//! Persistence gateway for the application state.
//!
//! # Responsibility
//! - Define the save/load contract the store commits through.
//! - Keep SQL and record encoding details out of the reducer and store.
//!
//! # Invariants
//! - Loading never fails; unusable records read as absent.

pub mod state_repo;
