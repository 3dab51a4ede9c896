//! Store lifecycle.
//!
//! # Responsibility
//! - Own the current `AppState` for the process lifetime.
//! - Hydrate from the durable record at open, commit after each transition.
//! - Expose the host-fed connectivity signal next to the state.
//!
//! # Invariants
//! - The store is an explicit value passed to consumers; core keeps no
//!   ambient global.

pub mod app_store;
pub mod connectivity;

pub use app_store::{AppStore, StoreError, StoreResult};
pub use connectivity::Connectivity;
