//! Flutter-facing bindings over `odtasks_core`.

pub mod api;
