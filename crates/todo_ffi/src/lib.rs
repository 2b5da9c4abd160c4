//! Flutter-facing bindings for the todo core.

pub mod api;
