//! Flutter-facing bindings for the KySimpel core.

pub mod api;
