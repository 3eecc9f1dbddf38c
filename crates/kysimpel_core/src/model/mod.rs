//! Entity model for notes, favorite links and the display theme.
//!
//! # Responsibility
//! - Define the canonical (sections/status) note shape and its JSON layout.
//! - Decode the legacy (content/category) note shape and migrate it once at
//!   load time.
//!
//! # Invariants
//! - Every entity is identified by an opaque `id` string that never changes.
//! - Deletion is permanent; there are no tombstones.
//! - Writes always emit the canonical shape.

pub mod legacy;
pub mod link;
pub mod note;
pub mod theme;
pub mod validation;

use uuid::Uuid;

/// Opaque identifier shared by every persisted entity.
///
/// Kept as a `String` because records written by older clients carry short
/// non-UUID ids that must survive untouched.
pub type EntityId = String;

/// Generates a fresh entity id.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Anything persisted inside an id-keyed collection.
pub trait Entity {
    fn id(&self) -> &str;
    /// Creation time in epoch milliseconds.
    fn created_at(&self) -> i64;
}
