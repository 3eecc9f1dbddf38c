//! Versioned note decoding.
//!
//! # Responsibility
//! - Accept both the canonical `sections/status` shape and the legacy
//!   `content/category` shape found in persisted collections.
//! - Upgrade legacy records with one pure migration at load time.
//!
//! # Invariants
//! - Migration keeps `id`, `title`, `color`, `externalLink` and both
//!   timestamps untouched.
//! - Legacy records are read-only; nothing ever writes them back.

use super::note::{Note, NoteColor, Section, WorkStatus};
use super::EntityId;
use crate::config::SECTION_TITLE_PREFIX;
use serde::Deserialize;

/// Note as written by the first client release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyNote {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub color: NoteColor,
    #[serde(default)]
    pub external_link: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Any note shape found in storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredNote {
    Current(Note),
    Legacy(LegacyNote),
}

impl StoredNote {
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    /// Converts any stored shape into the canonical note.
    pub fn migrate(self) -> Note {
        match self {
            Self::Current(note) => note,
            Self::Legacy(legacy) => migrate_legacy(legacy),
        }
    }
}

/// Upgrades a legacy note: its content becomes `Pertemuan 1`.
pub fn migrate_legacy(legacy: LegacyNote) -> Note {
    Note {
        id: legacy.id,
        title: legacy.title,
        sections: vec![Section::new(
            format!("{SECTION_TITLE_PREFIX} 1"),
            legacy.content,
        )],
        status: WorkStatus::New,
        color: legacy.color,
        external_link: legacy.external_link,
        category: legacy.category,
        created_at: legacy.created_at,
        updated_at: legacy.updated_at,
    }
}
