//! Note and section records.

use super::validation::ValidationError;
use super::{new_entity_id, Entity, EntityId};
use crate::config::SECTION_TITLE_PREFIX;
use serde::{Deserialize, Serialize};

/// Workflow state shared by notes and their sections.
///
/// Serialized with the Indonesian labels the UI displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkStatus {
    /// Just created.
    #[default]
    #[serde(rename = "Baru")]
    New,
    /// Being worked on.
    #[serde(rename = "Proses")]
    InProgress,
    /// Finished.
    #[serde(rename = "Selesai")]
    Done,
}

impl WorkStatus {
    pub const ALL: [Self; 3] = [Self::New, Self::InProgress, Self::Done];

    pub fn label(self) -> &'static str {
        match self {
            Self::New => "Baru",
            Self::InProgress => "Proses",
            Self::Done => "Selesai",
        }
    }
}

/// Presentation tag of a note card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Blue,
    Pink,
    Green,
    Yellow,
    Purple,
}

impl NoteColor {
    pub const ALL: [Self; 5] = [
        Self::Blue,
        Self::Pink,
        Self::Green,
        Self::Yellow,
        Self::Purple,
    ];

    /// Stored token, e.g. `blue`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Purple => "purple",
        }
    }

    /// Human label shown on the statistics screen.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Blue => "Biru",
            Self::Pink => "Pink",
            Self::Green => "Hijau",
            Self::Yellow => "Kuning",
            Self::Purple => "Ungu",
        }
    }
}

/// One logical entry (meeting, session) inside a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique within the owning note. Generated on decode when missing;
    /// `NoteRepository::upgrade_legacy` persists generated ids.
    #[serde(default = "new_entity_id")]
    pub id: EntityId,
    #[serde(default = "default_section_title")]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub status: WorkStatus,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            title: title.into(),
            body: body.into(),
            status: WorkStatus::New,
        }
    }

    /// Empty section titled `Pertemuan {number}`, the editor default.
    pub fn numbered(number: usize) -> Self {
        Self::new(format!("{SECTION_TITLE_PREFIX} {number}"), "")
    }

    pub fn has_body(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

fn default_section_title() -> String {
    SECTION_TITLE_PREFIX.to_string()
}

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: EntityId,
    pub title: String,
    pub sections: Vec<Section>,
    /// Overall state, independent of per-section status.
    #[serde(default)]
    pub status: WorkStatus,
    #[serde(default)]
    pub color: NoteColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    /// Free-text category carried over from legacy records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Epoch milliseconds; set once.
    pub created_at: i64,
    /// Epoch milliseconds; refreshed on every save.
    pub updated_at: i64,
}

impl Note {
    /// Returns the trimmed external link when one is set.
    pub fn external_url(&self) -> Option<&str> {
        self.external_link
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Checks the editor rules: non-empty title, at least one section with a
    /// non-empty body, and a well-formed external link when present.
    ///
    /// Persistence never calls this; callers run it before saving.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !self.sections.iter().any(Section::has_body) {
            return Err(ValidationError::EmptyContent);
        }
        if let Some(url) = self.external_url() {
            if !super::validation::is_valid_url(url) {
                return Err(ValidationError::InvalidUrl(url.to_string()));
            }
        }
        Ok(())
    }
}

impl Entity for Note {
    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> i64 {
        self.created_at
    }
}
