//! Note use-case service.
//!
//! # Invariants
//! - `update_note` keeps the stored `createdAt` regardless of caller input.
//! - A blank external link or category is stored as absent.

use super::link_service::LinkService;
use super::{Clock, ServiceError, ServiceResult};
use crate::config::DEFAULT_NOTE_CATEGORY;
use crate::date::now_epoch_ms;
use crate::model::new_entity_id;
use crate::model::note::{Note, NoteColor, Section, WorkStatus};
use crate::repo::note_repo::NoteRepository;
use crate::repo::RepoResult;
use crate::store::KvStore;
use log::{info, warn};

/// Editor input for a new note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub sections: Vec<Section>,
    pub status: WorkStatus,
    pub color: NoteColor,
    pub external_link: Option<String>,
    /// Picker value; `Umum` unless the user chose another.
    pub category: Option<String>,
}

impl NoteDraft {
    /// Draft with one empty `Pertemuan 1` section, the editor's start state.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: vec![Section::numbered(1)],
            status: WorkStatus::New,
            color: NoteColor::Blue,
            external_link: None,
            category: Some(DEFAULT_NOTE_CATEGORY.to_string()),
        }
    }
}

pub struct NoteService<S> {
    repo: NoteRepository<S>,
    clock: Clock,
}

impl<S: KvStore> NoteService<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, now_epoch_ms)
    }

    pub fn with_clock(store: S, clock: Clock) -> Self {
        Self {
            repo: NoteRepository::new(store),
            clock,
        }
    }

    pub fn repository(&self) -> &NoteRepository<S> {
        &self.repo
    }

    pub fn list_notes(&self) -> Vec<Note> {
        self.repo.get_all()
    }

    pub fn get_note(&self, id: &str) -> Option<Note> {
        self.repo.get(id)
    }

    /// Creates and persists a note with a fresh id and timestamps.
    pub fn create_note(&self, draft: NoteDraft) -> ServiceResult<Note> {
        let now = (self.clock)();
        let note = Note {
            id: new_entity_id(),
            title: draft.title.trim().to_string(),
            sections: draft.sections,
            status: draft.status,
            color: draft.color,
            external_link: normalize_optional(draft.external_link),
            category: normalize_optional(draft.category),
            created_at: now,
            updated_at: now,
        };

        self.repo.save(&note)?;
        info!(
            "event=note_create module=service status=ok sections={} has_link={}",
            note.sections.len(),
            note.external_link.is_some()
        );
        Ok(note)
    }

    /// Replaces an existing note, keeping its creation time and refreshing
    /// `updatedAt`. A note sent without a category keeps the stored one.
    pub fn update_note(&self, mut note: Note) -> ServiceResult<Note> {
        let existing = self
            .repo
            .get(&note.id)
            .ok_or_else(|| ServiceError::NotFound(note.id.clone()))?;

        note.title = note.title.trim().to_string();
        note.external_link = normalize_optional(note.external_link.take());
        note.category = normalize_optional(note.category.take()).or(existing.category);
        note.created_at = existing.created_at;
        note.updated_at = (self.clock)();

        self.repo.save(&note)?;
        info!(
            "event=note_update module=service status=ok sections={}",
            note.sections.len()
        );
        Ok(note)
    }

    /// Persists `note` verbatim, inserting or replacing by id.
    pub fn save_note(&self, note: &Note) -> RepoResult<()> {
        self.repo.save(note)
    }

    /// Saves `note`, then derives a favorite link from its external link.
    ///
    /// The note write decides the result; a failed derivation is logged and
    /// dropped.
    pub fn save_note_and_derive_link<L: KvStore>(
        &self,
        note: &Note,
        links: &LinkService<L>,
    ) -> RepoResult<()> {
        self.repo.save(note)?;
        if let Err(err) = links.derive_link_from_note(note) {
            warn!(
                "event=link_derive module=service status=error error_code=derive_failed error={}",
                err
            );
        }
        Ok(())
    }

    /// Deletes permanently. Links derived from the note are kept.
    pub fn delete_note(&self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
