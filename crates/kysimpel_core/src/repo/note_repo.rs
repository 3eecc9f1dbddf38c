//! Note collection under `kysimpel-notes`.

use super::collection::{CollectionRecord, JsonCollection};
use super::RepoResult;
use crate::config::NOTES_KEY;
use crate::model::legacy::StoredNote;
use crate::model::note::Note;
use crate::store::KvStore;
use log::info;
use serde_json::Value;

impl CollectionRecord for Note {
    type Stored = StoredNote;

    const KIND: &'static str = "note";

    fn from_stored(stored: StoredNote) -> Self {
        stored.migrate()
    }
}

/// Note persistence with legacy-shape tolerant reads.
pub struct NoteRepository<S> {
    collection: JsonCollection<S, Note>,
}

impl<S: KvStore> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            collection: JsonCollection::new(store, NOTES_KEY),
        }
    }

    /// All notes in stored order, legacy records already migrated.
    pub fn get_all(&self) -> Vec<Note> {
        self.collection.get_all()
    }

    pub fn get(&self, id: &str) -> Option<Note> {
        self.collection.get(id)
    }

    /// Stores `note` as given; timestamps are the caller's concern.
    pub fn save(&self, note: &Note) -> RepoResult<()> {
        self.collection.save(note)
    }

    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.collection.delete(id)
    }

    /// Rewrites legacy records, and sections stored without an id, in
    /// canonical shape so generated ids stop changing between reads.
    /// Returns how many records were rewritten.
    pub fn upgrade_legacy(&self) -> RepoResult<usize> {
        let upgraded = self.collection.rewrite_stale(needs_upgrade)?;
        if upgraded > 0 {
            info!(
                "event=notes_upgrade module=repo status=ok upgraded={}",
                upgraded
            );
        }
        Ok(upgraded)
    }
}

fn needs_upgrade(raw: &Value, stored: &StoredNote) -> bool {
    let missing_section_id = raw
        .get("sections")
        .and_then(Value::as_array)
        .is_some_and(|sections| sections.iter().any(|section| section.get("id").is_none()));
    stored.is_legacy() || missing_section_id
}
