use kysimpel_core::db::open_db_in_memory;
use kysimpel_core::{
    KvStore, MemoryKvStore, Note, NoteColor, NoteRepository, Section, SqliteKvStore, WorkStatus,
};
use std::collections::HashSet;

fn math_note(body: &str) -> Note {
    Note {
        id: "a1".to_string(),
        title: "Math".to_string(),
        sections: vec![Section {
            id: "s1".to_string(),
            title: "P1".to_string(),
            body: body.to_string(),
            status: WorkStatus::New,
        }],
        status: WorkStatus::New,
        color: NoteColor::Blue,
        external_link: None,
        category: None,
        created_at: 1000,
        updated_at: 1000,
    }
}

fn note_with_id(id: &str) -> Note {
    Note {
        id: id.to_string(),
        ..math_note(id)
    }
}

#[test]
fn save_then_get_all_round_trips_on_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let repo = NoteRepository::new(SqliteKvStore::new(&conn));

    let note = math_note("x");
    repo.save(&note).unwrap();

    assert_eq!(repo.get_all(), vec![note]);
}

#[test]
fn saving_same_id_replaces_instead_of_duplicating() {
    let store = MemoryKvStore::new();
    let repo = NoteRepository::new(&store);

    repo.save(&math_note("x")).unwrap();
    repo.save(&math_note("y")).unwrap();

    let notes = repo.get_all();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].sections[0].body, "y");
}

#[test]
fn replace_keeps_position_and_new_records_append() {
    let store = MemoryKvStore::new();
    let repo = NoteRepository::new(&store);

    for id in ["n1", "n2", "n3"] {
        repo.save(&note_with_id(id)).unwrap();
    }
    let mut edited = note_with_id("n2");
    edited.title = "Edited".to_string();
    repo.save(&edited).unwrap();
    repo.save(&note_with_id("n4")).unwrap();

    let notes = repo.get_all();
    let ids = notes.iter().map(|note| note.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["n1", "n2", "n3", "n4"]);
    assert_eq!(notes[1].title, "Edited");
}

#[test]
fn ids_stay_unique_across_repeated_saves() {
    let store = MemoryKvStore::new();
    let repo = NoteRepository::new(&store);

    for round in 0..3 {
        for id in ["n1", "n2", "n3"] {
            let mut note = note_with_id(id);
            note.updated_at = round;
            repo.save(&note).unwrap();
        }
    }

    let notes = repo.get_all();
    let ids = notes.iter().map(|note| note.id.clone()).collect::<HashSet<_>>();
    assert_eq!(notes.len(), 3);
    assert_eq!(ids.len(), 3);
}

#[test]
fn delete_is_idempotent() {
    let store = MemoryKvStore::new();
    let repo = NoteRepository::new(&store);
    repo.save(&note_with_id("n1")).unwrap();
    repo.save(&note_with_id("n2")).unwrap();

    repo.delete("n1").unwrap();
    let once = repo.get_all();
    repo.delete("n1").unwrap();

    assert_eq!(repo.get_all(), once);
    assert_eq!(once.len(), 1);
    assert_eq!(once[0].id, "n2");
}

#[test]
fn deleting_unknown_id_on_empty_store_writes_nothing() {
    let store = MemoryKvStore::new();
    let repo = NoteRepository::new(&store);

    repo.delete("missing").unwrap();
    assert!(store.is_empty());
}

#[test]
fn corrupt_slot_reads_as_empty() {
    let store = MemoryKvStore::new();
    store.set("kysimpel-notes", "{not json").unwrap();
    let repo = NoteRepository::new(&store);

    assert!(repo.get_all().is_empty());

    store.set("kysimpel-notes", r#"{"id":"a1"}"#).unwrap();
    assert!(repo.get_all().is_empty());
}

#[test]
fn unreadable_elements_are_skipped() {
    let store = MemoryKvStore::new();
    let good = serde_json::to_value(math_note("x")).unwrap();
    let raw = serde_json::json!([good, {"id": "broken"}, 42]).to_string();
    store.set("kysimpel-notes", &raw).unwrap();

    let notes = NoteRepository::new(&store).get_all();
    assert_eq!(notes, vec![math_note("x")]);
}

#[test]
fn unreadable_elements_survive_unrelated_writes() {
    let store = MemoryKvStore::new();
    let raw = serde_json::json!([{"id": "keep", "title": 7}, "stray"]).to_string();
    store.set("kysimpel-notes", &raw).unwrap();
    let repo = NoteRepository::new(&store);

    repo.save(&note_with_id("n1")).unwrap();
    repo.delete("missing").unwrap();

    let stored: Vec<serde_json::Value> =
        serde_json::from_str(&store.get("kysimpel-notes").unwrap().unwrap()).unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0], serde_json::json!({"id": "keep", "title": 7}));
    assert_eq!(stored[1], serde_json::json!("stray"));
    assert_eq!(repo.get_all(), vec![note_with_id("n1")]);

    repo.delete("keep").unwrap();
    let remaining = store.get("kysimpel-notes").unwrap().unwrap();
    assert!(!remaining.contains("\"keep\""));
    assert!(remaining.contains("\"stray\""));
}

#[test]
fn saving_over_unreadable_element_replaces_it_in_place() {
    let store = MemoryKvStore::new();
    let raw = serde_json::json!([{"id": "n1", "title": null}, {"id": "other"}]).to_string();
    store.set("kysimpel-notes", &raw).unwrap();
    let repo = NoteRepository::new(&store);

    repo.save(&note_with_id("n1")).unwrap();

    let stored: Vec<serde_json::Value> =
        serde_json::from_str(&store.get("kysimpel-notes").unwrap().unwrap()).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["id"], "n1");
    assert_eq!(stored[1], serde_json::json!({"id": "other"}));
}

#[test]
fn upgrade_pins_generated_section_ids() {
    let store = MemoryKvStore::new();
    let raw = serde_json::json!([{
        "id": "n1",
        "title": "Kimia",
        "sections": [{"title": "Pertemuan 1", "body": "atom"}],
        "createdAt": 1,
        "updatedAt": 1
    }])
    .to_string();
    store.set("kysimpel-notes", &raw).unwrap();
    let repo = NoteRepository::new(&store);

    assert_ne!(repo.get_all()[0].sections[0].id, repo.get_all()[0].sections[0].id);

    assert_eq!(repo.upgrade_legacy().unwrap(), 1);
    let pinned = repo.get_all()[0].sections[0].id.clone();
    assert_eq!(repo.get_all()[0].sections[0].id, pinned);
    assert_eq!(repo.upgrade_legacy().unwrap(), 0);
}

#[test]
fn legacy_records_load_migrated_and_upgrade_rewrites_slot() {
    let store = MemoryKvStore::new();
    let raw = serde_json::json!([
        {
            "id": "old1",
            "title": "Sejarah",
            "content": "Majapahit",
            "category": "Sejarah",
            "color": "yellow",
            "createdAt": 1,
            "updatedAt": 2
        },
        serde_json::to_value(math_note("x")).unwrap()
    ])
    .to_string();
    store.set("kysimpel-notes", &raw).unwrap();
    let repo = NoteRepository::new(&store);

    let notes = repo.get_all();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].sections[0].body, "Majapahit");
    assert_eq!(notes[0].category.as_deref(), Some("Sejarah"));

    assert_eq!(repo.upgrade_legacy().unwrap(), 1);
    assert_eq!(repo.upgrade_legacy().unwrap(), 0);

    let rewritten = store.get("kysimpel-notes").unwrap().unwrap();
    assert!(!rewritten.contains("\"content\""));
    assert!(rewritten.contains("\"sections\""));
}
