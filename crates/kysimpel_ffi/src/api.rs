//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the persistence façade to the UI runtime as synchronous calls.
//! - Carry entities across the boundary as JSON strings in the stored shape.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Reads degrade to empty/default values; writes report failures in
//!   `ActionResponse`.

use kysimpel_core::date::week_range_local;
use kysimpel_core::db::open_db;
use kysimpel_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CoreConfig, LinkCategory, LinkDraft, LinkService, Note, NoteService, SqliteKvStore,
    Statistics, Theme, ThemeRepository,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for write calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the write reached storage.
    pub ok: bool,
    /// Id of the created or saved record, when there is one.
    pub id: Option<String>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

/// All notes as a JSON array in canonical shape.
///
/// # FFI contract
/// - Returns `[]` when the database cannot be opened.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> String {
    read_json("notes_list", |store| NoteService::new(store).list_notes())
}

/// Saves one note given as JSON, inserting or replacing by `id`.
///
/// When `derive_link` is set, the note's external link is also bookmarked
/// (deduplicated by URL); a failure there does not fail the call.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(note_json: String, derive_link: bool) -> ActionResponse {
    let note = match serde_json::from_str::<Note>(&note_json) {
        Ok(note) => note,
        Err(err) => return ActionResponse::failure(format!("note_save rejected input: {err}")),
    };

    let result = with_store(|store| {
        let notes = NoteService::new(store);
        if derive_link {
            notes.save_note_and_derive_link(&note, &LinkService::new(store))
        } else {
            notes.save_note(&note)
        }
    });
    match result {
        Ok(Ok(())) => ActionResponse::success("Note saved.", Some(note.id)),
        Ok(Err(err)) => ActionResponse::failure(format!("note_save failed: {err}")),
        Err(err) => ActionResponse::failure(format!("note_save failed: {err}")),
    }
}

/// Deletes a note by id; unknown ids succeed.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(id: String) -> ActionResponse {
    match with_store(|store| NoteService::new(store).delete_note(&id)) {
        Ok(Ok(())) => ActionResponse::success("Note deleted.", Some(id)),
        Ok(Err(err)) => ActionResponse::failure(format!("note_delete failed: {err}")),
        Err(err) => ActionResponse::failure(format!("note_delete failed: {err}")),
    }
}

/// All favorite links as a JSON array.
#[flutter_rust_bridge::frb(sync)]
pub fn links_list() -> String {
    read_json("links_list", |store| LinkService::new(store).list_links())
}

/// Creates a favorite link from form input.
///
/// Input semantics:
/// - `url`: blank or `-` stores the "no link" sentinel.
/// - `category`: `classroom|github|youtube|drive|other`; unknown → `other`.
#[flutter_rust_bridge::frb(sync)]
pub fn link_create(title: String, url: String, category: String) -> ActionResponse {
    let draft = LinkDraft {
        title,
        url,
        category: LinkCategory::parse(&category).unwrap_or_default(),
    };
    match with_store(|store| LinkService::new(store).create_link(draft)) {
        Ok(Ok(link)) => ActionResponse::success("Link saved.", Some(link.id)),
        Ok(Err(err)) => ActionResponse::failure(format!("link_create failed: {err}")),
        Err(err) => ActionResponse::failure(format!("link_create failed: {err}")),
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn link_delete(id: String) -> ActionResponse {
    match with_store(|store| LinkService::new(store).delete_link(&id)) {
        Ok(Ok(())) => ActionResponse::success("Link deleted.", Some(id)),
        Ok(Err(err)) => ActionResponse::failure(format!("link_delete failed: {err}")),
        Err(err) => ActionResponse::failure(format!("link_delete failed: {err}")),
    }
}

/// Persisted theme token; `blue` when nothing usable is stored.
#[flutter_rust_bridge::frb(sync)]
pub fn theme_get() -> String {
    with_store(|store| ThemeRepository::new(store).get_theme())
        .unwrap_or_default()
        .as_str()
        .to_string()
}

#[flutter_rust_bridge::frb(sync)]
pub fn theme_set(theme: String) -> ActionResponse {
    let Some(theme) = Theme::parse(&theme) else {
        return ActionResponse::failure(format!("theme_set rejected unknown theme `{theme}`"));
    };
    match with_store(|store| ThemeRepository::new(store).set_theme(theme)) {
        Ok(Ok(())) => ActionResponse::success("Theme saved.", None),
        Ok(Err(err)) => ActionResponse::failure(format!("theme_set failed: {err}")),
        Err(err) => ActionResponse::failure(format!("theme_set failed: {err}")),
    }
}

/// Statistics for the current local week as a JSON object.
#[flutter_rust_bridge::frb(sync)]
pub fn statistics_week() -> String {
    let week = week_range_local();
    let stats = with_store(|store| {
        let notes = NoteService::new(store).list_notes();
        let links = LinkService::new(store).list_links();
        Statistics::compute(&notes, &links, &week)
    })
    .unwrap_or_else(|err| {
        warn!("event=ffi_call module=ffi status=error call=statistics_week error={err}");
        Statistics::compute(&[], &[], &week)
    });
    serde_json::to_string(&stats).unwrap_or_else(|_| "{}".to_string())
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| CoreConfig::from_env().db_path)
        .clone()
}

fn with_store<T>(f: impl FnOnce(&SqliteKvStore<'_>) -> T) -> Result<T, String> {
    let conn = open_db(resolve_db_path()).map_err(|err| format!("db open failed: {err}"))?;
    let store = SqliteKvStore::new(&conn);
    Ok(f(&store))
}

fn read_json<T: serde::Serialize>(
    call: &'static str,
    read: impl FnOnce(&SqliteKvStore<'_>) -> Vec<T>,
) -> String {
    let records = with_store(read).unwrap_or_else(|err| {
        warn!("event=ffi_call module=ffi status=error call={call} error={err}");
        Vec::new()
    });
    serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
}
