//! Persistence-and-query core for KySimpel notes, favorite links and theme.
//! UI layers call into this crate; it owns every storage invariant.

pub mod config;
pub mod date;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use date::{format_date_indonesian, format_time_ago, month_range, week_range, EpochRange};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::legacy::{LegacyNote, StoredNote};
pub use model::link::{FavoriteLink, LinkCategory};
pub use model::note::{Note, NoteColor, Section, WorkStatus};
pub use model::theme::{Theme, ThemePalette};
pub use model::validation::ValidationError;
pub use model::{Entity, EntityId};
pub use query::stats::Statistics;
pub use query::Frequency;
pub use repo::link_repo::LinkRepository;
pub use repo::note_repo::NoteRepository;
pub use repo::theme_repo::ThemeRepository;
pub use repo::{RepoError, RepoResult};
pub use service::link_service::{LinkDraft, LinkService};
pub use service::note_service::{NoteDraft, NoteService};
pub use service::theme_store::{SubscriptionId, ThemeStore};
pub use service::{ServiceError, ServiceResult};
pub use store::{KvStore, MemoryKvStore, SqliteKvStore, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
