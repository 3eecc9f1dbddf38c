//! Storage keys, defaults and environment-driven runtime settings.
//!
//! # Invariants
//! - Storage keys are fixed; renaming one orphans every existing record.
//! - `CoreConfig::from_env` never fails; unusable values fall back to defaults.

use crate::model::theme::Theme;
use std::path::PathBuf;

/// Slot holding the JSON array of notes.
pub const NOTES_KEY: &str = "kysimpel-notes";
/// Slot holding the JSON array of favorite links.
pub const LINKS_KEY: &str = "kysimpel-links";
/// Slot holding the raw theme token.
pub const THEME_KEY: &str = "kysimpel-theme";

/// Theme used when nothing valid is stored.
pub const DEFAULT_THEME: Theme = Theme::Blue;

/// Title prefix of editor-created sections (`Pertemuan 1`, `Pertemuan 2`, ...).
pub const SECTION_TITLE_PREFIX: &str = "Pertemuan";

/// Category preselected in the note editor.
pub const DEFAULT_NOTE_CATEGORY: &str = "Umum";

/// Title given to links derived from an untitled note.
pub const DERIVED_LINK_FALLBACK_TITLE: &str = "Link";

/// Number of categories listed on the statistics screen.
pub const TOP_CATEGORY_COUNT: usize = 5;

pub const DB_PATH_ENV: &str = "KYSIMPEL_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "KYSIMPEL_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "KYSIMPEL_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "kysimpel.sqlite3";

/// Runtime settings for hosts embedding the core (CLI, FFI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the key-value slots.
    pub db_path: PathBuf,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: crate::logging::default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Resolves settings from `KYSIMPEL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            log_level: non_blank(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: non_blank(LOG_DIR_ENV).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::path::PathBuf;

    #[test]
    fn lookup_overrides_defaults() {
        let config = CoreConfig::from_lookup(|name| match name {
            DB_PATH_ENV => Some("/data/kysimpel.db".to_string()),
            LOG_LEVEL_ENV => Some(" warn ".to_string()),
            LOG_DIR_ENV => Some("/var/log/kysimpel".to_string()),
            _ => None,
        });

        assert_eq!(config.db_path, PathBuf::from("/data/kysimpel.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/kysimpel")));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = CoreConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, CoreConfig::default());
    }
}
