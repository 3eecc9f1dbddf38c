//! Theme scalar under `kysimpel-theme`.

use super::RepoResult;
use crate::config::{DEFAULT_THEME, THEME_KEY};
use crate::model::theme::Theme;
use crate::store::KvStore;
use log::warn;

pub struct ThemeRepository<S> {
    store: S,
}

impl<S: KvStore> ThemeRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored theme, or blue when the slot is empty, unknown or unreadable.
    ///
    /// Accepts both the raw token (`dark`) and a JSON string (`"dark"`).
    pub fn get_theme(&self) -> Theme {
        let raw = match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return DEFAULT_THEME,
            Err(err) => {
                warn!(
                    "event=theme_read module=repo status=error error_code=store_unavailable error={}",
                    err
                );
                return DEFAULT_THEME;
            }
        };

        Theme::parse(&raw)
            .or_else(|| serde_json::from_str::<Theme>(&raw).ok())
            .unwrap_or_else(|| {
                warn!("event=theme_read module=repo status=error error_code=unknown_theme");
                DEFAULT_THEME
            })
    }

    /// Writes the raw token verbatim.
    pub fn set_theme(&self, theme: Theme) -> RepoResult<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        Ok(())
    }
}
