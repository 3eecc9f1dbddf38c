//! Subscribable theme state.
//!
//! # Invariants
//! - The store starts at the default theme until `init()` loads the
//!   persisted one.
//! - Listeners run synchronously, in subscription order, after every change.

use crate::config::DEFAULT_THEME;
use crate::model::theme::Theme;
use crate::repo::theme_repo::ThemeRepository;
use crate::repo::RepoResult;
use crate::store::KvStore;
use log::{info, warn};

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type ThemeListener = Box<dyn Fn(Theme)>;

/// Current theme plus change notification, owned by the host.
pub struct ThemeStore<S> {
    repo: ThemeRepository<S>,
    current: Theme,
    listeners: Vec<(SubscriptionId, ThemeListener)>,
    next_subscription: u64,
}

impl<S: KvStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: ThemeRepository::new(store),
            current: DEFAULT_THEME,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Loads the persisted theme and notifies listeners.
    pub fn init(&mut self) -> Theme {
        self.current = self.repo.get_theme();
        info!(
            "event=theme_init module=service status=ok theme={}",
            self.current.as_str()
        );
        self.notify();
        self.current
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Switches theme, persists it and notifies listeners.
    ///
    /// Listeners see the new theme even when persisting fails; the write
    /// error is returned so the caller can report it.
    pub fn set_theme(&mut self, theme: Theme) -> RepoResult<()> {
        self.current = theme;
        let persisted = self.repo.set_theme(theme);
        if let Err(err) = &persisted {
            warn!(
                "event=theme_set module=service status=error theme={} error={}",
                theme.as_str(),
                err
            );
        }
        self.notify();
        persisted
    }

    pub fn subscribe(&mut self, listener: impl Fn(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(self.current);
        }
    }
}
