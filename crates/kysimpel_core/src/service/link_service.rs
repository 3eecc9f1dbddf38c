//! Favorite link use-case service.

use super::{Clock, ServiceResult};
use crate::config::DERIVED_LINK_FALLBACK_TITLE;
use crate::date::now_epoch_ms;
use crate::model::link::{FavoriteLink, LinkCategory};
use crate::model::new_entity_id;
use crate::model::note::Note;
use crate::model::validation::{normalize_link_url, ValidationError};
use crate::repo::link_repo::LinkRepository;
use crate::repo::RepoResult;
use crate::store::KvStore;
use log::{debug, info};

/// Editor input for a new favorite link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub title: String,
    /// Raw user input; blank means "no link".
    pub url: String,
    pub category: LinkCategory,
}

pub struct LinkService<S> {
    repo: LinkRepository<S>,
    clock: Clock,
}

impl<S: KvStore> LinkService<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, now_epoch_ms)
    }

    pub fn with_clock(store: S, clock: Clock) -> Self {
        Self {
            repo: LinkRepository::new(store),
            clock,
        }
    }

    pub fn repository(&self) -> &LinkRepository<S> {
        &self.repo
    }

    pub fn list_links(&self) -> Vec<FavoriteLink> {
        self.repo.get_all()
    }

    /// Validates and persists a new link.
    pub fn create_link(&self, draft: LinkDraft) -> ServiceResult<FavoriteLink> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }

        let link = FavoriteLink {
            id: new_entity_id(),
            title: title.to_string(),
            url: normalize_link_url(&draft.url)?,
            category: draft.category,
            created_at: (self.clock)(),
        };
        self.repo.save(&link)?;
        info!(
            "event=link_create module=service status=ok category={} has_url={}",
            link.category.as_str(),
            link.has_url()
        );
        Ok(link)
    }

    pub fn save_link(&self, link: &FavoriteLink) -> RepoResult<()> {
        self.repo.save(link)
    }

    pub fn delete_link(&self, id: &str) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Bookmarks the note's external link unless a link with the same URL
    /// already exists.
    ///
    /// Returns the created link, or `None` when the note has no link or the
    /// URL is already bookmarked.
    pub fn derive_link_from_note(&self, note: &Note) -> RepoResult<Option<FavoriteLink>> {
        let Some(url) = note.external_url() else {
            return Ok(None);
        };

        if self.repo.find_by_url(url).is_some() {
            debug!("event=link_derive module=service status=skipped reason=duplicate_url");
            return Ok(None);
        }

        let title = note.title.trim();
        let link = FavoriteLink {
            id: new_entity_id(),
            title: if title.is_empty() {
                DERIVED_LINK_FALLBACK_TITLE.to_string()
            } else {
                title.to_string()
            },
            url: url.to_string(),
            category: LinkCategory::Other,
            created_at: (self.clock)(),
        };
        self.repo.save(&link)?;
        info!("event=link_derive module=service status=ok");
        Ok(Some(link))
    }
}

#[cfg(test)]
mod tests {
    use super::{LinkDraft, LinkService};
    use crate::model::link::LinkCategory;
    use crate::model::validation::ValidationError;
    use crate::service::ServiceError;
    use crate::store::MemoryKvStore;

    fn fixed_clock() -> i64 {
        42
    }

    #[test]
    fn blank_url_is_stored_as_dash() {
        let store = MemoryKvStore::new();
        let service = LinkService::with_clock(&store, fixed_clock);

        let link = service
            .create_link(LinkDraft {
                title: "Kelas".to_string(),
                url: String::new(),
                category: LinkCategory::Classroom,
            })
            .unwrap();

        assert_eq!(link.url, "-");
        assert_eq!(link.created_at, 42);
        assert_eq!(service.list_links().len(), 1);
    }

    #[test]
    fn invalid_url_is_rejected_before_write() {
        let store = MemoryKvStore::new();
        let service = LinkService::with_clock(&store, fixed_clock);

        let err = service
            .create_link(LinkDraft {
                title: "Repo".to_string(),
                url: "github".to_string(),
                category: LinkCategory::Github,
            })
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::InvalidUrl(_))
        ));
        assert!(store.is_empty());
    }
}
