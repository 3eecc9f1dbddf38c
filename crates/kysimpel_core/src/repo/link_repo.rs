//! Favorite link collection under `kysimpel-links`.

use super::collection::{CollectionRecord, JsonCollection};
use super::RepoResult;
use crate::config::LINKS_KEY;
use crate::model::link::FavoriteLink;
use crate::store::KvStore;

impl CollectionRecord for FavoriteLink {
    type Stored = FavoriteLink;

    const KIND: &'static str = "link";

    fn from_stored(stored: FavoriteLink) -> Self {
        stored
    }
}

pub struct LinkRepository<S> {
    collection: JsonCollection<S, FavoriteLink>,
}

impl<S: KvStore> LinkRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            collection: JsonCollection::new(store, LINKS_KEY),
        }
    }

    pub fn get_all(&self) -> Vec<FavoriteLink> {
        self.collection.get_all()
    }

    pub fn get(&self, id: &str) -> Option<FavoriteLink> {
        self.collection.get(id)
    }

    /// First link whose `url` matches exactly.
    pub fn find_by_url(&self, url: &str) -> Option<FavoriteLink> {
        self.get_all().into_iter().find(|link| link.url == url)
    }

    pub fn save(&self, link: &FavoriteLink) -> RepoResult<()> {
        self.collection.save(link)
    }

    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.collection.delete(id)
    }
}
