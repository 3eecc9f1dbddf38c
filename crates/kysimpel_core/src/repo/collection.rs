//! Generic JSON-array collection stored in one key-value slot.

use super::RepoResult;
use crate::model::Entity;
use crate::store::KvStore;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

/// Record type that can live in a [`JsonCollection`].
pub trait CollectionRecord: Entity + Serialize + Clone {
    /// Shape accepted when decoding one array element.
    type Stored: DeserializeOwned;

    /// Short label used in log events.
    const KIND: &'static str;

    fn from_stored(stored: Self::Stored) -> Self;
}

/// Full-collection read-modify-write over one slot.
pub struct JsonCollection<S, T> {
    store: S,
    key: &'static str,
    _record: PhantomData<fn() -> T>,
}

/// One array element as found in the slot.
///
/// `Raw` elements are written back with the same JSON content they were read
/// with. Elements no known shape
/// accepts stay `Raw`, so only `delete` by their `id` field removes them.
enum Element<R> {
    Readable { raw: Value, record: R },
    Raw(Value),
}

impl<R> Element<R> {
    fn map<U>(self, f: impl FnOnce(R) -> U) -> Element<U> {
        match self {
            Self::Readable { raw, record } => Element::Readable {
                raw,
                record: f(record),
            },
            Self::Raw(raw) => Element::Raw(raw),
        }
    }
}

impl<T: Entity> Element<T> {
    fn has_id(&self, id: &str) -> bool {
        match self {
            Self::Readable { record, .. } => record.id() == id,
            Self::Raw(raw) => raw_id(raw) == Some(id),
        }
    }
}

fn raw_id(raw: &Value) -> Option<&str> {
    raw.get("id").and_then(Value::as_str)
}

impl<S: KvStore, T: CollectionRecord> JsonCollection<S, T> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self {
            store,
            key,
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Decodes every readable element in stored order.
    pub fn decode_all(&self) -> Vec<T::Stored> {
        self.read_elements()
            .into_iter()
            .filter_map(|element| match element {
                Element::Readable { record, .. } => Some(record),
                Element::Raw(_) => None,
            })
            .collect()
    }

    /// Returns all records; never fails.
    pub fn get_all(&self) -> Vec<T> {
        self.decode_all().into_iter().map(T::from_stored).collect()
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.get_all().into_iter().find(|record| record.id() == id)
    }

    /// Replaces the element with the same id in place, or appends.
    pub fn save(&self, record: &T) -> RepoResult<()> {
        let mut elements = self.load();
        let replacement = Element::Readable {
            raw: Value::Null,
            record: record.clone(),
        };
        let action = match elements.iter().position(|element| element.has_id(record.id())) {
            Some(index) => {
                elements[index] = replacement;
                "replace"
            }
            None => {
                elements.push(replacement);
                "insert"
            }
        };

        self.write_elements(&elements)?;
        debug!(
            "event=collection_save module=repo status=ok kind={} action={} count={}",
            T::KIND,
            action,
            elements.len()
        );
        Ok(())
    }

    /// Removes every element with `id`. Unknown ids leave the slot untouched.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        let mut elements = self.load();
        let before = elements.len();
        elements.retain(|element| !element.has_id(id));

        if elements.len() == before {
            debug!(
                "event=collection_delete module=repo status=noop kind={}",
                T::KIND
            );
            return Ok(());
        }

        self.write_elements(&elements)?;
        debug!(
            "event=collection_delete module=repo status=ok kind={} count={}",
            T::KIND,
            elements.len()
        );
        Ok(())
    }

    /// Re-encodes readable elements for which `stale(raw, stored)` holds and
    /// writes every other element back with its stored content. Returns how many
    /// were rewritten; zero performs no write.
    pub fn rewrite_stale(
        &self,
        stale: impl Fn(&Value, &T::Stored) -> bool,
    ) -> RepoResult<usize> {
        let mut rewritten = 0;
        let elements = self
            .read_elements()
            .into_iter()
            .map(|element| match element {
                Element::Readable { raw, record } if !stale(&raw, &record) => Element::Raw(raw),
                Element::Readable { raw, record } => {
                    rewritten += 1;
                    Element::Readable {
                        raw,
                        record: T::from_stored(record),
                    }
                }
                Element::Raw(raw) => Element::Raw(raw),
            })
            .collect::<Vec<Element<T>>>();

        if rewritten > 0 {
            self.write_elements(&elements)?;
        }
        Ok(rewritten)
    }

    fn load(&self) -> Vec<Element<T>> {
        self.read_elements()
            .into_iter()
            .map(|element| element.map(T::from_stored))
            .collect()
    }

    /// Splits the slot into elements. A slot that is not a JSON array reads
    /// as empty; elements matching no known shape are counted in a `warn`
    /// event.
    fn read_elements(&self) -> Vec<Element<T::Stored>> {
        let raw = match self.store.get(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=collection_read module=repo status=error kind={} key={} error_code=store_unavailable error={}",
                    T::KIND,
                    self.key,
                    err
                );
                return Vec::new();
            }
        };

        let values = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(values) => values,
            Err(err) => {
                warn!(
                    "event=collection_read module=repo status=error kind={} key={} error_code=malformed_slot error={}",
                    T::KIND,
                    self.key,
                    err
                );
                return Vec::new();
            }
        };

        let elements = values
            .into_iter()
            .map(|raw| match <T::Stored as Deserialize>::deserialize(&raw) {
                Ok(record) => Element::Readable { raw, record },
                Err(_) => Element::Raw(raw),
            })
            .collect::<Vec<_>>();

        let skipped = elements
            .iter()
            .filter(|element| matches!(element, Element::Raw(_)))
            .count();
        if skipped > 0 {
            warn!(
                "event=collection_read module=repo status=partial kind={} key={} skipped={}",
                T::KIND,
                self.key,
                skipped
            );
        }
        elements
    }

    fn write_elements(&self, elements: &[Element<T>]) -> RepoResult<()> {
        let values = elements
            .iter()
            .map(|element| match element {
                Element::Readable { record, .. } => serde_json::to_value(record),
                Element::Raw(raw) => Ok(raw.clone()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let encoded = serde_json::to_string(&values)?;
        if let Err(err) = self.store.set(self.key, &encoded) {
            warn!(
                "event=collection_write module=repo status=error kind={} key={} error={}",
                T::KIND,
                self.key,
                err
            );
            return Err(err.into());
        }
        Ok(())
    }
}
