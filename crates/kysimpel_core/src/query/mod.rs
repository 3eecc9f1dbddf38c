//! Pure query helpers over already-loaded collections.
//!
//! # Invariants
//! - Helpers never touch storage.
//! - Rankings are stable: equal counts keep first-encounter order.

pub mod stats;

use crate::date::EpochRange;
use crate::model::Entity;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence count of one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frequency<K> {
    pub key: K,
    pub count: usize,
}

/// Counts keys in first-encounter order. Items mapping to `None` are
/// ignored.
pub fn count_by<T, K>(items: &[T], key: impl Fn(&T) -> Option<K>) -> Vec<Frequency<K>>
where
    K: Eq + Hash + Clone,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut frequencies: Vec<Frequency<K>> = Vec::new();

    for item in items {
        let Some(value) = key(item) else {
            continue;
        };
        match positions.get(&value) {
            Some(&index) => frequencies[index].count += 1,
            None => {
                positions.insert(value.clone(), frequencies.len());
                frequencies.push(Frequency {
                    key: value,
                    count: 1,
                });
            }
        }
    }
    frequencies
}

/// Sorts by count descending; ties keep their input order.
pub fn rank_by_count<K>(mut frequencies: Vec<Frequency<K>>) -> Vec<Frequency<K>> {
    frequencies.sort_by(|left, right| right.count.cmp(&left.count));
    frequencies
}

/// The `n` most frequent keys, ranked.
pub fn top_n<K>(frequencies: Vec<Frequency<K>>, n: usize) -> Vec<Frequency<K>> {
    let mut ranked = rank_by_count(frequencies);
    ranked.truncate(n);
    ranked
}

/// Number of entities created inside `range` (inclusive).
pub fn count_in_range<T: Entity>(items: &[T], range: &EpochRange) -> usize {
    items
        .iter()
        .filter(|item| range.contains(item.created_at()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_by, rank_by_count, top_n, Frequency};

    #[test]
    fn counts_in_encounter_order() {
        let words = ["b", "a", "b", "c", "a", "b"];
        let counts = count_by(&words, |word| Some(*word));
        assert_eq!(
            counts,
            vec![
                Frequency { key: "b", count: 3 },
                Frequency { key: "a", count: 2 },
                Frequency { key: "c", count: 1 },
            ]
        );
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let words = ["x", "y", "z", "y", "x"];
        let ranked = rank_by_count(count_by(&words, |word| Some(*word)));
        let keys = ranked.iter().map(|entry| entry.key).collect::<Vec<_>>();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }

    #[test]
    fn top_n_truncates_after_ranking() {
        let words = ["a", "b", "b", "c", "c", "c"];
        let top = top_n(count_by(&words, |word| Some(*word)), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].key, "c");
        assert_eq!(top[1].key, "b");
    }

    #[test]
    fn none_keys_are_skipped() {
        let values = [Some(1), None, Some(1)];
        let counts = count_by(&values, |value| *value);
        assert_eq!(counts, vec![Frequency { key: 1, count: 2 }]);
    }
}
