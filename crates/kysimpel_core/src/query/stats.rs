//! Statistics screen summary.

use super::{count_by, count_in_range, rank_by_count, top_n, Frequency};
use crate::config::TOP_CATEGORY_COUNT;
use crate::date::EpochRange;
use crate::model::link::FavoriteLink;
use crate::model::note::{Note, NoteColor, WorkStatus};
use serde::Serialize;

/// Category label → note count, first-encounter order.
///
/// Notes without a category are not counted.
pub fn category_frequencies(notes: &[Note]) -> Vec<Frequency<String>> {
    count_by(notes, |note| {
        note.category
            .as_deref()
            .map(str::trim)
            .filter(|category| !category.is_empty())
            .map(str::to_string)
    })
}

pub fn color_frequencies(notes: &[Note]) -> Vec<Frequency<NoteColor>> {
    count_by(notes, |note| Some(note.color))
}

pub fn status_frequencies(notes: &[Note]) -> Vec<Frequency<WorkStatus>> {
    count_by(notes, |note| Some(note.status))
}

/// Most used note color; ties go to the color seen first.
pub fn favorite_color(notes: &[Note]) -> Option<NoteColor> {
    rank_by_count(color_frequencies(notes))
        .first()
        .map(|entry| entry.key)
}

/// Aggregates shown on the statistics screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub weekly_new_notes: usize,
    pub weekly_new_links: usize,
    pub total_notes: usize,
    pub total_links: usize,
    pub top_categories: Vec<Frequency<String>>,
    pub notes_with_links: usize,
    pub favorite_color: Option<NoteColor>,
}

impl Statistics {
    pub fn compute(notes: &[Note], links: &[FavoriteLink], week: &EpochRange) -> Self {
        Self {
            weekly_new_notes: count_in_range(notes, week),
            weekly_new_links: count_in_range(links, week),
            total_notes: notes.len(),
            total_links: links.len(),
            top_categories: top_n(category_frequencies(notes), TOP_CATEGORY_COUNT),
            notes_with_links: notes
                .iter()
                .filter(|note| note.external_url().is_some())
                .count(),
            favorite_color: favorite_color(notes),
        }
    }
}
