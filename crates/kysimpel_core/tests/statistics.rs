use chrono::{FixedOffset, TimeZone};
use kysimpel_core::query::stats::{category_frequencies, favorite_color};
use kysimpel_core::query::{count_in_range, top_n};
use kysimpel_core::{
    week_range, FavoriteLink, LinkCategory, MemoryKvStore, Note, NoteColor, NoteDraft,
    NoteService, Section, Statistics, WorkStatus,
};

fn jakarta() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).unwrap()
}

fn ms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> i64 {
    jakarta()
        .with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
        .timestamp_millis()
}

fn note(id: &str, category: Option<&str>, color: NoteColor, created_at: i64) -> Note {
    Note {
        id: id.to_string(),
        title: id.to_string(),
        sections: vec![Section::new("Pertemuan 1", "isi")],
        status: WorkStatus::New,
        color,
        external_link: None,
        category: category.map(str::to_string),
        created_at,
        updated_at: created_at,
    }
}

fn link(id: &str, created_at: i64) -> FavoriteLink {
    FavoriteLink {
        id: id.to_string(),
        title: id.to_string(),
        url: "-".to_string(),
        category: LinkCategory::Other,
        created_at,
    }
}

#[test]
fn week_range_runs_sunday_midnight_to_saturday_end_of_day() {
    // Wednesday 2026-10-21 15:45 in UTC+7.
    let now = jakarta().with_ymd_and_hms(2026, 10, 21, 15, 45, 0).unwrap();
    let range = week_range(&now);

    assert_eq!(range.start, ms(2026, 10, 18, 0, 0, 0));
    assert_eq!(range.end, ms(2026, 10, 24, 23, 59, 59) + 999);
    assert!(range.contains(range.start));
    assert!(range.contains(range.end));
    assert!(!range.contains(range.start - 1));
    assert!(!range.contains(range.end + 1));
}

#[test]
fn saturday_night_still_belongs_to_current_week() {
    let now = jakarta().with_ymd_and_hms(2026, 10, 24, 23, 59, 59).unwrap();
    let range = week_range(&now);
    assert_eq!(range.start, ms(2026, 10, 18, 0, 0, 0));
}

#[test]
fn counts_entities_inside_inclusive_window() {
    let now = jakarta().with_ymd_and_hms(2026, 10, 21, 12, 0, 0).unwrap();
    let week = week_range(&now);
    let notes = vec![
        note("before", None, NoteColor::Blue, week.start - 1),
        note("start", None, NoteColor::Blue, week.start),
        note("end", None, NoteColor::Blue, week.end),
        note("after", None, NoteColor::Blue, week.end + 1),
    ];

    assert_eq!(count_in_range(&notes, &week), 2);
}

#[test]
fn top_categories_are_ranked_stably_and_capped_at_five() {
    let labels = ["Umum", "Sains", "Tugas", "Seni", "Bahasa", "Sejarah", "Sains", "Tugas"];
    let notes = labels
        .iter()
        .enumerate()
        .map(|(index, label)| note(&format!("n{index}"), Some(*label), NoteColor::Blue, 0))
        .collect::<Vec<_>>();

    let top = top_n(category_frequencies(&notes), 5);
    let keys = top.iter().map(|entry| entry.key.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["Sains", "Tugas", "Umum", "Seni", "Bahasa"]);
    assert_eq!(top[0].count, 2);
}

#[test]
fn statistics_summary_matches_collections() {
    let now = jakarta().with_ymd_and_hms(2026, 10, 21, 12, 0, 0).unwrap();
    let week = week_range(&now);
    let this_week = week.start + 1_000;

    let mut linked = note("n1", Some("Matematika"), NoteColor::Green, this_week);
    linked.external_link = Some("https://a.com".to_string());
    let notes = vec![
        linked,
        note("n2", Some("Matematika"), NoteColor::Pink, week.start - 1),
        note("n3", None, NoteColor::Pink, this_week),
    ];
    let links = vec![link("l1", this_week), link("l2", week.end + 1)];

    let stats = Statistics::compute(&notes, &links, &week);
    assert_eq!(stats.weekly_new_notes, 2);
    assert_eq!(stats.weekly_new_links, 1);
    assert_eq!(stats.total_notes, 3);
    assert_eq!(stats.total_links, 2);
    assert_eq!(stats.notes_with_links, 1);
    assert_eq!(stats.favorite_color, Some(NoteColor::Pink));
    assert_eq!(stats.top_categories.len(), 1);
    assert_eq!(stats.top_categories[0].key, "Matematika");
    assert_eq!(stats.top_categories[0].count, 2);
}

#[test]
fn favorite_color_ties_go_to_first_seen_and_empty_is_none() {
    let notes = vec![
        note("n1", None, NoteColor::Yellow, 0),
        note("n2", None, NoteColor::Purple, 0),
    ];
    assert_eq!(favorite_color(&notes), Some(NoteColor::Yellow));
    assert_eq!(favorite_color(&[]), None);
}

#[test]
fn notes_created_from_editor_count_toward_top_categories() {
    let store = MemoryKvStore::new();
    let service = NoteService::new(&store);

    service.create_note(NoteDraft::new("Fisika")).unwrap();
    let mut draft = NoteDraft::new("Puisi");
    draft.category = Some("Bahasa".to_string());
    service.create_note(draft).unwrap();
    service.create_note(NoteDraft::new("Catatan")).unwrap();

    let week = week_range(&jakarta().with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap());
    let stats = Statistics::compute(&service.list_notes(), &[], &week);

    let labels = stats
        .top_categories
        .iter()
        .map(|entry| (entry.key.as_str(), entry.count))
        .collect::<Vec<_>>();
    assert_eq!(labels, vec![("Umum", 2), ("Bahasa", 1)]);
}
