//! Calendar ranges and Indonesian date labels.
//!
//! # Responsibility
//! - Compute inclusive epoch-millisecond windows for the current week and
//!   month in a caller-provided time zone.
//! - Render absolute dates and coarse "time ago" labels for the UI.
//!
//! # Invariants
//! - Weeks start on Sunday at local midnight.
//! - Range ends are the last millisecond before the next local midnight.

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveTime, TimeZone, Utc};

const WEEKDAY_NAMES: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const MS_PER_SECOND: i64 = 1_000;

/// Inclusive `[start, end]` window in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochRange {
    pub start: i64,
    pub end: i64,
}

impl EpochRange {
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start && timestamp_ms <= self.end
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Sunday 00:00:00.000 through Saturday 23:59:59.999 of the week containing
/// `now`, in `now`'s time zone.
pub fn week_range<Tz: TimeZone>(now: &DateTime<Tz>) -> EpochRange {
    let tz = now.timezone();
    let today = now.date_naive();
    let offset = i64::from(today.weekday().num_days_from_sunday());
    let sunday = today - Duration::days(offset);
    let saturday = sunday + Duration::days(6);

    EpochRange {
        start: start_of_day_ms(&tz, sunday),
        end: end_of_day_ms(&tz, saturday),
    }
}

/// First day 00:00:00.000 through last day 23:59:59.999 of `now`'s month.
pub fn month_range<Tz: TimeZone>(now: &DateTime<Tz>) -> EpochRange {
    let tz = now.timezone();
    let today = now.date_naive();
    let first = today.with_day(1).unwrap_or(today);

    let end = first
        .checked_add_months(Months::new(1))
        .map_or(i64::MAX, |next_first| start_of_day_ms(&tz, next_first) - 1);

    EpochRange {
        start: start_of_day_ms(&tz, first),
        end,
    }
}

pub fn week_range_local() -> EpochRange {
    week_range(&Local::now())
}

pub fn month_range_local() -> EpochRange {
    month_range(&Local::now())
}

/// Long Indonesian date, e.g. `Senin, 19 Oktober 2026`.
///
/// Returns `None` when the timestamp is outside the representable range.
pub fn format_date_indonesian<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<String> {
    let date = tz.timestamp_millis_opt(timestamp_ms).earliest()?.date_naive();
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    let month = MONTH_NAMES[date.month0() as usize];
    Some(format!("{weekday}, {} {month} {}", date.day(), date.year()))
}

pub fn format_date_indonesian_local(timestamp_ms: i64) -> Option<String> {
    format_date_indonesian(timestamp_ms, &Local)
}

/// Coarsest elapsed unit: `3 hari lalu`, `2 jam lalu`, `5 menit lalu`, or
/// `Baru saja` below one minute (and for future timestamps).
pub fn format_time_ago(timestamp_ms: i64, now_ms: i64) -> String {
    let seconds = now_ms.saturating_sub(timestamp_ms) / MS_PER_SECOND;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{days} hari lalu")
    } else if hours > 0 {
        format!("{hours} jam lalu")
    } else if minutes > 0 {
        format!("{minutes} menit lalu")
    } else {
        "Baru saja".to_string()
    }
}

fn start_of_day_ms<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> i64 {
    let midnight = day.and_time(NaiveTime::MIN);
    // A DST jump can skip midnight; the day then starts at the first valid
    // local hour.
    (0..=2)
        .find_map(|hours| {
            tz.from_local_datetime(&(midnight + Duration::hours(hours)))
                .earliest()
        })
        .map_or_else(
            || midnight.and_utc().timestamp_millis(),
            |start| start.timestamp_millis(),
        )
}

fn end_of_day_ms<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> i64 {
    day.succ_opt()
        .map_or(i64::MAX, |next| start_of_day_ms(tz, next) - 1)
}
