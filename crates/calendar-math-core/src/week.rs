use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Week start used by the `_default` entry points.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// First and last day of a seven-day week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Days between `date` and the most recent `week_start` (0..=6).
fn days_into_week(date: NaiveDate, week_start: Weekday) -> u64 {
    let day = date.weekday().num_days_from_sunday();
    let start = week_start.num_days_from_sunday();
    u64::from((7 + day - start) % 7)
}

/// First day of the week containing `date`, for weeks beginning on `week_start`.
///
/// Clamps to `NaiveDate::MIN` when the week begins before the representable range.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let diff = days_into_week(date, week_start);
    date.checked_sub_days(Days::new(diff))
        .unwrap_or(NaiveDate::MIN)
}

/// Last day of the week containing `date`, for weeks beginning on `week_start`.
///
/// Clamps to `NaiveDate::MAX` when the week ends after the representable range.
pub fn end_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let diff = days_into_week(date, week_start);
    date.checked_add_days(Days::new(6 - diff))
        .unwrap_or(NaiveDate::MAX)
}

/// [`start_of_week`] for Sunday-based weeks.
pub fn start_of_week_default(date: NaiveDate) -> NaiveDate {
    start_of_week(date, DEFAULT_WEEK_START)
}

/// [`end_of_week`] for Sunday-based weeks.
pub fn end_of_week_default(date: NaiveDate) -> NaiveDate {
    end_of_week(date, DEFAULT_WEEK_START)
}

pub fn week_bounds(date: NaiveDate, week_start: Weekday) -> WeekBounds {
    WeekBounds {
        start: start_of_week(date, week_start),
        end: end_of_week(date, week_start),
    }
}
