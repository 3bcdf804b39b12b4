use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::debug;

use crate::error::CalendarError;

/// Find the `occurrence`-th `weekday` of the given month (1 = first, ..., 5 = fifth).
///
/// Returns `Ok(None)` when the month has fewer than `occurrence` such weekdays.
/// Returns `CalendarError::InvalidOccurrence` if `occurrence` is not in 1..=5; this is
/// checked before the month is looked at.
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    occurrence: u32,
) -> Result<Option<NaiveDate>, CalendarError> {
    if !(1..=5).contains(&occurrence) {
        debug!(occurrence, "rejecting occurrence outside 1..=5");
        return Err(CalendarError::InvalidOccurrence { occurrence });
    }

    let first_day =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidDate { year, month })?;
    let offset =
        (7 + weekday.num_days_from_sunday() - first_day.weekday().num_days_from_sunday()) % 7;
    let days = u64::from(offset + 7 * (occurrence - 1));

    match first_day.checked_add_days(Days::new(days)) {
        Some(candidate) if candidate.month() == month => Ok(Some(candidate)),
        _ => {
            debug!("{year}-{month:02} has no occurrence {occurrence} of {weekday}");
            Ok(None)
        }
    }
}

/// [`nth_weekday_of_month`] for the year and month of `date`.
pub fn nth_weekday_of_month_of(
    date: NaiveDate,
    weekday: Weekday,
    occurrence: u32,
) -> Result<Option<NaiveDate>, CalendarError> {
    nth_weekday_of_month(date.year(), date.month(), weekday, occurrence)
}
