use chrono::{NaiveDate, NaiveDateTime, Weekday};

use crate::error::CalendarError;
use crate::nth_weekday::nth_weekday_of_month_of;
use crate::range::{DateRange, date_range, date_range_days};
use crate::week::{DEFAULT_WEEK_START, WeekBounds, end_of_week, start_of_week, week_bounds};

/// Method-call access to the calendar functions.
///
/// Implemented for `NaiveDate` and `NaiveDateTime`. Any time-of-day is dropped before
/// computing, and results are always whole days.
pub trait CalendarExt {
    /// The calendar day this value falls on.
    fn calendar_day(&self) -> NaiveDate;

    fn start_of_week(&self) -> NaiveDate {
        self.start_of_week_on(DEFAULT_WEEK_START)
    }

    fn start_of_week_on(&self, week_start: Weekday) -> NaiveDate {
        start_of_week(self.calendar_day(), week_start)
    }

    fn end_of_week(&self) -> NaiveDate {
        self.end_of_week_on(DEFAULT_WEEK_START)
    }

    fn end_of_week_on(&self, week_start: Weekday) -> NaiveDate {
        end_of_week(self.calendar_day(), week_start)
    }

    fn week_bounds(&self, week_start: Weekday) -> WeekBounds {
        week_bounds(self.calendar_day(), week_start)
    }

    fn nth_weekday_of_month(
        &self,
        weekday: Weekday,
        occurrence: u32,
    ) -> Result<Option<NaiveDate>, CalendarError> {
        nth_weekday_of_month_of(self.calendar_day(), weekday, occurrence)
    }

    fn range_to(&self, to: impl CalendarExt) -> DateRange {
        date_range(self.calendar_day(), to.calendar_day())
    }

    fn range_days(&self, number_of_days: i64) -> DateRange {
        date_range_days(self.calendar_day(), number_of_days)
    }
}

impl CalendarExt for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarExt for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn date_methods() {
        let d = date(2024, 6, 12);
        assert_eq!(d.start_of_week(), date(2024, 6, 9));
        assert_eq!(d.start_of_week_on(Weekday::Mon), date(2024, 6, 10));
        assert_eq!(d.end_of_week(), date(2024, 6, 15));
        assert_eq!(d.end_of_week_on(Weekday::Mon), date(2024, 6, 16));
    }

    #[test]
    fn datetime_truncates_time_of_day() {
        let dt = datetime(2024, 6, 12, 23, 45);
        assert_eq!(dt.start_of_week(), date(2024, 6, 9));
        assert_eq!(dt.end_of_week(), date(2024, 6, 15));
        assert_eq!(
            dt.week_bounds(Weekday::Mon),
            WeekBounds {
                start: date(2024, 6, 10),
                end: date(2024, 6, 16),
            }
        );
    }

    #[test]
    fn nth_weekday_method() {
        let d = datetime(2026, 2, 20, 8, 0);
        assert_eq!(d.nth_weekday_of_month(Weekday::Mon, 1), Ok(Some(date(2026, 2, 2))));
        assert_eq!(d.nth_weekday_of_month(Weekday::Mon, 5), Ok(None));
        assert_eq!(
            d.nth_weekday_of_month(Weekday::Mon, 6),
            Err(CalendarError::InvalidOccurrence { occurrence: 6 })
        );
    }

    #[test]
    fn range_methods() {
        let from = datetime(2024, 6, 1, 12, 0);
        let to = datetime(2024, 6, 3, 6, 30);
        assert_eq!(
            from.range_to(to).collect::<Vec<_>>(),
            vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]
        );
        assert_eq!(
            date(2024, 6, 3).range_days(-2).collect::<Vec<_>>(),
            vec![date(2024, 6, 3), date(2024, 6, 2)]
        );
    }
}
