use std::iter::FusedIterator;

use chrono::{Days, NaiveDate};

/// Lazy sequence of consecutive dates, stepping one day forward or backward.
///
/// Created by [`date_range`] and [`date_range_days`]. Each date is computed when it is
/// pulled; nothing is buffered. Clone the range before consuming it to replay it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    ascending: bool,
    /// Offset (in days from `start`) of the next date yielded from the front.
    front: u64,
    /// One past the offset of the next date yielded from the back.
    back: u64,
}

impl DateRange {
    fn new(start: NaiveDate, ascending: bool, len: u64) -> Self {
        Self {
            start,
            ascending,
            front: 0,
            back: len,
        }
    }

    fn date_at(&self, offset: u64) -> Option<NaiveDate> {
        let days = Days::new(offset);
        if self.ascending {
            self.start.checked_add_days(days)
        } else {
            self.start.checked_sub_days(days)
        }
    }

    /// Number of dates not yet yielded.
    pub fn remaining(&self) -> u64 {
        self.back - self.front
    }
}

/// All dates from `from` to `to`, both inclusive.
///
/// Ascending when `from <= to`, descending otherwise. Equal endpoints yield one date.
pub fn date_range(from: NaiveDate, to: NaiveDate) -> DateRange {
    let len = (to - from).num_days().unsigned_abs() + 1;
    DateRange::new(from, from <= to, len)
}

/// `|number_of_days|` dates beginning at `start`.
///
/// Steps forward for non-negative counts and backward for negative counts. A count of
/// zero yields nothing. The range stops early at the edge of the representable dates.
pub fn date_range_days(start: NaiveDate, number_of_days: i64) -> DateRange {
    let ascending = number_of_days >= 0;
    let count = number_of_days.unsigned_abs();
    if count == 0 {
        return DateRange::new(start, ascending, 0);
    }

    let last = if ascending {
        start
            .checked_add_days(Days::new(count - 1))
            .unwrap_or(NaiveDate::MAX)
    } else {
        start
            .checked_sub_days(Days::new(count - 1))
            .unwrap_or(NaiveDate::MIN)
    };
    let len = (last - start).num_days().unsigned_abs() + 1;
    DateRange::new(start, ascending, len)
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.front >= self.back {
            return None;
        }
        let date = self.date_at(self.front)?;
        self.front += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<NaiveDate> {
        let skip = u64::try_from(n).unwrap_or(u64::MAX);
        self.front = self.front.saturating_add(skip).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for DateRange {
    fn next_back(&mut self) -> Option<NaiveDate> {
        if self.front >= self.back {
            return None;
        }
        let date = self.date_at(self.back - 1)?;
        self.back -= 1;
        Some(date)
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}
