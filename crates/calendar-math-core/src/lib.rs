//! Calendar arithmetic on whole days: week boundaries, the nth weekday of a month and
//! lazy inclusive date ranges.
//!
//! ```
//! use calendar_math_core::{CalendarExt, nth_weekday_of_month};
//! use chrono::{NaiveDate, Weekday};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
//! assert_eq!(day.start_of_week(), NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
//!
//! let third_sunday = nth_weekday_of_month(2026, 3, Weekday::Sun, 3).unwrap();
//! assert_eq!(third_sunday, NaiveDate::from_ymd_opt(2026, 3, 15));
//!
//! assert_eq!(day.range_days(-3).count(), 3);
//! ```

pub mod error;
pub mod ext;
pub mod nth_weekday;
pub mod range;
pub mod week;

pub use error::CalendarError;
pub use ext::CalendarExt;
pub use nth_weekday::{nth_weekday_of_month, nth_weekday_of_month_of};
pub use range::{DateRange, date_range, date_range_days};
pub use week::{
    DEFAULT_WEEK_START, WeekBounds, end_of_week, end_of_week_default, start_of_week,
    start_of_week_default, week_bounds,
};
