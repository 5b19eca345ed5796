//! Leave-year boundaries and date-range helpers.
//!
//! The paid-leave year runs from June 1 to May 31 of the following calendar year.

use chrono::{Datelike, Duration, NaiveDate};

/// Month (1-based) on which every leave year starts.
pub const LEAVE_YEAR_START_MONTH: u32 = 6;

/// Returns June 1 of the leave year containing `date`.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::leave_year_start;
/// use chrono::NaiveDate;
///
/// let june = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
/// let january = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// assert_eq!(leave_year_start(june), NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
/// assert_eq!(leave_year_start(january), NaiveDate::from_ymd_opt(2022, 6, 1).unwrap());
/// ```
pub fn leave_year_start(date: NaiveDate) -> NaiveDate {
    let year = if date.month() >= LEAVE_YEAR_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    };
    first_of_june(year)
}

/// Returns May 31 closing the leave year containing `date`.
pub fn leave_year_end(date: NaiveDate) -> NaiveDate {
    first_of_june(leave_year_start(date).year() + 1) - Duration::days(1)
}

/// Returns the first day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Number of calendar months from the month of `from` to the month of `to`.
///
/// Days are ignored; the result is negative when `to` is in an earlier month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// Whole years elapsed from the month of `from` to the month of `to`.
///
/// Partial years are dropped and a `to` earlier than `from` counts as zero.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::whole_years_between;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
/// assert_eq!(whole_years_between(start, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap()), 10);
/// assert_eq!(whole_years_between(start, NaiveDate::from_ymd_opt(2013, 12, 1).unwrap()), 0);
/// ```
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    (months_between(from, to).max(0) / 12).unsigned_abs()
}

/// Inclusive range test.
///
/// Returns false when any argument is absent or when `start` is after `end`.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::is_within_range;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2023, 5, 15);
/// assert!(is_within_range(day, day, day));
/// assert!(!is_within_range(day, None, day));
/// ```
pub fn is_within_range(
    date: Option<NaiveDate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> bool {
    match (date, start, end) {
        (Some(date), Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    }
}

fn first_of_june(year: i32) -> NaiveDate {
    // June 1 exists in every year chrono can represent
    NaiveDate::from_ymd_opt(year, LEAVE_YEAR_START_MONTH, 1).unwrap_or(NaiveDate::MIN)
}
