//! Day classification for leave accounting.
//!
//! This module decides whether a calendar day can ever be charged as leave.
//! Sundays and public holidays never can; every other day (Saturday included)
//! is a workable day.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;

use super::is_public_holiday;

/// Represents the kind of a calendar day for leave accounting.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::DayKind;
///
/// let kind = DayKind::PublicHoliday;
/// assert_eq!(format!("{}", kind), "Public holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Saturday, outside public holidays.
    Workable,
    /// Sunday, never charged.
    Sunday,
    /// A public holiday falling on Monday through Saturday, never charged.
    PublicHoliday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Workable => write!(f, "Workable"),
            DayKind::Sunday => write!(f, "Sunday"),
            DayKind::PublicHoliday => write!(f, "Public holiday"),
        }
    }
}

/// Determines the [`DayKind`] of `date`.
///
/// Sunday takes precedence over a public holiday falling on a Sunday.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::UnsupportedYear`] when the holidays
/// of `date`'s year are unknown.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::{classify_day, DayKind};
/// use chrono::NaiveDate;
///
/// // 2022-07-14 is a Thursday and Bastille Day
/// let bastille_day = NaiveDate::from_ymd_opt(2022, 7, 14).unwrap();
/// assert_eq!(classify_day(bastille_day).unwrap(), DayKind::PublicHoliday);
///
/// // 2022-07-16 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2022, 7, 16).unwrap();
/// assert_eq!(classify_day(saturday).unwrap(), DayKind::Workable);
/// ```
pub fn classify_day(date: NaiveDate) -> EngineResult<DayKind> {
    if date.weekday() == Weekday::Sun {
        return Ok(DayKind::Sunday);
    }
    if is_public_holiday(date)? {
        return Ok(DayKind::PublicHoliday);
    }
    Ok(DayKind::Workable)
}

/// Returns true if `date` is neither a Sunday nor a public holiday.
pub fn is_workable_day(date: NaiveDate) -> EngineResult<bool> {
    Ok(classify_day(date)? == DayKind::Workable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekdays_are_workable() {
        // 2022-07-04 is a Monday
        for day in ["2022-07-04", "2022-07-05", "2022-07-06", "2022-07-07", "2022-07-08"] {
            assert_eq!(classify_day(make_date(day)).unwrap(), DayKind::Workable);
        }
    }

    #[test]
    fn test_saturday_is_workable() {
        assert_eq!(classify_day(make_date("2022-07-09")).unwrap(), DayKind::Workable);
        assert!(is_workable_day(make_date("2022-07-09")).unwrap());
    }

    #[test]
    fn test_sunday_is_not_workable() {
        assert_eq!(classify_day(make_date("2022-07-10")).unwrap(), DayKind::Sunday);
        assert!(!is_workable_day(make_date("2022-07-10")).unwrap());
    }

    #[test]
    fn test_holiday_is_not_workable() {
        assert_eq!(
            classify_day(make_date("2022-07-14")).unwrap(),
            DayKind::PublicHoliday
        );
        assert!(!is_workable_day(make_date("2022-07-14")).unwrap());
    }

    #[test]
    fn test_sunday_holiday_is_classified_as_sunday() {
        // 2022-05-01 is a Sunday and Labour Day
        assert_eq!(classify_day(make_date("2022-05-01")).unwrap(), DayKind::Sunday);
    }

    #[test]
    fn test_unsupported_year_propagates() {
        // 2040-07-02 is a Monday, so the holiday table is consulted
        assert!(classify_day(make_date("2040-07-02")).is_err());
    }

    #[test]
    fn test_day_kind_display() {
        assert_eq!(format!("{}", DayKind::Workable), "Workable");
        assert_eq!(format!("{}", DayKind::Sunday), "Sunday");
        assert_eq!(format!("{}", DayKind::PublicHoliday), "Public holiday");
    }

    #[test]
    fn test_day_kind_serialization() {
        let json = serde_json::to_string(&DayKind::PublicHoliday).unwrap();
        assert_eq!(json, "\"public_holiday\"");

        let deserialized: DayKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayKind::PublicHoliday);
    }
}
