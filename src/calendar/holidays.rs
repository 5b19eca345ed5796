//! French public holidays and leap years.
//!
//! Eleven statutory holidays are observed each year. Eight fall on fixed dates;
//! Easter Monday, Ascension and Whit Monday move with Easter Sunday, which is
//! read from a lookup table covering 2012 to 2035.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::PublicHoliday;

/// Easter Sunday for every year the engine supports, as `(year, month, day)`.
const EASTER_SUNDAYS: [(i32, u32, u32); 24] = [
    (2012, 4, 8),
    (2013, 3, 31),
    (2014, 4, 20),
    (2015, 4, 5),
    (2016, 3, 27),
    (2017, 4, 16),
    (2018, 4, 1),
    (2019, 4, 21),
    (2020, 4, 12),
    (2021, 4, 4),
    (2022, 4, 17),
    (2023, 4, 9),
    (2024, 3, 31),
    (2025, 4, 20),
    (2026, 4, 5),
    (2027, 3, 28),
    (2028, 4, 16),
    (2029, 4, 1),
    (2030, 4, 21),
    (2031, 4, 13),
    (2032, 3, 28),
    (2033, 4, 17),
    (2034, 4, 9),
    (2035, 3, 25),
];

/// Holidays on the same day every year: `(month, day, name)`.
const FIXED_HOLIDAYS: [(u32, u32, &str); 8] = [
    (1, 1, "Jour de l'an"),
    (5, 1, "Fête du Travail"),
    (5, 8, "Victoire 1945"),
    (7, 14, "Fête nationale"),
    (8, 15, "Assomption"),
    (11, 1, "Toussaint"),
    (11, 11, "Armistice 1918"),
    (12, 25, "Noël"),
];

/// Holidays expressed as an offset in days from Easter Sunday: `(offset, name)`.
const EASTER_RELATIVE_HOLIDAYS: [(i64, &str); 3] = [
    (1, "Lundi de Pâques"),
    (40, "Ascension"),
    (50, "Lundi de Pentecôte"),
];

/// Returns Easter Sunday of `year`, or `None` outside 2012-2035.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2022), NaiveDate::from_ymd_opt(2022, 4, 17));
/// assert_eq!(easter_sunday(2011), None);
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    EASTER_SUNDAYS
        .iter()
        .find(|(y, _, _)| *y == year)
        .and_then(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
}

/// Lists the eleven public holidays of `year` in chronological order.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedYear`] when Easter Sunday of `year` is
/// not in the lookup table.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::public_holidays;
/// use chrono::NaiveDate;
///
/// let holidays = public_holidays(2023).unwrap();
/// assert_eq!(holidays.len(), 11);
/// assert_eq!(holidays[0].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
/// assert!(holidays.iter().any(|h| h.date == NaiveDate::from_ymd_opt(2023, 4, 10).unwrap()));
/// ```
pub fn public_holidays(year: i32) -> EngineResult<Vec<PublicHoliday>> {
    let easter = easter_sunday(year).ok_or(EngineError::UnsupportedYear { year })?;

    let mut holidays = Vec::with_capacity(FIXED_HOLIDAYS.len() + EASTER_RELATIVE_HOLIDAYS.len());

    for (month, day, name) in FIXED_HOLIDAYS {
        let date =
            NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::UnsupportedYear { year })?;
        holidays.push(PublicHoliday {
            date,
            name: name.to_string(),
            easter_relative: false,
        });
    }

    for (offset, name) in EASTER_RELATIVE_HOLIDAYS {
        holidays.push(PublicHoliday {
            date: easter + Duration::days(offset),
            name: name.to_string(),
            easter_relative: true,
        });
    }

    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}

/// Returns true if `date` is one of the public holidays of its year.
///
/// This is plain set membership; the leap-year status of the year plays no part.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedYear`] for years outside the Easter table.
pub fn is_public_holiday(date: NaiveDate) -> EngineResult<bool> {
    let year = date.year();
    let easter = easter_sunday(year).ok_or(EngineError::UnsupportedYear { year })?;

    let fixed = FIXED_HOLIDAYS
        .iter()
        .any(|&(month, day, _)| date.month() == month && date.day() == day);
    let moving = EASTER_RELATIVE_HOLIDAYS
        .iter()
        .any(|&(offset, _)| easter + Duration::days(offset) == date);

    Ok(fixed || moving)
}

/// Gregorian leap-year rule.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2100));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
