//! Public holiday model.
//!
//! This module contains the [`PublicHoliday`] type returned by the calendar
//! service when listing the statutory holidays of a year.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a French public holiday.
///
/// # Example
///
/// ```
/// use paid_leave_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2022, 7, 14).unwrap(),
///     name: "Fête nationale".to_string(),
///     easter_relative: false,
/// };
/// assert!(holiday.falls_on(NaiveDate::from_ymd_opt(2022, 7, 14).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Lundi de Pâques").
    pub name: String,
    /// Whether the date moves with Easter Sunday.
    #[serde(default)]
    pub easter_relative: bool,
}

impl PublicHoliday {
    /// Returns true if this holiday falls on `date`.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
