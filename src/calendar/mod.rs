//! Calendar service for French paid leave.
//!
//! This module contains stateless calendar facts: public holidays (fixed and
//! Easter-relative), leap years, leave-year boundaries running June to May,
//! the seasonal weighting of leave months, and the classification of days
//! that can be charged as leave.

mod day_classification;
mod holidays;
mod leave_year;
mod seasonal_weight;

pub use day_classification::{DayKind, classify_day, is_workable_day};
pub use holidays::{easter_sunday, is_leap_year, is_public_holiday, public_holidays};
pub use leave_year::{
    LEAVE_YEAR_START_MONTH, is_within_range, leave_year_end, leave_year_start, month_start,
    months_between, whole_years_between,
};
pub use seasonal_weight::{
    SEASONAL_WEIGHT_POINTS, SEASONAL_WEIGHT_SCALE, leave_month_index, seasonal_weight,
};
