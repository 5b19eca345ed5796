//! Seasonal weighting of leave months.
//!
//! Each month of the leave year carries a weight used by the company limit.
//! June weighs 8 points out of 120, July and August 48. From September on
//! the weight climbs by 8 points a month, from 16 up to 80 in May.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Weight points per leave month, June first and May last.
pub const SEASONAL_WEIGHT_POINTS: [u32; 12] = [8, 48, 48, 16, 24, 32, 40, 48, 56, 64, 72, 80];

/// Divisor turning weight points into a fraction.
pub const SEASONAL_WEIGHT_SCALE: u32 = 120;

/// Position of `date`'s month within the leave year (June = 1, May = 12).
pub fn leave_month_index(date: NaiveDate) -> u32 {
    1 + (date.month() + 6) % 12
}

/// Returns the seasonal weight of the month containing `month`.
///
/// The weight lies between 8/120 (June) and 80/120 (May).
/// An absent month weighs zero.
///
/// # Example
///
/// ```
/// use paid_leave_engine::calendar::seasonal_weight;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let july = NaiveDate::from_ymd_opt(2023, 7, 15);
/// assert_eq!(seasonal_weight(july), Decimal::new(4, 1));
/// assert_eq!(seasonal_weight(None), Decimal::ZERO);
/// ```
pub fn seasonal_weight(month: Option<NaiveDate>) -> Decimal {
    let Some(month) = month else {
        return Decimal::ZERO;
    };
    let index = leave_month_index(month) as usize;
    Decimal::from(SEASONAL_WEIGHT_POINTS[index - 1]) / Decimal::from(SEASONAL_WEIGHT_SCALE)
}
