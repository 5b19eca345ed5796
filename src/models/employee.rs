//! Employee leave record.
//!
//! This module defines [`EmployeeRecord`], the ledger of one home-care worker:
//! worked days and accrued leave for the leave year in progress, the frozen
//! totals of the previous leave year, and the days already charged against them.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::{self, leave_year_end, leave_year_start, month_start};
use crate::error::EngineResult;

/// Leave days accrued for every closed month of work.
pub const LEAVE_ACCRUED_PER_MONTH: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Days worked in the prior leave year that must be exceeded to be entitled to leave.
pub const MIN_DAYS_WORKED_FOR_ELIGIBILITY: Decimal = Decimal::TEN;

/// Weekdays a home-care worker is habitually scheduled to work.
pub const HABITUALLY_WORKED_WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// The leave ledger of a single employee.
///
/// "Current year" fields accumulate the leave year in progress (year N);
/// "prior year" fields are the frozen totals of the last completed leave year
/// (year N-1), against which leave requests are charged.
///
/// # Example
///
/// ```
/// use paid_leave_engine::models::EmployeeRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord {
///     days_worked_prior_year: Decimal::from(200),
///     leave_accrued_prior_year: Decimal::from(25),
///     ..EmployeeRecord::new(
///         "Dupont",
///         NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
///     )
/// };
/// assert!(record.is_eligible_for_paid_leave());
/// assert_eq!(record.leave_days_remaining_prior_year(), Decimal::from(25));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique name of the employee.
    pub name: String,
    /// First month of employment.
    pub contract_start_month: NaiveDate,
    /// The month currently open for accounting (first day of the month).
    pub current_month: NaiveDate,
    /// Days worked so far in the leave year in progress.
    #[serde(default)]
    pub days_worked_current_year: Decimal,
    /// Leave accrued so far in the leave year in progress.
    #[serde(default)]
    pub leave_accrued_current_year: Decimal,
    /// Days worked during the last completed leave year.
    #[serde(default)]
    pub days_worked_prior_year: Decimal,
    /// Leave accrued during the last completed leave year.
    #[serde(default)]
    pub leave_accrued_prior_year: Decimal,
    /// Leave already charged against the prior-year accrual.
    #[serde(default)]
    pub leave_taken_prior_year: Decimal,
    /// Days already charged as leave, in chronological order.
    #[serde(default)]
    pub leave_days_taken: BTreeSet<NaiveDate>,
}

impl EmployeeRecord {
    /// Creates a record for a newly onboarded employee with zeroed counters.
    ///
    /// Both months are normalised to their first day.
    pub fn new(
        name: impl Into<String>,
        contract_start_month: NaiveDate,
        current_month: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            contract_start_month: month_start(contract_start_month),
            current_month: month_start(current_month),
            days_worked_current_year: Decimal::ZERO,
            leave_accrued_current_year: Decimal::ZERO,
            days_worked_prior_year: Decimal::ZERO,
            leave_accrued_prior_year: Decimal::ZERO,
            leave_taken_prior_year: Decimal::ZERO,
            leave_days_taken: BTreeSet::new(),
        }
    }

    /// The weekdays this employee habitually works.
    pub fn habitually_worked_weekdays(&self) -> &'static [Weekday] {
        &HABITUALLY_WORKED_WEEKDAYS
    }

    /// Returns true if the employee worked strictly more than ten days in the
    /// prior leave year.
    pub fn is_eligible_for_paid_leave(&self) -> bool {
        self.days_worked_prior_year > MIN_DAYS_WORKED_FOR_ELIGIBILITY
    }

    /// Returns true if `date` falls on a habitually worked weekday.
    pub fn is_habitually_worked(&self, date: NaiveDate) -> bool {
        self.habitually_worked_weekdays().contains(&date.weekday())
    }

    /// Returns true if `date` is neither a Sunday nor a public holiday.
    pub fn is_workable_day(&self, date: NaiveDate) -> EngineResult<bool> {
        calendar::is_workable_day(date)
    }

    /// Returns true if `date` lies in the leave year of the current month.
    pub fn is_within_current_leave_year(&self, date: NaiveDate) -> bool {
        calendar::is_within_range(
            Some(date),
            Some(leave_year_start(self.current_month)),
            Some(self.current_leave_year_end()),
        )
    }

    /// Last day (May 31) of the leave year of the current month.
    pub fn current_leave_year_end(&self) -> NaiveDate {
        leave_year_end(self.current_month)
    }

    /// Prior-year leave still available.
    pub fn leave_days_remaining_prior_year(&self) -> Decimal {
        self.leave_accrued_prior_year - self.leave_taken_prior_year
    }

    /// Whole years between the contract start and the current month.
    pub fn seniority_years(&self) -> u32 {
        calendar::whole_years_between(self.contract_start_month, self.current_month)
    }

    /// The latest day already charged as leave.
    pub fn last_leave_day_taken(&self) -> Option<NaiveDate> {
        self.leave_days_taken.last().copied()
    }

    /// Computes the days charged for a leave request from `start` to `end`.
    ///
    /// # Counting rule
    ///
    /// - A reversed range charges nothing.
    /// - If the latest day already taken is on or after `start`, counting
    ///   starts the day after `start`, so a boundary day is not charged twice.
    /// - The first day is charged only if it is workable and habitually worked.
    /// - Every following day up to `end` is charged if it is workable.
    /// - Past `end`, counting carries on over workable days that are not
    ///   habitually worked, so a Saturday right after a Friday end is charged.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::UnsupportedYear`] if a visited day
    /// falls in a year without known holidays.
    ///
    /// # Example
    ///
    /// ```
    /// use paid_leave_engine::models::EmployeeRecord;
    /// use chrono::NaiveDate;
    ///
    /// let record = EmployeeRecord::new(
    ///     "Dupont",
    ///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
    /// );
    ///
    /// // Monday 2022-07-04 to Saturday 2022-07-09
    /// let days = record
    ///     .chargeable_days_for_range(
    ///         NaiveDate::from_ymd_opt(2022, 7, 4).unwrap(),
    ///         NaiveDate::from_ymd_opt(2022, 7, 9).unwrap(),
    ///     )
    ///     .unwrap();
    /// assert_eq!(days.len(), 6);
    /// ```
    pub fn chargeable_days_for_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<BTreeSet<NaiveDate>> {
        let mut days = BTreeSet::new();
        if start > end {
            return Ok(days);
        }

        let start = match self.last_leave_day_taken() {
            Some(last_taken) if last_taken >= start => start + Duration::days(1),
            _ => start,
        };

        if self.is_workable_day(start)? && self.is_habitually_worked(start) {
            days.insert(start);
        }

        let mut day = start + Duration::days(1);
        while day <= end || (!self.is_habitually_worked(day) && self.is_workable_day(day)?) {
            if self.is_workable_day(day)? {
                days.insert(day);
            }
            day += Duration::days(1);
        }

        Ok(days)
    }
}
