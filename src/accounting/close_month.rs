//! Month closing.
//!
//! Closing a month records the days worked, accrues 2.5 days of leave and
//! opens the next month. Opening June starts a new leave year: the
//! current-year totals become the prior-year totals against which leave is
//! charged from then on.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calendar::LEAVE_YEAR_START_MONTH;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, LEAVE_ACCRUED_PER_MONTH, MonthClosing};
use crate::store::EmployeeStore;

use super::LeaveAccountingEngine;

impl<S: EmployeeStore> LeaveAccountingEngine<S> {
    /// Closes the employee's current month with `days_worked` days of work.
    ///
    /// As with [`Self::add_leave`], the caller's record is replaced only once
    /// the store has saved the update.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidEmployee`] if `days_worked` is negative or the
    ///   current month cannot be advanced
    /// - [`EngineError::Store`] if saving fails
    pub fn close_month(
        &self,
        record: &mut EmployeeRecord,
        days_worked: Decimal,
    ) -> EngineResult<MonthClosing> {
        let correlation_id = Uuid::new_v4();

        if days_worked < Decimal::ZERO {
            let error = EngineError::InvalidEmployee {
                field: "days_worked".to_string(),
                message: format!("cannot close a month with {} days worked", days_worked),
            };
            warn!(
                correlation_id = %correlation_id,
                employee = %record.name,
                error = %error,
                "Month closing rejected"
            );
            return Err(error);
        }

        let mut updated = record.clone();
        let (closed_month, opened_month, rolled_over) = roll_month(&mut updated, days_worked)?;
        *record = self.store.save(&updated)?;

        info!(
            correlation_id = %correlation_id,
            employee = %record.name,
            %closed_month,
            %opened_month,
            %days_worked,
            leave_year_rolled_over = rolled_over,
            "Month closed"
        );

        Ok(MonthClosing {
            employee_name: record.name.clone(),
            closed_month,
            opened_month,
            days_worked,
            leave_accrued: LEAVE_ACCRUED_PER_MONTH,
            leave_year_rolled_over: rolled_over,
        })
    }
}

/// Applies a month closing to `record`, returning the closed month, the opened
/// month and whether a new leave year was opened.
fn roll_month(
    record: &mut EmployeeRecord,
    days_worked: Decimal,
) -> EngineResult<(NaiveDate, NaiveDate, bool)> {
    let closed_month = record.current_month;
    let opened_month = closed_month
        .checked_add_months(Months::new(1))
        .ok_or_else(|| EngineError::InvalidEmployee {
            field: "current_month".to_string(),
            message: format!("cannot open the month after {}", closed_month),
        })?;

    record.days_worked_current_year += days_worked;
    record.leave_accrued_current_year += LEAVE_ACCRUED_PER_MONTH;
    record.current_month = opened_month;

    let rolled_over = opened_month.month() == LEAVE_YEAR_START_MONTH;
    if rolled_over {
        record.days_worked_prior_year = record.days_worked_current_year;
        record.leave_accrued_prior_year = record.leave_accrued_current_year;
        record.days_worked_current_year = Decimal::ZERO;
        record.leave_accrued_current_year = Decimal::ZERO;

        record.leave_days_taken.retain(|day| *day >= opened_month);
        record.leave_taken_prior_year = Decimal::from(record.leave_days_taken.len());
    }

    Ok((closed_month, opened_month, rolled_over))
}
