//! Leave requests.
//!
//! A request is validated in a fixed order and recorded only if every check
//! passes:
//!
//! 1. the employee worked enough days in the prior leave year;
//! 2. the requested range contains chargeable days;
//! 3. none of them precedes the current month;
//! 4. none of them lies beyond the current leave year;
//! 5. the prior-year balance covers them;
//! 6. the company limit covers them.

use std::collections::BTreeSet;
use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, EmployeeRecord, LeaveGrant,
    MIN_DAYS_WORKED_FOR_ELIGIBILITY,
};
use crate::store::EmployeeStore;

use super::LeaveAccountingEngine;
use super::company_limit::{CompanyLimit, CompanyLimitInputs};

impl<S: EmployeeStore> LeaveAccountingEngine<S> {
    /// Charges the leave from `start` to `end` against the prior-year balance.
    ///
    /// Validation runs on a copy of `record`; the caller's record is replaced
    /// only once the store has saved the updated copy, so on any error it is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotEligible`] if the employee worked ten days or fewer
    ///   in the prior leave year
    /// - [`EngineError::NoChargeableDays`] if nothing in the range is chargeable
    /// - [`EngineError::BeforeCurrentMonth`] if a day precedes the current month
    /// - [`EngineError::NextLeaveYear`] if a day lies beyond the current leave year
    /// - [`EngineError::ExceedsAccruedBalance`] if the prior-year balance is too small
    /// - [`EngineError::ExceedsCompanyLimit`] if the company limit is too small
    /// - [`EngineError::UnsupportedYear`] or [`EngineError::Store`] on
    ///   calendar or storage failures
    pub fn add_leave(
        &self,
        record: &mut EmployeeRecord,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<LeaveGrant> {
        let grant_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(
            correlation_id = %grant_id,
            employee = %record.name,
            %start,
            %end,
            "Processing leave request"
        );

        let result = self.validate_and_record(record, start, end, grant_id, start_time);
        match &result {
            Ok(grant) => info!(
                correlation_id = %grant_id,
                employee = %record.name,
                days = grant.days_count(),
                company_limit = grant.company_limit,
                remaining = %grant.remaining_prior_year,
                duration_us = grant.audit_trace.duration_us,
                "Leave granted"
            ),
            Err(error) if error.is_leave_refusal() => warn!(
                correlation_id = %grant_id,
                employee = %record.name,
                reason = %error,
                "Leave refused"
            ),
            Err(error) => warn!(
                correlation_id = %grant_id,
                employee = %record.name,
                error = %error,
                "Leave request failed"
            ),
        }
        result
    }

    fn validate_and_record(
        &self,
        record: &mut EmployeeRecord,
        start: NaiveDate,
        end: NaiveDate,
        grant_id: Uuid,
        start_time: Instant,
    ) -> EngineResult<LeaveGrant> {
        let mut steps = Vec::new();
        let mut warnings = Vec::new();

        steps.push(check_eligibility(record, 1)?);

        let mut days = record.chargeable_days_for_range(start, end)?;
        let counted = days.len();
        days.retain(|day| !record.leave_days_taken.contains(day));
        let already_taken = counted - days.len();
        let (first_day, last_day) = match (days.first(), days.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(EngineError::NoChargeableDays { start, end }),
        };
        debug!(
            correlation_id = %grant_id,
            days = days.len(),
            already_taken,
            %first_day,
            %last_day,
            "Computed chargeable days"
        );
        if last_day > end {
            warnings.push(AuditWarning {
                code: "SPILL_OVER_DAY".to_string(),
                message: format!(
                    "Leave extends past the requested end {} up to {}",
                    end, last_day
                ),
            });
        }
        steps.push(chargeable_days_step(&days, already_taken, start, end, 2));

        steps.push(check_leave_window(record, first_day, &days, 3)?);
        steps.push(check_accrued_balance(record, days.len(), 4)?);

        let inputs = CompanyLimitInputs {
            current_month: record.current_month,
            leave_accrued_prior_year: record.leave_accrued_prior_year,
            contract_start_month: record.contract_start_month,
            first_leave_day: first_day,
            last_leave_day: last_day,
        };
        let CompanyLimit {
            limit,
            company_fraction,
            audit_step,
        } = self.company_limit_step(&inputs, 5)?;
        if company_fraction.is_none() {
            warnings.push(AuditWarning {
                code: "COMPANY_STATS_UNAVAILABLE".to_string(),
                message: "No company-wide leave consumption available, counted as zero"
                    .to_string(),
            });
        }
        debug!(correlation_id = %grant_id, limit, "Computed company limit");
        steps.push(audit_step);
        if days.len() > limit as usize {
            return Err(EngineError::ExceedsCompanyLimit {
                requested: days.len(),
                limit,
            });
        }

        let mut updated = record.clone();
        updated.leave_days_taken.extend(days.iter().copied());
        updated.leave_taken_prior_year += Decimal::from(days.len());
        let saved = self.store.save(&updated)?;
        steps.push(AuditStep {
            step_number: 6,
            rule_id: "record_leave".to_string(),
            rule_name: "Record Leave".to_string(),
            input: serde_json::json!({ "days": days.len() }),
            output: serde_json::json!({
                "leave_taken_prior_year": saved.leave_taken_prior_year.to_string(),
                "leave_days_taken": saved.leave_days_taken.len(),
            }),
            reasoning: format!(
                "Charged {} days, {} taken out of {} accrued",
                days.len(),
                saved.leave_taken_prior_year,
                saved.leave_accrued_prior_year
            ),
        });
        *record = saved;

        Ok(LeaveGrant {
            grant_id,
            timestamp: Utc::now(),
            employee_name: record.name.clone(),
            requested_start: start,
            requested_end: end,
            days_charged: days.into_iter().collect(),
            company_limit: limit,
            remaining_prior_year: record.leave_days_remaining_prior_year(),
            audit_trace: AuditTrace {
                steps,
                warnings,
                duration_us: start_time.elapsed().as_micros() as u64,
            },
        })
    }
}

fn check_eligibility(record: &EmployeeRecord, step_number: u32) -> EngineResult<AuditStep> {
    if !record.is_eligible_for_paid_leave() {
        return Err(EngineError::NotEligible {
            name: record.name.clone(),
            days_worked: record.days_worked_prior_year,
            threshold: MIN_DAYS_WORKED_FOR_ELIGIBILITY,
        });
    }

    Ok(AuditStep {
        step_number,
        rule_id: "eligibility".to_string(),
        rule_name: "Paid Leave Eligibility".to_string(),
        input: serde_json::json!({
            "days_worked_prior_year": record.days_worked_prior_year.to_string(),
            "threshold": MIN_DAYS_WORKED_FOR_ELIGIBILITY.to_string(),
        }),
        output: serde_json::json!({ "eligible": true }),
        reasoning: format!(
            "{} days worked in the prior leave year exceeds {}",
            record.days_worked_prior_year, MIN_DAYS_WORKED_FOR_ELIGIBILITY
        ),
    })
}

fn chargeable_days_step(
    days: &BTreeSet<NaiveDate>,
    already_taken: usize,
    start: NaiveDate,
    end: NaiveDate,
    step_number: u32,
) -> AuditStep {
    let listed: Vec<String> = days.iter().map(|d| d.to_string()).collect();
    AuditStep {
        step_number,
        rule_id: "chargeable_days".to_string(),
        rule_name: "Chargeable Days".to_string(),
        input: serde_json::json!({
            "start": start.to_string(),
            "end": end.to_string(),
        }),
        output: serde_json::json!({
            "days": listed,
            "count": days.len(),
            "already_taken": already_taken,
        }),
        reasoning: format!(
            "{} chargeable days from {} to {}, {} already taken",
            days.len(),
            start,
            end,
            already_taken
        ),
    }
}

fn check_leave_window(
    record: &EmployeeRecord,
    first_day: NaiveDate,
    days: &BTreeSet<NaiveDate>,
    step_number: u32,
) -> EngineResult<AuditStep> {
    if first_day < record.current_month {
        return Err(EngineError::BeforeCurrentMonth {
            day: first_day,
            current_month: record.current_month,
        });
    }

    let leave_year_end = record.current_leave_year_end();
    if let Some(day) = days
        .iter()
        .find(|day| !record.is_within_current_leave_year(**day))
    {
        return Err(EngineError::NextLeaveYear {
            day: *day,
            leave_year_end,
        });
    }

    Ok(AuditStep {
        step_number,
        rule_id: "leave_window".to_string(),
        rule_name: "Current Leave Year Window".to_string(),
        input: serde_json::json!({
            "current_month": record.current_month.to_string(),
            "leave_year_end": leave_year_end.to_string(),
        }),
        output: serde_json::json!({ "within_window": true }),
        reasoning: format!(
            "All days fall between {} and {}",
            record.current_month, leave_year_end
        ),
    })
}

fn check_accrued_balance(
    record: &EmployeeRecord,
    requested: usize,
    step_number: u32,
) -> EngineResult<AuditStep> {
    let remaining = record.leave_days_remaining_prior_year();
    if Decimal::from(requested) > remaining {
        return Err(EngineError::ExceedsAccruedBalance {
            requested,
            remaining,
        });
    }

    Ok(AuditStep {
        step_number,
        rule_id: "accrued_balance".to_string(),
        rule_name: "Prior-Year Balance".to_string(),
        input: serde_json::json!({
            "requested": requested,
            "leave_accrued_prior_year": record.leave_accrued_prior_year.to_string(),
            "leave_taken_prior_year": record.leave_taken_prior_year.to_string(),
        }),
        output: serde_json::json!({ "remaining": remaining.to_string() }),
        reasoning: format!("{} days requested, {} remaining", requested, remaining),
    })
}
