//! Company leave limit.
//!
//! The employer caps the number of days granted in one request. The cap
//! blends four terms, applied in this order:
//!
//! 1. the seasonal weight of the requested months times the prior-year accrual;
//! 2. one day less (more) when the company as a whole has consumed noticeably
//!    less (more) of its prior-year leave than the season suggests;
//! 3. a margin growing with the number of months between the current month
//!    and the end of the request;
//! 4. one day per year of seniority, capped by the policy.
//!
//! The result is clamped at zero and rounded half away from zero.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calendar::{months_between, seasonal_weight, whole_years_between};
use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::AuditStep;
use crate::store::EmployeeStore;

use super::LeaveAccountingEngine;

/// Months in a year, as used by the horizon margin.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Everything about the employee and the request that the limit depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyLimitInputs {
    /// The employee's current month.
    pub current_month: NaiveDate,
    /// Leave accrued during the prior leave year.
    pub leave_accrued_prior_year: Decimal,
    /// First month of employment.
    pub contract_start_month: NaiveDate,
    /// First chargeable day of the request.
    pub first_leave_day: NaiveDate,
    /// Last chargeable day of the request.
    pub last_leave_day: NaiveDate,
}

impl CompanyLimitInputs {
    /// Whole years between the contract start and the current month.
    pub fn seniority_years(&self) -> u32 {
        whole_years_between(self.contract_start_month, self.current_month)
    }

    /// Months from the current month to the month of the last leave day.
    pub fn horizon_months(&self) -> u32 {
        months_between(self.current_month, self.last_leave_day)
            .max(0)
            .unsigned_abs()
    }
}

/// The computed company limit with its audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyLimit {
    /// Maximum number of days grantable in the request.
    pub limit: u32,
    /// Company-wide prior-year consumption the limit was computed with.
    pub company_fraction: Option<Decimal>,
    /// The audit step recording the computation.
    pub audit_step: AuditStep,
}

/// Computes the company limit for a request.
///
/// `company_fraction` is the share of prior-year leave already taken across
/// the company; an absent value counts as zero.
///
/// # Example
///
/// ```
/// use paid_leave_engine::accounting::{CompanyLimitInputs, compute_company_limit};
/// use paid_leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let inputs = CompanyLimitInputs {
///     current_month: NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
///     leave_accrued_prior_year: Decimal::from(30),
///     contract_start_month: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     first_leave_day: NaiveDate::from_ymd_opt(2022, 7, 11).unwrap(),
///     last_leave_day: NaiveDate::from_ymd_opt(2022, 7, 16).unwrap(),
/// };
///
/// // 0.4 x 30 = 12, minus 1 for low company consumption, plus 2 years of seniority
/// let result = compute_company_limit(&inputs, None, &LeavePolicy::default(), 1);
/// assert_eq!(result.limit, 13);
/// ```
pub fn compute_company_limit(
    inputs: &CompanyLimitInputs,
    company_fraction: Option<Decimal>,
    policy: &LeavePolicy,
    step_number: u32,
) -> CompanyLimit {
    let weight = seasonal_weight(Some(inputs.first_leave_day))
        .max(seasonal_weight(Some(inputs.last_leave_day)));
    let seasonal_limit = weight * inputs.leave_accrued_prior_year;

    let fraction = company_fraction.unwrap_or(Decimal::ZERO);
    let deviation = fraction - weight;
    let consumption_adjustment = if deviation < -policy.consumption_tolerance {
        -Decimal::ONE
    } else if deviation > policy.consumption_tolerance {
        Decimal::ONE
    } else {
        Decimal::ZERO
    };
    let mut limit = seasonal_limit + consumption_adjustment;

    let horizon_months = inputs.horizon_months();
    let horizon_margin =
        limit * policy.horizon_margin_rate * Decimal::from(horizon_months) / MONTHS_PER_YEAR;
    limit += horizon_margin;

    let seniority_years = inputs.seniority_years();
    let seniority_bonus = seniority_years.min(policy.seniority_bonus_cap_years);
    limit += Decimal::from(seniority_bonus);

    let rounded = limit
        .max(Decimal::ZERO)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let final_limit = rounded.to_u32().unwrap_or(u32::MAX);

    let audit_step = AuditStep {
        step_number,
        rule_id: "company_limit".to_string(),
        rule_name: "Company Leave Limit".to_string(),
        input: serde_json::json!({
            "current_month": inputs.current_month.to_string(),
            "leave_accrued_prior_year": inputs.leave_accrued_prior_year.to_string(),
            "contract_start_month": inputs.contract_start_month.to_string(),
            "first_leave_day": inputs.first_leave_day.to_string(),
            "last_leave_day": inputs.last_leave_day.to_string(),
            "company_fraction": company_fraction.map(|f| f.round_dp(4).to_string()),
        }),
        output: serde_json::json!({
            "seasonal_weight": weight.round_dp(4).to_string(),
            "seasonal_limit": seasonal_limit.round_dp(4).to_string(),
            "consumption_adjustment": consumption_adjustment.to_string(),
            "horizon_months": horizon_months,
            "horizon_margin": horizon_margin.round_dp(4).to_string(),
            "seniority_bonus": seniority_bonus,
            "limit": final_limit,
        }),
        reasoning: format!(
            "Seasonal weight {} x {} accrued days, {} for company consumption, \
             +{} over {} months of horizon, +{} for {} years of seniority = {} days",
            weight.round_dp(4),
            inputs.leave_accrued_prior_year,
            consumption_adjustment,
            horizon_margin.round_dp(2),
            horizon_months,
            seniority_bonus,
            seniority_years,
            final_limit
        ),
    };

    CompanyLimit {
        limit: final_limit,
        company_fraction,
        audit_step,
    }
}

impl<S: EmployeeStore> LeaveAccountingEngine<S> {
    /// Computes the company limit for a request, reading the company-wide
    /// prior-year consumption from the store.
    ///
    /// # Errors
    ///
    /// [`crate::error::EngineError::Store`] if the aggregate cannot be read.
    ///
    /// # Example
    ///
    /// ```
    /// use paid_leave_engine::accounting::{CompanyLimitInputs, LeaveAccountingEngine};
    /// use paid_leave_engine::config::LeavePolicy;
    /// use paid_leave_engine::store::InMemoryEmployeeStore;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let engine = LeaveAccountingEngine::new(InMemoryEmployeeStore::new(), LeavePolicy::default());
    /// let inputs = CompanyLimitInputs {
    ///     current_month: NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
    ///     leave_accrued_prior_year: Decimal::from(30),
    ///     contract_start_month: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ///     first_leave_day: NaiveDate::from_ymd_opt(2022, 7, 11).unwrap(),
    ///     last_leave_day: NaiveDate::from_ymd_opt(2022, 7, 16).unwrap(),
    /// };
    ///
    /// let result = engine.calculate_company_limit(&inputs).unwrap();
    /// assert_eq!(result.limit, 13);
    /// assert_eq!(result.company_fraction, None);
    /// ```
    pub fn calculate_company_limit(
        &self,
        inputs: &CompanyLimitInputs,
    ) -> EngineResult<CompanyLimit> {
        self.company_limit_step(inputs, 1)
    }

    pub(super) fn company_limit_step(
        &self,
        inputs: &CompanyLimitInputs,
        step_number: u32,
    ) -> EngineResult<CompanyLimit> {
        let company_fraction = self.store.aggregate_prior_year_leave_fraction()?;
        Ok(compute_company_limit(
            inputs,
            company_fraction,
            &self.policy,
            step_number,
        ))
    }
}
