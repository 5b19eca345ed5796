//! Outcome models for leave accounting operations.
//!
//! This module contains the [`LeaveGrant`] and [`MonthClosing`] types returned
//! by the accounting engine, together with the audit trace recording how each
//! decision was reached.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single step in the audit trace recording an accounting decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning raised while accounting.
///
/// Warnings do not refuse the operation but deserve attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// The complete audit trace for an operation.
///
/// # Example
///
/// ```
/// use paid_leave_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 42,
/// };
/// assert!(trace.step("company_limit").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of decision steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings raised.
    pub warnings: Vec<AuditWarning>,
    /// The total duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the first step produced by the rule `rule_id`.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The result of a successful leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveGrant {
    /// Unique identifier for this operation, also used as log correlation id.
    pub grant_id: Uuid,
    /// When the leave was granted.
    pub timestamp: DateTime<Utc>,
    /// The employee the leave was granted to.
    pub employee_name: String,
    /// Requested first day.
    pub requested_start: NaiveDate,
    /// Requested last day.
    pub requested_end: NaiveDate,
    /// The days charged, in chronological order.
    pub days_charged: Vec<NaiveDate>,
    /// The company limit that applied to this request.
    pub company_limit: u32,
    /// Prior-year leave remaining after this grant.
    pub remaining_prior_year: Decimal,
    /// Audit trace of the checks performed.
    pub audit_trace: AuditTrace,
}

impl LeaveGrant {
    /// Number of days charged.
    pub fn days_count(&self) -> usize {
        self.days_charged.len()
    }
}

/// The result of closing a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthClosing {
    /// The employee whose month was closed.
    pub employee_name: String,
    /// The month that was closed (first day).
    pub closed_month: NaiveDate,
    /// The month now open (first day).
    pub opened_month: NaiveDate,
    /// Days worked during the closed month.
    pub days_worked: Decimal,
    /// Leave accrued for the closed month.
    pub leave_accrued: Decimal,
    /// Whether a new leave year was opened, rolling current-year totals over.
    pub leave_year_rolled_over: bool,
}
