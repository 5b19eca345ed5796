//! Core data models for the paid leave engine.
//!
//! This module contains the employee leave record and the outcomes produced
//! by the accounting engine.

mod employee;
mod leave_outcome;
mod public_holiday;

pub use employee::{
    EmployeeRecord, HABITUALLY_WORKED_WEEKDAYS, LEAVE_ACCRUED_PER_MONTH,
    MIN_DAYS_WORKED_FOR_ELIGIBILITY,
};
pub use leave_outcome::{AuditStep, AuditTrace, AuditWarning, LeaveGrant, MonthClosing};
pub use public_holiday::PublicHoliday;
