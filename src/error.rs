//! Error types for the paid leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while accounting for paid leave.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the paid leave engine.
///
/// Leave refusals (eligibility, balance, company limit...) and infrastructure
/// failures (configuration, storage) share this type so callers can propagate
/// everything with `?`. Use [`EngineError::is_leave_refusal`] to tell them apart.
///
/// # Example
///
/// ```
/// use paid_leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A policy parameter was out of range.
    #[error("Invalid leave policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending policy field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Easter-relative holidays are only known for a fixed range of years.
    #[error("No Easter date known for year {year} (supported: 2012-2035)")]
    UnsupportedYear {
        /// The year that was requested.
        year: i32,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee with this name exists in the store.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The employee has not worked enough days in the prior leave year.
    #[error(
        "Employee '{name}' is not legally entitled to paid leave: {days_worked} days worked in the prior leave year, more than {threshold} required"
    )]
    NotEligible {
        /// The employee name.
        name: String,
        /// Days worked in the prior leave year.
        days_worked: Decimal,
        /// The strict threshold that must be exceeded.
        threshold: Decimal,
    },

    /// The requested range contains no chargeable day.
    #[error("No chargeable leave day between {start} and {end}")]
    NoChargeableDays {
        /// Requested first day.
        start: NaiveDate,
        /// Requested last day.
        end: NaiveDate,
    },

    /// The requested leave starts before the employee's current month.
    #[error("Cannot take leave on {day}, before the current month {current_month}")]
    BeforeCurrentMonth {
        /// The earliest chargeable day.
        day: NaiveDate,
        /// The employee's current month (first day).
        current_month: NaiveDate,
    },

    /// The requested leave falls in a leave year that is not open yet.
    #[error("Cannot take leave on {day}, after the end of the current leave year ({leave_year_end})")]
    NextLeaveYear {
        /// The first chargeable day beyond the current leave year.
        day: NaiveDate,
        /// Last day of the current leave year.
        leave_year_end: NaiveDate,
    },

    /// The requested days exceed what remains of the prior-year accrual.
    #[error("{requested} chargeable days exceed the {remaining} days of leave remaining from the prior leave year")]
    ExceedsAccruedBalance {
        /// Number of chargeable days requested.
        requested: usize,
        /// Remaining prior-year balance.
        remaining: Decimal,
    },

    /// The requested days exceed the employer's ceiling for this request.
    #[error("{requested} chargeable days exceed the company limit of {limit} days")]
    ExceedsCompanyLimit {
        /// Number of chargeable days requested.
        requested: usize,
        /// The computed company limit.
        limit: u32,
    },

    /// The backing store failed.
    #[error("Store error: {message}")]
    Store {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Returns true for business refusals of a leave request, as opposed to
    /// configuration, validation or storage failures.
    pub fn is_leave_refusal(&self) -> bool {
        matches!(
            self,
            EngineError::NotEligible { .. }
                | EngineError::NoChargeableDays { .. }
                | EngineError::BeforeCurrentMonth { .. }
                | EngineError::NextLeaveYear { .. }
                | EngineError::ExceedsAccruedBalance { .. }
                | EngineError::ExceedsCompanyLimit { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_unsupported_year_displays_year() {
        let error = EngineError::UnsupportedYear { year: 2040 };
        assert_eq!(
            error.to_string(),
            "No Easter date known for year 2040 (supported: 2012-2035)"
        );
    }

    #[test]
    fn test_not_eligible_displays_reason() {
        let error = EngineError::NotEligible {
            name: "Dupont".to_string(),
            days_worked: Decimal::from(10),
            threshold: Decimal::from(10),
        };
        assert_eq!(
            error.to_string(),
            "Employee 'Dupont' is not legally entitled to paid leave: 10 days worked in the prior leave year, more than 10 required"
        );
    }

    #[test]
    fn test_before_current_month_displays_dates() {
        let error = EngineError::BeforeCurrentMonth {
            day: date(2022, 6, 1),
            current_month: date(2022, 7, 1),
        };
        assert_eq!(
            error.to_string(),
            "Cannot take leave on 2022-06-01, before the current month 2022-07-01"
        );
    }

    #[test]
    fn test_exceeds_accrued_balance_displays_counts() {
        let error = EngineError::ExceedsAccruedBalance {
            requested: 6,
            remaining: Decimal::new(50, 1),
        };
        assert_eq!(
            error.to_string(),
            "6 chargeable days exceed the 5.0 days of leave remaining from the prior leave year"
        );
    }

    #[test]
    fn test_exceeds_company_limit_displays_limit() {
        let error = EngineError::ExceedsCompanyLimit {
            requested: 6,
            limit: 2,
        };
        assert_eq!(
            error.to_string(),
            "6 chargeable days exceed the company limit of 2 days"
        );
    }

    #[test]
    fn test_refusals_are_distinguished_from_failures() {
        let refusal = EngineError::NoChargeableDays {
            start: date(2022, 7, 2),
            end: date(2022, 7, 3),
        };
        let failure = EngineError::Store {
            message: "disk full".to_string(),
        };
        assert!(refusal.is_leave_refusal());
        assert!(!failure.is_leave_refusal());
        assert!(
            !EngineError::EmployeeNotFound {
                name: "x".to_string()
            }
            .is_leave_refusal()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unsupported_year() -> EngineResult<()> {
            Err(EngineError::UnsupportedYear { year: 1999 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unsupported_year()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
