//! Configuration types for the employer leave policy.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from `policy.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Employer policy parameters driving the company leave limit.
///
/// Statutory rules (eligibility threshold, monthly accrual) are not part of
/// the policy; they are constants of [`crate::models`].
///
/// # Example
///
/// ```
/// use paid_leave_engine::config::LeavePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(policy.seniority_bonus_cap_years, 10);
/// assert_eq!(policy.consumption_tolerance, Decimal::new(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeavePolicy {
    /// Human-readable name of the policy.
    pub name: String,
    /// Maximum number of seniority years turned into extra limit days.
    pub seniority_bonus_cap_years: u32,
    /// Gap between the company-wide consumption fraction and the seasonal
    /// weight beyond which the limit moves by one day.
    pub consumption_tolerance: Decimal,
    /// Extra margin, as a fraction of the limit, granted per twelve months
    /// between the current month and the last day of leave.
    pub horizon_margin_rate: Decimal,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            seniority_bonus_cap_years: 10,
            consumption_tolerance: Decimal::new(2, 1),
            horizon_margin_rate: Decimal::new(1, 1),
        }
    }
}

impl LeavePolicy {
    /// Checks that every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPolicy`] naming the first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.consumption_tolerance < Decimal::ZERO || self.consumption_tolerance > Decimal::ONE
        {
            return Err(EngineError::InvalidPolicy {
                field: "consumption_tolerance".to_string(),
                message: format!("must be between 0 and 1, got {}", self.consumption_tolerance),
            });
        }
        if self.horizon_margin_rate < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "horizon_margin_rate".to_string(),
                message: format!("must not be negative, got {}", self.horizon_margin_rate),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_valid() {
        assert!(LeavePolicy::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let policy: LeavePolicy = serde_yaml::from_str("seniority_bonus_cap_years: 5\n").unwrap();

        assert_eq!(policy.seniority_bonus_cap_years, 5);
        assert_eq!(policy.horizon_margin_rate, Decimal::new(1, 1));
        assert_eq!(policy.name, "default");
    }

    #[test]
    fn test_negative_tolerance_is_rejected() {
        let policy = LeavePolicy {
            consumption_tolerance: Decimal::new(-1, 1),
            ..LeavePolicy::default()
        };

        match policy.validate() {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "consumption_tolerance")
            }
            other => panic!("Expected InvalidPolicy error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let policy = LeavePolicy {
            horizon_margin_rate: Decimal::new(-5, 2),
            ..LeavePolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
