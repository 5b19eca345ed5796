//! Leave accounting engine.
//!
//! [`LeaveAccountingEngine`] validates and records leave requests, computes
//! the company limit and closes accounting months, persisting every change
//! through an [`EmployeeStore`].
//!
//! # Example
//!
//! ```
//! use paid_leave_engine::accounting::LeaveAccountingEngine;
//! use paid_leave_engine::config::LeavePolicy;
//! use paid_leave_engine::models::EmployeeRecord;
//! use paid_leave_engine::store::InMemoryEmployeeStore;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//!
//! let engine = LeaveAccountingEngine::new(InMemoryEmployeeStore::new(), LeavePolicy::default());
//! let mut record = EmployeeRecord {
//!     days_worked_prior_year: Decimal::from(200),
//!     leave_accrued_prior_year: Decimal::from(30),
//!     ..EmployeeRecord::new(
//!         "Dupont",
//!         NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
//!         NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
//!     )
//! };
//!
//! let grant = engine
//!     .add_leave(
//!         &mut record,
//!         NaiveDate::from_ymd_opt(2022, 7, 11).unwrap(),
//!         NaiveDate::from_ymd_opt(2022, 7, 16).unwrap(),
//!     )
//!     .unwrap();
//! assert_eq!(grant.days_count(), 5);
//! assert_eq!(record.leave_taken_prior_year, Decimal::from(5));
//! ```

mod add_leave;
mod close_month;
mod company_limit;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, LeaveGrant, MonthClosing};
use crate::store::EmployeeStore;

pub use company_limit::{CompanyLimit, CompanyLimitInputs, compute_company_limit};

/// Orchestrates leave accounting against an employee store.
#[derive(Debug, Clone)]
pub struct LeaveAccountingEngine<S> {
    store: S,
    policy: LeavePolicy,
}

impl<S: EmployeeStore> LeaveAccountingEngine<S> {
    /// Creates an engine persisting through `store` under `policy`.
    pub fn new(store: S, policy: LeavePolicy) -> Self {
        Self { store, policy }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The employer policy in force.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Loads the employee `name`, then runs [`Self::add_leave`] on it.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmployeeNotFound`] if the store has no such employee,
    /// otherwise any error of [`Self::add_leave`].
    pub fn add_leave_for(
        &self,
        name: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<LeaveGrant> {
        let mut record = self.load(name)?;
        self.add_leave(&mut record, start, end)
    }

    /// Loads the employee `name`, then runs [`Self::close_month`] on it.
    ///
    /// # Errors
    ///
    /// [`EngineError::EmployeeNotFound`] if the store has no such employee,
    /// otherwise any error of [`Self::close_month`].
    pub fn close_month_for(&self, name: &str, days_worked: Decimal) -> EngineResult<MonthClosing> {
        let mut record = self.load(name)?;
        self.close_month(&mut record, days_worked)
    }

    fn load(&self, name: &str) -> EngineResult<EmployeeRecord> {
        self.store
            .find_by_name(name)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                name: name.to_string(),
            })
    }
}
