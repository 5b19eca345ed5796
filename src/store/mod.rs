//! Persistence boundary for employee leave records.
//!
//! The engine never owns durable storage. It talks to an [`EmployeeStore`],
//! which a surrounding service backs with its database of choice.
//! [`InMemoryEmployeeStore`] is a reference implementation for tests and for
//! embedders without a database.

mod memory;

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::EmployeeRecord;

pub use memory::InMemoryEmployeeStore;

/// Storage backend for employee leave records.
///
/// Methods take `&self`; implementations provide their own interior
/// mutability and are responsible for serializing concurrent writes to the
/// same employee.
pub trait EmployeeStore {
    /// Looks an employee up by its unique name.
    fn find_by_name(&self, name: &str) -> EngineResult<Option<EmployeeRecord>>;

    /// Inserts or replaces the record with the same name.
    fn save(&self, record: &EmployeeRecord) -> EngineResult<EmployeeRecord>;

    /// Removes every record.
    fn delete_all(&self) -> EngineResult<()>;

    /// Company-wide share of prior-year leave already taken:
    /// `sum(leave_taken_prior_year) / sum(leave_accrued_prior_year)`.
    ///
    /// `None` when there is no employee or nothing was accrued.
    fn aggregate_prior_year_leave_fraction(&self) -> EngineResult<Option<Decimal>>;
}

impl<T: EmployeeStore + ?Sized> EmployeeStore for &T {
    fn find_by_name(&self, name: &str) -> EngineResult<Option<EmployeeRecord>> {
        (**self).find_by_name(name)
    }

    fn save(&self, record: &EmployeeRecord) -> EngineResult<EmployeeRecord> {
        (**self).save(record)
    }

    fn delete_all(&self) -> EngineResult<()> {
        (**self).delete_all()
    }

    fn aggregate_prior_year_leave_fraction(&self) -> EngineResult<Option<Decimal>> {
        (**self).aggregate_prior_year_leave_fraction()
    }
}

impl<T: EmployeeStore + ?Sized> EmployeeStore for Arc<T> {
    fn find_by_name(&self, name: &str) -> EngineResult<Option<EmployeeRecord>> {
        (**self).find_by_name(name)
    }

    fn save(&self, record: &EmployeeRecord) -> EngineResult<EmployeeRecord> {
        (**self).save(record)
    }

    fn delete_all(&self) -> EngineResult<()> {
        (**self).delete_all()
    }

    fn aggregate_prior_year_leave_fraction(&self) -> EngineResult<Option<Decimal>> {
        (**self).aggregate_prior_year_leave_fraction()
    }
}
