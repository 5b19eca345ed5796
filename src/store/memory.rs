//! In-memory employee store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

use super::EmployeeStore;

/// Employee store keeping records in a map guarded by a mutex.
///
/// # Example
///
/// ```
/// use paid_leave_engine::models::EmployeeRecord;
/// use paid_leave_engine::store::{EmployeeStore, InMemoryEmployeeStore};
/// use chrono::NaiveDate;
///
/// let store = InMemoryEmployeeStore::new();
/// let record = EmployeeRecord::new(
///     "Dupont",
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
/// );
/// store.save(&record).unwrap();
///
/// assert_eq!(store.find_by_name("Dupont").unwrap(), Some(record));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: Mutex<BTreeMap<String, EmployeeRecord>>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `records`, keyed by name.
    pub fn with_records(records: impl IntoIterator<Item = EmployeeRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self {
            records: Mutex::new(records),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> EngineResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Returns true if the store holds no record.
    pub fn is_empty(&self) -> EngineResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, BTreeMap<String, EmployeeRecord>>> {
        self.records.lock().map_err(|e| EngineError::Store {
            message: format!("employee map lock poisoned: {}", e),
        })
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn find_by_name(&self, name: &str) -> EngineResult<Option<EmployeeRecord>> {
        Ok(self.lock()?.get(name).cloned())
    }

    fn save(&self, record: &EmployeeRecord) -> EngineResult<EmployeeRecord> {
        let mut records = self.lock()?;
        records.insert(record.name.clone(), record.clone());
        debug!(employee = %record.name, total = records.len(), "Saved employee record");
        Ok(record.clone())
    }

    fn delete_all(&self) -> EngineResult<()> {
        self.lock()?.clear();
        Ok(())
    }

    fn aggregate_prior_year_leave_fraction(&self) -> EngineResult<Option<Decimal>> {
        let records = self.lock()?;
        let (taken, accrued) = records.values().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(taken, accrued), record| {
                (
                    taken + record.leave_taken_prior_year,
                    accrued + record.leave_accrued_prior_year,
                )
            },
        );

        if accrued.is_zero() {
            return Ok(None);
        }
        Ok(taken.checked_div(accrued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_record(name: &str, accrued: i64, taken: i64) -> EmployeeRecord {
        EmployeeRecord {
            leave_accrued_prior_year: Decimal::from(accrued),
            leave_taken_prior_year: Decimal::from(taken),
            ..EmployeeRecord::new(name, date(2020, 1, 1), date(2022, 7, 1))
        }
    }

    #[test]
    fn test_find_missing_employee_returns_none() {
        let store = InMemoryEmployeeStore::new();
        assert_eq!(store.find_by_name("Nobody").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_save_replaces_record_with_same_name() {
        let store = InMemoryEmployeeStore::new();
        store.save(&create_record("Dupont", 30, 0)).unwrap();
        store.save(&create_record("Dupont", 30, 5)).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        let found = store.find_by_name("Dupont").unwrap().unwrap();
        assert_eq!(found.leave_taken_prior_year, Decimal::from(5));
    }

    #[test]
    fn test_delete_all_empties_store() {
        let store = InMemoryEmployeeStore::with_records([
            create_record("Dupont", 30, 0),
            create_record("Martin", 25, 10),
        ]);
        assert_eq!(store.len().unwrap(), 2);

        store.delete_all().unwrap();
        assert!(store.is_empty().unwrap());
    }

    // ==========================================================================
    // Aggregate fraction
    // ==========================================================================
    #[test]
    fn test_aggregate_fraction_over_all_employees() {
        let store = InMemoryEmployeeStore::with_records([
            create_record("Dupont", 30, 6),
            create_record("Martin", 20, 14),
        ]);

        // (6 + 14) / (30 + 20)
        assert_eq!(
            store.aggregate_prior_year_leave_fraction().unwrap(),
            Some(Decimal::new(4, 1))
        );
    }

    #[test]
    fn test_aggregate_fraction_absent_without_employees() {
        let store = InMemoryEmployeeStore::new();
        assert_eq!(store.aggregate_prior_year_leave_fraction().unwrap(), None);
    }

    #[test]
    fn test_aggregate_fraction_absent_without_accrual() {
        let store = InMemoryEmployeeStore::with_records([create_record("Dupont", 0, 0)]);
        assert_eq!(store.aggregate_prior_year_leave_fraction().unwrap(), None);
    }

    #[test]
    fn test_store_usable_through_reference_and_arc() {
        let store = Arc::new(InMemoryEmployeeStore::new());
        let shared = Arc::clone(&store);
        shared.save(&create_record("Dupont", 30, 15)).unwrap();

        let by_ref: &InMemoryEmployeeStore = &store;
        assert!(EmployeeStore::find_by_name(&by_ref, "Dupont").unwrap().is_some());
        assert_eq!(
            EmployeeStore::aggregate_prior_year_leave_fraction(&store).unwrap(),
            Some(Decimal::new(5, 1))
        );
    }
}
