//! Performance benchmarks for the Paid Leave Engine.
//!
//! This benchmark suite covers the hot paths of a leave request:
//! - Chargeable-day counting over ranges of growing length
//! - Company limit computation
//! - A full leave request against the in-memory store
//! - Closing a year of months for a batch of employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use paid_leave_engine::accounting::{
    CompanyLimitInputs, LeaveAccountingEngine, compute_company_limit,
};
use paid_leave_engine::config::LeavePolicy;
use paid_leave_engine::models::EmployeeRecord;
use paid_leave_engine::store::{EmployeeStore, InMemoryEmployeeStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Creates an eligible employee with a full prior-year balance.
fn create_record(name: &str) -> EmployeeRecord {
    EmployeeRecord {
        days_worked_prior_year: Decimal::from(220),
        leave_accrued_prior_year: Decimal::from(30),
        ..EmployeeRecord::new(name, date(2015, 1, 1), date(2022, 6, 1))
    }
}

/// Benchmark: chargeable days for ranges from one week to a full leave year.
fn bench_chargeable_days(c: &mut Criterion) {
    let record = create_record("Dupont");
    let start = date(2022, 6, 6);

    let mut group = c.benchmark_group("chargeable_days");
    for span in [7i64, 31, 92, 365].iter() {
        group.throughput(Throughput::Elements(*span as u64));
        group.bench_with_input(BenchmarkId::from_parameter(span), span, |b, &span| {
            let end = start + Duration::days(span - 1);
            b.iter(|| {
                black_box(
                    record
                        .chargeable_days_for_range(black_box(start), black_box(end))
                        .expect("supported year"),
                )
            })
        });
    }
    group.finish();
}

/// Benchmark: company limit computation alone.
fn bench_company_limit(c: &mut Criterion) {
    let policy = LeavePolicy::default();
    let inputs = CompanyLimitInputs {
        current_month: date(2022, 6, 1),
        leave_accrued_prior_year: Decimal::from(30),
        contract_start_month: date(2015, 1, 1),
        first_leave_day: date(2022, 7, 11),
        last_leave_day: date(2022, 7, 23),
    };

    c.bench_function("company_limit", |b| {
        b.iter(|| {
            black_box(compute_company_limit(
                black_box(&inputs),
                Some(Decimal::new(35, 2)),
                &policy,
                1,
            ))
        })
    });
}

/// Benchmark: a full leave request, including validation, audit trace and save.
fn bench_add_leave(c: &mut Criterion) {
    let engine = LeaveAccountingEngine::new(InMemoryEmployeeStore::new(), LeavePolicy::default());
    let record = create_record("Dupont");
    engine.store().save(&record).expect("save");

    c.bench_function("add_leave", |b| {
        b.iter(|| {
            let mut working = record.clone();
            black_box(
                engine
                    .add_leave(&mut working, date(2022, 7, 11), date(2022, 7, 16))
                    .expect("leave granted"),
            )
        })
    });
}

/// Benchmark: closing twelve months for a batch of employees.
fn bench_close_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("close_year");
    group.sample_size(20);

    for employees in [10usize, 100].iter() {
        group.throughput(Throughput::Elements(*employees as u64 * 12));
        group.bench_with_input(
            BenchmarkId::from_parameter(employees),
            employees,
            |b, &employees| {
                b.iter(|| {
                    let engine = LeaveAccountingEngine::new(
                        InMemoryEmployeeStore::new(),
                        LeavePolicy::default(),
                    );
                    let mut records: Vec<EmployeeRecord> = (0..employees)
                        .map(|i| create_record(&format!("employee_{}", i)))
                        .collect();
                    for record in records.iter_mut() {
                        for _ in 0..12 {
                            engine
                                .close_month(record, Decimal::from(20))
                                .expect("month closed");
                        }
                    }
                    black_box(records)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_chargeable_days,
    bench_company_limit,
    bench_add_leave,
    bench_close_year
);

criterion_main!(benches);
