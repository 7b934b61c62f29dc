//! Performance benchmarks for the Payslip Generation Engine.
//!
//! Measures the pure aggregation and calculation paths as well as a full
//! payroll run over the in-memory store at increasing employee counts.
//!
//! Run with: `cargo bench`

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use uuid::Uuid;

use payslip_engine::config::PayrollPolicy;
use payslip_engine::engine::{PayrollEngine, aggregate_activity, compute_pay};
use payslip_engine::models::{
    AttendancePeriod, AttendanceRecord, Employee, OvertimeRecord, ReimbursementClaim,
    RequestContext, Role,
};
use payslip_engine::store::{ActivityStore, InMemoryStore, PeriodStore};

fn weekdays(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count);
    let mut day = start;
    while dates.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(day);
        }
        day += Duration::days(1);
    }
    dates
}

/// Builds one month of activity for the given number of employees:
/// 20 attendance days, a few overtime hours, and one claim each.
fn synthetic_activity(
    employees: usize,
) -> (
    Vec<AttendanceRecord>,
    Vec<OvertimeRecord>,
    Vec<ReimbursementClaim>,
) {
    let start = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    let days = weekdays(start, 20);
    let now = Utc::now();

    let mut attendance = Vec::new();
    let mut overtime = Vec::new();
    let mut reimbursements = Vec::new();

    for _ in 0..employees {
        let employee_id = Uuid::new_v4();
        for date in &days {
            attendance.push(AttendanceRecord {
                id: Uuid::new_v4(),
                employee_id,
                date: *date,
                created_at: now,
            });
        }
        overtime.push(OvertimeRecord {
            id: Uuid::new_v4(),
            employee_id,
            date: days[3],
            hours: 2,
            created_at: now,
        });
        reimbursements.push(ReimbursementClaim {
            id: Uuid::new_v4(),
            employee_id,
            amount: Decimal::from(150_000_i64),
            description: "expenses".to_string(),
            created_at: now,
        });
    }

    (attendance, overtime, reimbursements)
}

fn bench_compute_pay(c: &mut Criterion) {
    let policy = PayrollPolicy::default();
    c.bench_function("compute_pay_single_employee", |b| {
        b.iter(|| {
            compute_pay(
                black_box(Decimal::from(8_000_000_i64)),
                black_box(10),
                black_box(2),
                black_box(Decimal::from(250_000_i64)),
                &policy,
            )
        })
    });
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_activity");
    for employees in [10, 100, 1000] {
        let (attendance, overtime, reimbursements) = synthetic_activity(employees);
        group.throughput(Throughput::Elements(employees as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employees),
            &employees,
            |b, _| {
                b.iter(|| {
                    aggregate_activity(
                        black_box(&attendance),
                        black_box(&overtime),
                        black_box(&reimbursements),
                    )
                })
            },
        );
    }
    group.finish();
}

fn bench_full_payroll_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_payroll");
    group.sample_size(20);

    for employees in [10, 100] {
        group.bench_with_input(
            BenchmarkId::from_parameter(employees),
            &employees,
            |b, &employees| {
                b.iter_batched(
                    || {
                        let store = Arc::new(InMemoryStore::new());
                        let period = AttendancePeriod::new(
                            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                            NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
                            Uuid::new_v4(),
                        )
                        .unwrap();
                        store.insert_period(period.clone()).unwrap();

                        let (attendance, overtime, reimbursements) =
                            synthetic_activity(employees);
                        let mut seen = std::collections::HashSet::new();
                        for record in &attendance {
                            if seen.insert(record.employee_id) {
                                store
                                    .insert_employee(Employee {
                                        id: record.employee_id,
                                        username: "bench".to_string(),
                                        monthly_salary: Decimal::from(8_000_000_i64),
                                        role: Role::Employee,
                                    })
                                    .unwrap();
                            }
                        }
                        for record in attendance {
                            store.insert_attendance(record).unwrap();
                        }
                        for record in overtime {
                            store.insert_overtime(record).unwrap();
                        }
                        for claim in reimbursements {
                            store.insert_reimbursement(claim).unwrap();
                        }

                        let engine = PayrollEngine::new(store, PayrollPolicy::default());
                        (engine, period.id)
                    },
                    |(engine, period_id)| {
                        let ctx = RequestContext::new(
                            Uuid::new_v4(),
                            Role::Admin,
                            "bench",
                            "bench-run",
                        );
                        engine.process_payroll(black_box(period_id), &ctx).unwrap()
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_compute_pay,
    bench_aggregation,
    bench_full_payroll_run
);
criterion_main!(benches);
