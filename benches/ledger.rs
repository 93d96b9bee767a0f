use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use payouts_core::{seed, FixedClock, LedgerService, SummaryService};
use payouts_domain::{Amount, NewTeacher, PayoutLedger, Student};

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
}

fn build_ledger(teachers: usize, students: usize) -> PayoutLedger {
    let clock = clock();
    let mut ledger = seed::sample_ledger(&clock);
    for idx in 0..teachers {
        LedgerService::register_teacher(
            &mut ledger,
            NewTeacher::new(
                format!("Teacher {idx}"),
                format!("ST1TEACHER{idx:06}"),
                "Benchmarks",
                Amount::new(1_000_000, 1),
            ),
            &clock,
        );
    }
    let joined = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for idx in 0..students {
        ledger.add_student(Student::new(
            format!("Student {idx}"),
            format!("ST1STUDENT{idx:06}"),
            joined,
        ));
    }
    ledger
}

fn bench_record_completion(c: &mut Criterion) {
    let ledger = build_ledger(1_000, 1_000);
    let clock = clock();

    c.bench_function("record_completion_1k", |b| {
        b.iter_batched(
            || ledger.clone(),
            |mut ledger| {
                LedgerService::record_completion(
                    &mut ledger,
                    black_box("ST1TEACHER000999"),
                    black_box("ST1STUDENT000999"),
                    "Load Testing 101",
                    &clock,
                )
                .expect("teacher exists")
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_dashboard(c: &mut Criterion) {
    let mut ledger = build_ledger(100, 100);
    let clock = clock();
    for idx in 0..5_000 {
        LedgerService::record_completion(
            &mut ledger,
            &format!("ST1TEACHER{:06}", idx % 100),
            &format!("ST1STUDENT{:06}", idx % 100),
            &format!("Course {}", idx % 7),
            &clock,
        )
        .expect("teacher exists");
    }

    c.bench_function("dashboard_5k_payouts", |b| {
        b.iter(|| SummaryService::dashboard(black_box(&ledger)))
    });
}

criterion_group!(benches, bench_record_completion, bench_dashboard);
criterion_main!(benches);
