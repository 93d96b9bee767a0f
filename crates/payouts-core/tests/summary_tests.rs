use chrono::NaiveDate;
use payouts_core::{
    seed::{self, ELENA_MARTINEZ_ADDRESS, SARAH_SMITH_ADDRESS},
    FixedClock, LedgerService, SummaryService,
};
use payouts_domain::{Amount, PayoutLedger, PayoutStatus};

fn clock() -> FixedClock {
    FixedClock::on(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap())
}

fn amount(raw: &str) -> Amount {
    raw.parse().unwrap()
}

#[test]
fn dashboard_reflects_seed_data() {
    let ledger = seed::sample_ledger(&clock());
    let stats = SummaryService::dashboard(&ledger);

    assert_eq!(stats.active_teachers, 3);
    assert_eq!(stats.total_teachers, 3);
    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.total_enrollments, 4);
    assert_eq!(stats.total_paid, amount("0.1"));
    assert_eq!(stats.pending_amount, Amount::ZERO);
    assert_eq!(stats.completed_payouts, 1);
    assert_eq!(stats.completion_rate, 25);
}

#[test]
fn dashboard_on_empty_ledger_has_zero_rate() {
    let stats = SummaryService::dashboard(&PayoutLedger::new());
    assert_eq!(stats.completion_rate, 0);
    assert_eq!(stats.total_paid, Amount::ZERO);
}

#[test]
fn payout_analytics_split_by_status() {
    let mut ledger = seed::sample_ledger(&clock());
    for course in ["A", "B"] {
        LedgerService::record_completion(
            &mut ledger,
            SARAH_SMITH_ADDRESS,
            "ST0GHOST",
            course,
            &clock(),
        )
        .unwrap();
    }
    let mut pending = ledger.payouts[0].clone();
    pending.id = uuid::Uuid::new_v4();
    pending.status = PayoutStatus::Pending;
    ledger.prepend_payout(pending);
    let mut failed = ledger.payouts[1].clone();
    failed.id = uuid::Uuid::new_v4();
    failed.status = PayoutStatus::Failed;
    ledger.prepend_payout(failed);

    let analytics = SummaryService::payout_analytics(&ledger);
    assert_eq!(analytics.successful, 3);
    assert_eq!(analytics.pending, 1);
    assert_eq!(analytics.failed, 1);
    assert_eq!(analytics.total_paid, amount("0.3"));
    assert_eq!(analytics.pending_amount, amount("0.1"));
    assert_eq!(analytics.average_per_completion, amount("0.1"));
    assert_eq!(analytics.total_transactions, 5);
    assert_eq!(analytics.success_rate, 75);
}

#[test]
fn success_rate_is_zero_without_settled_payouts() {
    let mut ledger = PayoutLedger::new();
    let analytics = SummaryService::payout_analytics(&ledger);
    assert_eq!(analytics.total_transactions, 0);
    assert_eq!(analytics.success_rate, 0);

    let mut pending = seed::sample_ledger(&clock()).payouts.remove(0);
    pending.status = PayoutStatus::Pending;
    ledger.prepend_payout(pending);

    let analytics = SummaryService::payout_analytics(&ledger);
    assert_eq!(analytics.total_transactions, 1);
    assert_eq!(analytics.success_rate, 0);
}

#[test]
fn recent_completions_are_newest_first_and_limited() {
    let mut ledger = seed::sample_ledger(&clock());
    for course in ["One", "Two", "Three"] {
        LedgerService::record_completion(
            &mut ledger,
            ELENA_MARTINEZ_ADDRESS,
            "ST0GHOST",
            course,
            &clock(),
        )
        .unwrap();
    }

    let recent = SummaryService::recent_completions(&ledger, 2);
    let courses: Vec<_> = recent.iter().map(|entry| entry.course.as_str()).collect();
    assert_eq!(courses, ["Three", "Two"]);
}

#[test]
fn top_teachers_rank_by_earnings_without_reordering_ledger() {
    let mut ledger = seed::sample_ledger(&clock());
    let original_order: Vec<_> = ledger.teachers.iter().map(|t| t.id).collect();
    for course in 0..20 {
        LedgerService::record_completion(
            &mut ledger,
            ELENA_MARTINEZ_ADDRESS,
            "ST0GHOST",
            &format!("Course {course}"),
            &clock(),
        )
        .unwrap();
    }

    let top = SummaryService::top_teachers(&ledger, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].name, "Dr. Elena Martinez");
    assert_eq!(top[0].earnings, amount("5.2"));
    assert_eq!(top[0].completions, 52);
    assert_eq!(top[1].name, "Dr. Sarah Smith");

    let order: Vec<_> = ledger.teachers.iter().map(|t| t.id).collect();
    assert_eq!(order, original_order);
}

#[test]
fn searches_are_case_insensitive() {
    let ledger = seed::sample_ledger(&clock());

    let teachers = SummaryService::search_teachers(&ledger, "PHYSICS");
    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].name, "Dr. Elena Martinez");

    let students = SummaryService::search_students(&ledger, "student2");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Bob Wilson");

    let payouts = SummaryService::search_payouts(&ledger, "advanced");
    assert_eq!(payouts.len(), 1);
    assert!(SummaryService::search_payouts(&ledger, "chemistry").is_empty());

    assert_eq!(SummaryService::search_teachers(&ledger, "").len(), 3);
}
