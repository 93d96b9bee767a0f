use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use payouts_config::Config;
use payouts_core::{seed, CompletionRequest, CompletionService, FixedClock, SummaryService};
use teacher_payouts::PayoutsApp;

fn app() -> PayoutsApp {
    let clock = Arc::new(FixedClock::on(
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
    ));
    let config = Config {
        wallet_connect_delay_ms: 0,
        ..Config::default()
    };
    PayoutsApp::new(seed::sample_ledger(clock.as_ref()), config, clock)
}

#[test]
fn concurrent_completions_keep_balances_consistent() {
    let app = app();
    let handles: Vec<_> = (0..8)
        .map(|idx| {
            let app = app.clone();
            thread::spawn(move || {
                app.with_ledger_mut(|ledger, clock| {
                    let request = CompletionRequest::new(
                        seed::MICHAEL_DAVIS_ADDRESS,
                        seed::BOB_WILSON_ADDRESS,
                        format!("Course {idx}"),
                    );
                    CompletionService::record(ledger, request, clock)
                })
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let ledger = app.ledger();
    let davis = ledger
        .teacher_by_address(seed::MICHAEL_DAVIS_ADDRESS)
        .unwrap();
    assert_eq!(davis.balance.to_string(), "7.7");
    assert_eq!(davis.total_earnings.to_string(), "4.6");
    assert_eq!(davis.students_completed, 46);
    assert_eq!(ledger.payouts.len(), 9);

    let bob = ledger.student_by_address(seed::BOB_WILSON_ADDRESS).unwrap();
    assert_eq!(bob.enrolled_courses.len(), 2 + 8);
}

#[tokio::test]
async fn wallet_is_shared_between_clones() {
    let app = app();
    let other = app.clone();

    let address = app.wallet().connect().await.unwrap();
    assert_eq!(other.wallet().address(), Some(address));

    other.wallet().disconnect().unwrap();
    assert!(!app.wallet().is_connected());
}

#[test]
fn dashboard_reflects_completions() {
    let app = app();
    app.with_ledger_mut(|ledger, clock| {
        CompletionService::record(
            ledger,
            CompletionRequest::new(
                seed::ELENA_MARTINEZ_ADDRESS,
                seed::ALICE_JOHNSON_ADDRESS,
                "Quantum Physics",
            ),
            clock,
        )
    })
    .unwrap();

    let stats = SummaryService::dashboard(&app.ledger());
    assert_eq!(stats.completed_payouts, 2);
    assert_eq!(stats.total_paid.to_string(), "0.2");
    assert_eq!(stats.total_enrollments, 5);
    assert_eq!(stats.completion_rate, 40);
}
