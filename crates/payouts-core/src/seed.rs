//! Sample records the dashboard starts with.

use chrono::NaiveDate;
use uuid::Uuid;

use payouts_domain::{
    Amount, Enrollment, Payout, PayoutLedger, PayoutStatus, Student, Teacher, TeacherStatus,
    TxHash, COMPLETION_PAYOUT,
};

use crate::time::Clock;

pub const SARAH_SMITH_ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";
pub const MICHAEL_DAVIS_ADDRESS: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK0QH";
pub const ELENA_MARTINEZ_ADDRESS: &str = "ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5N7R21XCP";
pub const ALICE_JOHNSON_ADDRESS: &str = "ST1STUDENT1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJS";
pub const BOB_WILSON_ADDRESS: &str = "ST2STUDENT2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4C";

const SAMPLE_TX_HASH: &str = "0x1234567890abcdef1234567890abcdef12345678";

/// Builds a ledger holding three teachers, two students and one payout.
/// The sample payout is stamped with `clock.now()`.
pub fn sample_ledger(clock: &dyn Clock) -> PayoutLedger {
    let mut ledger = PayoutLedger::new();

    ledger.add_teacher(teacher(
        "Dr. Sarah Smith",
        SARAH_SMITH_ADDRESS,
        "Mathematics",
        date(2024, 1, 15),
        ("4.5", 45, 89, "10.0"),
    ));
    ledger.add_teacher(teacher(
        "Prof. Michael Davis",
        MICHAEL_DAVIS_ADDRESS,
        "Computer Science",
        date(2024, 2, 1),
        ("3.8", 38, 92, "8.5"),
    ));
    ledger.add_teacher(teacher(
        "Dr. Elena Martinez",
        ELENA_MARTINEZ_ADDRESS,
        "Physics",
        date(2024, 1, 20),
        ("3.2", 32, 85, "6.8"),
    ));

    ledger.add_student(
        Student::new("Alice Johnson", ALICE_JOHNSON_ADDRESS, date(2024, 1, 10))
            .with_enrollment(Enrollment::completed(
                "Dr. Sarah Smith",
                "Advanced Mathematics",
                date(2024, 1, 20),
            ))
            .with_enrollment(Enrollment::in_progress(
                "Prof. Michael Davis",
                "Computer Science",
            ))
            .with_total_completions(3),
    );
    ledger.add_student(
        Student::new("Bob Wilson", BOB_WILSON_ADDRESS, date(2024, 1, 15))
            .with_enrollment(Enrollment::completed(
                "Prof. Michael Davis",
                "Programming Fundamentals",
                date(2024, 1, 25),
            ))
            .with_enrollment(Enrollment::in_progress("Dr. Elena Martinez", "Physics 101"))
            .with_total_completions(2),
    );

    ledger.prepend_payout(Payout {
        id: Uuid::new_v4(),
        teacher: "Dr. Sarah Smith".into(),
        teacher_address: SARAH_SMITH_ADDRESS.into(),
        student: "Alice Johnson".into(),
        student_address: ALICE_JOHNSON_ADDRESS.into(),
        course: "Advanced Mathematics".into(),
        amount: COMPLETION_PAYOUT,
        status: PayoutStatus::Completed,
        timestamp: clock.now(),
        tx_hash: Some(TxHash::simulated(SAMPLE_TX_HASH)),
    });

    ledger
}

fn teacher(
    name: &str,
    address: &str,
    subject: &str,
    registered_date: NaiveDate,
    (earnings, completed, rate, balance): (&str, u32, u8, &str),
) -> Teacher {
    Teacher {
        id: Uuid::new_v4(),
        name: name.into(),
        address: address.into(),
        subject: subject.into(),
        registered_date,
        total_earnings: sample_amount(earnings),
        students_completed: completed,
        completion_rate: rate,
        status: TeacherStatus::Active,
        balance: sample_amount(balance),
    }
}

fn sample_amount(raw: &str) -> Amount {
    raw.parse().unwrap_or_default()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
