//! Domain models for registered teachers.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{amount::Amount, common::*};

/// Offset in the completion-rate formula `n / (n + 5)`.
pub const COMPLETION_RATE_SMOOTHING: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub subject: String,
    pub registered_date: NaiveDate,
    pub total_earnings: Amount,
    pub students_completed: u32,
    /// Percentage in `0..=100`.
    pub completion_rate: u8,
    pub status: TeacherStatus,
    pub balance: Amount,
}

impl Teacher {
    /// Creates an active teacher with no earnings or completions yet.
    pub fn register(details: NewTeacher, registered_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: details.name,
            address: details.address,
            subject: details.subject,
            registered_date,
            total_earnings: Amount::ZERO,
            students_completed: 0,
            completion_rate: 0,
            status: TeacherStatus::Active,
            balance: details.balance,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TeacherStatus::Active
    }

    /// Adds `amount` to the balance and returns the new balance.
    /// Returns `None` and leaves the teacher untouched on overflow.
    pub fn credit(&mut self, amount: Amount) -> Option<Amount> {
        self.balance = self.balance.checked_add(amount)?;
        Some(self.balance)
    }

    /// Books one completion payout. The balance is not floored at zero.
    /// Returns `None` and leaves the teacher untouched on overflow.
    pub fn apply_payout(&mut self, amount: Amount) -> Option<()> {
        let total_earnings = self.total_earnings.checked_add(amount)?;
        let balance = self.balance.checked_sub(amount)?;
        let students_completed = self.students_completed.checked_add(1)?;

        self.total_earnings = total_earnings;
        self.balance = balance;
        self.students_completed = students_completed;
        self.completion_rate = completion_rate(students_completed);
        Some(())
    }
}

/// `round(completed / (completed + 5) * 100)`, rounding halves up.
pub fn completion_rate(completed: u32) -> u8 {
    let n = u64::from(completed);
    let denominator = n + u64::from(COMPLETION_RATE_SMOOTHING);
    let rate = (200 * n + denominator) / (2 * denominator);
    rate.min(100) as u8
}

impl Identifiable for Teacher {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Addressed for Teacher {
    fn address(&self) -> &str {
        &self.address
    }
}

impl Displayable for Teacher {
    fn display_label(&self) -> String {
        format!("{} ({}) [{}]", self.name, self.subject, self.status)
    }
}

/// Caller-supplied fields for a new registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTeacher {
    pub name: String,
    pub address: String,
    pub subject: String,
    pub balance: Amount,
}

impl NewTeacher {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        subject: impl Into<String>,
        balance: Amount,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            subject: subject.into(),
            balance,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeacherStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for TeacherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TeacherStatus::Active => "active",
            TeacherStatus::Inactive => "inactive",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Teacher {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Teacher::register(
            NewTeacher::new("Dr. Test", "ST1TEST", "Maths", "1.0".parse().unwrap()),
            date,
        )
    }

    #[test]
    fn register_starts_active_and_empty() {
        let teacher = sample();
        assert!(teacher.is_active());
        assert_eq!(teacher.total_earnings, Amount::ZERO);
        assert_eq!(teacher.students_completed, 0);
        assert_eq!(teacher.completion_rate, 0);
        assert_eq!(teacher.balance.to_string(), "1.0");
    }

    #[test]
    fn completion_rate_matches_formula() {
        assert_eq!(completion_rate(0), 0);
        assert_eq!(completion_rate(1), 17);
        assert_eq!(completion_rate(5), 50);
        assert_eq!(completion_rate(45), 90);
        assert_eq!(completion_rate(46), 90);
        assert_eq!(completion_rate(95), 95);
    }

    #[test]
    fn apply_payout_allows_negative_balance() {
        let mut teacher = sample();
        let payout: Amount = "1.5".parse().unwrap();
        teacher.apply_payout(payout).unwrap();
        assert_eq!(teacher.balance.to_string(), "-0.5");
        assert_eq!(teacher.total_earnings, payout);
        assert_eq!(teacher.students_completed, 1);
        assert_eq!(teacher.completion_rate, 17);
    }

    #[test]
    fn overflowing_credit_leaves_teacher_untouched() {
        let mut teacher = sample();
        teacher.balance = "79228162514264337593543950335".parse().unwrap();
        let before = teacher.clone();

        assert_eq!(teacher.credit("1".parse().unwrap()), None);
        assert_eq!(teacher, before);
    }

    #[test]
    fn overflowing_payout_leaves_teacher_untouched() {
        let mut teacher = sample();
        teacher.balance = "-79228162514264337593543950335".parse().unwrap();
        let before = teacher.clone();

        assert_eq!(teacher.apply_payout("0.1".parse().unwrap()), None);
        assert_eq!(teacher, before);
    }
}
