//! Immutable payout records produced by recorded completions.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{amount::Amount, common::*};

/// Fixed amount paid to a teacher for each recorded completion (`0.1`).
pub const COMPLETION_PAYOUT: Amount = Amount::from_decimal(Decimal::from_parts(1, 0, 0, false, 1));

/// Student name recorded when the student address has no matching record.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub id: Uuid,
    pub teacher: String,
    pub teacher_address: String,
    pub student: String,
    pub student_address: String,
    pub course: String,
    pub amount: Amount,
    pub status: PayoutStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<TxHash>,
}

impl Identifiable for Payout {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Payout {
    fn display_label(&self) -> String {
        format!(
            "{} -> {} for {} ({} STX, {})",
            self.student, self.teacher, self.course, self.amount, self.status
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PayoutStatus {
    Completed,
    Pending,
    Failed,
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayoutStatus::Completed => "completed",
            PayoutStatus::Pending => "pending",
            PayoutStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Simulated transaction reference. It is display text only: it is not
/// derived from any payload and identifies nothing on a real chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    /// Number of hex characters following the `0x` prefix.
    pub const HEX_LEN: usize = 40;

    /// Wraps pre-rendered text such as `0x1234...`.
    pub fn simulated(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_payout_is_one_tenth() {
        assert_eq!(COMPLETION_PAYOUT, "0.1".parse::<Amount>().unwrap());
        assert_eq!(COMPLETION_PAYOUT.to_string(), "0.1");
    }

    #[test]
    fn missing_tx_hash_is_omitted_from_json() {
        let payout = Payout {
            id: Uuid::new_v4(),
            teacher: "T".into(),
            teacher_address: "ST1T".into(),
            student: UNKNOWN_STUDENT.into(),
            student_address: "ST1S".into(),
            course: "Course".into(),
            amount: COMPLETION_PAYOUT,
            status: PayoutStatus::Pending,
            timestamp: Utc::now(),
            tx_hash: None,
        };
        let json = serde_json::to_string(&payout).unwrap();
        assert!(!json.contains("tx_hash"));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(json.contains("\"amount\":\"0.1\""));
    }
}
