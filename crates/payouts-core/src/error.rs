use payouts_domain::Amount;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Teacher not found: {0}")]
    TeacherNotFound(String),
    #[error("Student not found: {0}")]
    StudentNotFound(String),
    #[error("Insufficient balance for {teacher}: {balance} available, {required} required")]
    InsufficientBalance {
        teacher: String,
        balance: Amount,
        required: Amount,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Wallet connection already in progress")]
    WalletBusy,
}
