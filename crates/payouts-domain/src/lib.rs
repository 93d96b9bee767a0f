//! payouts-domain
//!
//! Pure domain models (Teacher, Student, Payout, PayoutLedger).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod amount;
pub mod common;
pub mod ledger;
pub mod payout;
pub mod student;
pub mod teacher;

pub use amount::*;
pub use common::*;
pub use ledger::*;
pub use payout::*;
pub use student::*;
pub use teacher::*;
