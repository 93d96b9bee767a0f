//! payouts-core
//!
//! Store operations, caller-side validation and dashboard aggregation for
//! the teacher payout ledger. Depends on payouts-domain. No CLI, no terminal I/O.

pub mod completion_service;
pub mod error;
pub mod ledger_service;
pub mod seed;
pub mod summary_service;
pub mod teacher_service;
pub mod time;
pub mod wallet;

pub use completion_service::*;
pub use error::CoreError;
pub use ledger_service::*;
pub use summary_service::*;
pub use teacher_service::*;
pub use time::{Clock, FixedClock, SystemClock};
pub use wallet::*;

pub type CoreResult<T> = Result<T, CoreError>;
