#![doc(test(attr(deny(warnings))))]

//! Teacher Payouts keeps an in-memory ledger of teachers, students and
//! completion payouts, and drives it from an interactive command shell.

pub mod app;
pub mod cli;
pub mod errors;
pub mod utils;

pub use app::PayoutsApp;
pub use errors::{AppError, CliError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Teacher Payouts tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
