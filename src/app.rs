//! Explicitly constructed application state shared by the shell commands.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use payouts_config::Config;
use payouts_core::{seed, Clock, SystemClock, WalletSession};
use payouts_domain::PayoutLedger;

/// Owns the payout ledger, the simulated wallet session and the clock.
///
/// Ledger access goes through an `RwLock` so every mutation observes and
/// leaves a consistent ledger even if the app is shared across threads.
#[derive(Clone)]
pub struct PayoutsApp {
    ledger: Arc<RwLock<PayoutLedger>>,
    wallet: Arc<WalletSession>,
    clock: Arc<dyn Clock>,
    config: Config,
}

impl PayoutsApp {
    pub fn new(ledger: PayoutLedger, config: Config, clock: Arc<dyn Clock>) -> Self {
        let wallet = WalletSession::new(
            config.wallet_connect_delay(),
            config.mock_wallet_address.clone(),
        );
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            wallet: Arc::new(wallet),
            clock,
            config,
        }
    }

    /// Builds the app with the system clock, seeding sample data when configured.
    pub fn from_config(config: Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let ledger = if config.seed_sample_data {
            seed::sample_ledger(clock.as_ref())
        } else {
            PayoutLedger::new()
        };
        Self::new(ledger, config, clock)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Swaps in new preferences. Wallet settings apply from the next start.
    pub fn replace_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn wallet(&self) -> &WalletSession {
        self.wallet.as_ref()
    }

    pub fn ledger(&self) -> RwLockReadGuard<'_, PayoutLedger> {
        self.ledger.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` against the ledger together with the app clock.
    pub fn with_ledger_mut<T>(&self, f: impl FnOnce(&mut PayoutLedger, &dyn Clock) -> T) -> T {
        let mut guard: RwLockWriteGuard<'_, PayoutLedger> =
            self.ledger.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard, self.clock.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_respects_seed_flag() {
        let seeded = PayoutsApp::from_config(Config::default());
        assert_eq!(seeded.ledger().teachers.len(), 3);

        let config = Config {
            seed_sample_data: false,
            ..Config::default()
        };
        let empty = PayoutsApp::from_config(config);
        assert!(empty.ledger().teachers.is_empty());
        assert!(empty.ledger().payouts.is_empty());
    }

    #[test]
    fn clones_share_one_ledger() {
        let app = PayoutsApp::from_config(Config::default());
        let other = app.clone();
        app.with_ledger_mut(|ledger, _| ledger.payouts.clear());
        assert!(other.ledger().payouts.is_empty());
    }
}
