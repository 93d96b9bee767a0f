//! Simulated wallet connection.
//!
//! No real wallet or chain is contacted: `connect` waits a fixed delay and
//! then reports a mock address. State transitions are serialized through a
//! mutex, and a second `connect`/`disconnect` issued while a connection is in
//! flight is rejected with [`CoreError::WalletBusy`].

use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tracing::{debug, info};

use crate::{CoreError, CoreResult};

pub const MOCK_WALLET_ADDRESS: &str = "ST1MOCKWALLET123456789ABCDEFGHIJKLMNOPQRST";
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
}

#[derive(Debug)]
pub struct WalletSession {
    state: Mutex<WalletState>,
    delay: Duration,
    mock_address: String,
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_DELAY, MOCK_WALLET_ADDRESS)
    }
}

impl WalletSession {
    pub fn new(delay: Duration, mock_address: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(WalletState::Disconnected),
            delay,
            mock_address: mock_address.into(),
        }
    }

    pub fn state(&self) -> WalletState {
        self.lock().clone()
    }

    pub fn is_connected(&self) -> bool {
        matches!(*self.lock(), WalletState::Connected { .. })
    }

    /// `true` while a connection attempt is waiting out its delay.
    pub fn is_loading(&self) -> bool {
        matches!(*self.lock(), WalletState::Connecting)
    }

    pub fn address(&self) -> Option<String> {
        match &*self.lock() {
            WalletState::Connected { address } => Some(address.clone()),
            _ => None,
        }
    }

    /// Connects after the configured delay and returns the mock address.
    /// Already-connected sessions return their address immediately.
    pub async fn connect(&self) -> CoreResult<String> {
        {
            let mut state = self.lock();
            match *state {
                WalletState::Connecting => return Err(CoreError::WalletBusy),
                WalletState::Connected { ref address } => return Ok(address.clone()),
                WalletState::Disconnected => *state = WalletState::Connecting,
            }
        }
        debug!(delay_ms = self.delay.as_millis() as u64, "connecting wallet");

        // Dropping the future mid-delay must not leave the session stuck in `Connecting`.
        let mut guard = ConnectingGuard {
            session: self,
            armed: true,
        };
        tokio::time::sleep(self.delay).await;

        let address = self.mock_address.clone();
        *self.lock() = WalletState::Connected {
            address: address.clone(),
        };
        guard.armed = false;
        info!(%address, "wallet connected");
        Ok(address)
    }

    pub fn disconnect(&self) -> CoreResult<()> {
        let mut state = self.lock();
        if *state == WalletState::Connecting {
            return Err(CoreError::WalletBusy);
        }
        *state = WalletState::Disconnected;
        info!("wallet disconnected");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, WalletState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct ConnectingGuard<'a> {
    session: &'a WalletSession,
    armed: bool,
}

impl Drop for ConnectingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            *self.session.lock() = WalletState::Disconnected;
        }
    }
}
