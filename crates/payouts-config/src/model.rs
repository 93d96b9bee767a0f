use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Stores user-configurable shell preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_label")]
    pub currency_label: String,
    #[serde(default = "Config::default_wallet_connect_delay_ms")]
    pub wallet_connect_delay_ms: u64,
    #[serde(default = "Config::default_mock_wallet_address")]
    pub mock_wallet_address: String,
    /// Start the shell with the sample teachers, students and payout.
    #[serde(default = "Config::default_true")]
    pub seed_sample_data: bool,
    #[serde(default = "Config::default_true")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_recent_activity_limit")]
    pub recent_activity_limit: usize,
    #[serde(default = "Config::default_top_teacher_limit")]
    pub top_teacher_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_label: Self::default_currency_label(),
            wallet_connect_delay_ms: Self::default_wallet_connect_delay_ms(),
            mock_wallet_address: Self::default_mock_wallet_address(),
            seed_sample_data: true,
            ui_color_enabled: true,
            recent_activity_limit: Self::default_recent_activity_limit(),
            top_teacher_limit: Self::default_top_teacher_limit(),
        }
    }
}

impl Config {
    pub fn default_currency_label() -> String {
        "STX".into()
    }

    pub fn default_wallet_connect_delay_ms() -> u64 {
        1500
    }

    pub fn default_mock_wallet_address() -> String {
        "ST1MOCKWALLET123456789ABCDEFGHIJKLMNOPQRST".into()
    }

    pub fn default_recent_activity_limit() -> usize {
        5
    }

    pub fn default_top_teacher_limit() -> usize {
        3
    }

    fn default_true() -> bool {
        true
    }

    pub fn wallet_connect_delay(&self) -> Duration {
        Duration::from_millis(self.wallet_connect_delay_ms)
    }
}
