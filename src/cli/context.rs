//! Shell state, dispatch and error reporting.

use std::io;

use chrono::{DateTime, NaiveDate, Utc};
use payouts_config::{Config, ConfigManager};
use payouts_core::CoreError;
use payouts_domain::Amount;
use strsim::levenshtein;
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

use crate::app::PayoutsApp;
use crate::cli::commands;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] payouts_config::ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub struct ShellContext {
    pub(crate) app: PayoutsApp,
    pub(crate) registry: CommandRegistry,
    pub(crate) running: bool,
    config_manager: ConfigManager,
    runtime: Runtime,
}

impl ShellContext {
    /// Loads preferences from the config home and builds a fresh app.
    pub fn new() -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let config = config_manager.load()?;
        let app = PayoutsApp::from_config(config);
        Self::with_app(app, config_manager)
    }

    pub fn with_app(app: PayoutsApp, config_manager: ConfigManager) -> Result<Self, CliError> {
        output::set_preferences(OutputPreferences {
            color_enabled: app.config().ui_color_enabled,
        });
        let runtime = Builder::new_current_thread().enable_time().build()?;
        let mut registry = CommandRegistry::new();
        for entry in commands::all_definitions() {
            registry.register(entry);
        }
        Ok(Self {
            app,
            registry,
            running: true,
            config_manager,
            runtime,
        })
    }

    pub fn app(&self) -> &PayoutsApp {
        &self.app
    }

    pub(crate) fn config(&self) -> &Config {
        self.app.config()
    }

    pub(crate) fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub(crate) fn prompt(&self) -> String {
        match self.app.wallet().address() {
            Some(address) => format!("payouts [{}]> ", abbreviate(&address)),
            None => "payouts> ".to_string(),
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn format_amount(&self, amount: Amount) -> String {
        format!("{} {}", amount, self.config().currency_label)
    }

    /// Aggregates are shown to one decimal place.
    pub(crate) fn format_total(&self, amount: Amount) -> String {
        self.format_amount(amount.to_tenths())
    }

    pub(crate) fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    pub(crate) fn format_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Applies a single `key=value` change and persists it.
    pub(crate) fn set_config_value(&mut self, key: &str, value: &str) -> CommandResult {
        let mut config = self.config().clone();
        match key {
            "currency_label" => config.currency_label = value.to_string(),
            "mock_wallet_address" => config.mock_wallet_address = value.to_string(),
            "wallet_connect_delay_ms" => config.wallet_connect_delay_ms = parse_value(key, value)?,
            "seed_sample_data" => config.seed_sample_data = parse_value(key, value)?,
            "ui_color_enabled" => config.ui_color_enabled = parse_value(key, value)?,
            "recent_activity_limit" => config.recent_activity_limit = parse_value(key, value)?,
            "top_teacher_limit" => config.top_teacher_limit = parse_value(key, value)?,
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "Unknown config key `{}`",
                    other
                )))
            }
        }
        self.config_manager.save(&config)?;
        output::set_preferences(OutputPreferences {
            color_enabled: config.ui_color_enabled,
        });
        self.app.replace_config(config);
        tracing::info!(key, value, "config updated");
        Ok(())
    }

    pub(crate) fn config_path_display(&self) -> String {
        self.config_manager.config_path().display().to_string()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and dispatches one input line.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match shell_words::split(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(CoreError::TeacherNotFound(address)) => {
                output::error(format!("Teacher not found: {}", address));
                output::hint("Use `teachers` to list registered addresses.");
            }
            other => output::error(other),
        }
    }
}

/// Requires exactly `count` arguments; quote values that contain spaces.
pub(crate) fn require_args<'a>(
    args: &[&'a str],
    count: usize,
    usage: &str,
) -> Result<Vec<&'a str>, CommandError> {
    if args.len() != count {
        return Err(CommandError::InvalidArguments(format!("Usage: {}", usage)));
    }
    Ok(args.to_vec())
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("Invalid value `{}` for `{}`", value, key))
    })
}

/// Shortens long addresses to `ST1MOC...QRST`.
pub(crate) fn abbreviate(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
