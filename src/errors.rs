use std::io;

use payouts_config::ConfigError;
use payouts_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Unified error type for the service and configuration layers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors that end the shell session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::App(AppError::from(err))
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::App(AppError::from(err))
    }
}
