pub mod commands;
pub mod context;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod table;

pub use context::{CliMode, CommandError, CommandResult, LoopControl, ShellContext};
pub use shell::run_cli;
