use payouts_core::WalletState;

use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "connect",
            "Connect the simulated wallet",
            "connect",
            cmd_connect,
        ),
        CommandEntry::new(
            "disconnect",
            "Disconnect the simulated wallet",
            "disconnect",
            cmd_disconnect,
        ),
        CommandEntry::new("wallet", "Show wallet status", "wallet", cmd_wallet),
    ]
}

fn cmd_connect(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.app.wallet().is_connected() {
        output::info("Connecting wallet...");
    }
    let wallet = context.app.wallet();
    let address = context.runtime().block_on(wallet.connect())?;
    output::success(format!("Wallet connected: {}", address));
    Ok(())
}

fn cmd_disconnect(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.app.wallet().disconnect()?;
    output::success("Wallet disconnected.");
    Ok(())
}

fn cmd_wallet(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.app.wallet().state() {
        WalletState::Connected { address } => {
            output::info(format!("Wallet connected: {}", address))
        }
        WalletState::Connecting => output::info("Wallet connecting..."),
        WalletState::Disconnected => {
            output::info("Wallet disconnected.");
            output::hint("Use `connect` to connect the mock wallet.");
        }
    }
    Ok(())
}
