use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "export",
            "Print the whole ledger as JSON",
            "export",
            cmd_export,
        ),
        CommandEntry::new(
            "config",
            "Show or change preferences",
            "config [set <key> <value>]",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&*context.app.ledger())?;
    output::info(json);
    Ok(())
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let config = context.config().clone();
            output::section("Configuration");
            output::two_column(&[
                ("currency_label", config.currency_label),
                (
                    "wallet_connect_delay_ms",
                    config.wallet_connect_delay_ms.to_string(),
                ),
                ("mock_wallet_address", config.mock_wallet_address),
                ("seed_sample_data", config.seed_sample_data.to_string()),
                ("ui_color_enabled", config.ui_color_enabled.to_string()),
                (
                    "recent_activity_limit",
                    config.recent_activity_limit.to_string(),
                ),
                ("top_teacher_limit", config.top_teacher_limit.to_string()),
            ]);
            output::hint(format!("Stored at {}", context.config_path_display()));
            Ok(())
        }
        ["set", key, value] => {
            context.set_config_value(key, value)?;
            output::success(format!("Set {} = {}", key, value));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "Usage: config [set <key> <value>]".into(),
        )),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Teacher Payouts {}", meta.version));
    output::two_column(&meta.rows());
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        match context.command(&raw.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(raw),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
