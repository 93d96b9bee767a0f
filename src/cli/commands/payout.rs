use payouts_core::{CompletionRequest, CompletionService, StudentUpdate, SummaryService};
use payouts_domain::{CourseCompletion, Displayable};

use crate::cli::context::{require_args, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "payouts",
            "List payouts, newest first, optionally filtered",
            "payouts [query]",
            cmd_payouts,
        ),
        CommandEntry::new(
            "analytics",
            "Show payout totals and status counts",
            "analytics",
            cmd_analytics,
        ),
        CommandEntry::new(
            "complete",
            "Record a course completion and pay the teacher",
            "complete <teacher-address> <student-address> <course>",
            cmd_complete,
        ),
    ]
}

fn cmd_payouts(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = args.join(" ");
    let ledger = context.app.ledger();
    let payouts = SummaryService::search_payouts(&ledger, &query);

    output::section("Payouts");
    if payouts.is_empty() {
        output::info("No payouts match.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("When"),
        TableColumn::left("Teacher"),
        TableColumn::left("Student"),
        TableColumn::left("Course").truncated(24),
        TableColumn::right("Amount"),
        TableColumn::left("Status"),
        TableColumn::left("Tx").truncated(14),
    ]);
    for payout in payouts {
        table.push(vec![
            context.format_timestamp(payout.timestamp),
            payout.teacher.clone(),
            payout.student.clone(),
            payout.course.clone(),
            payout.amount.to_string(),
            payout.status.to_string(),
            payout
                .tx_hash
                .as_ref()
                .map(|hash| hash.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn cmd_analytics(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let analytics = SummaryService::payout_analytics(&context.app.ledger());
    output::section("Payout analytics");
    output::two_column(&[
        ("Total paid", context.format_total(analytics.total_paid)),
        ("Pending", context.format_total(analytics.pending_amount)),
        ("Success rate", format!("{}%", analytics.success_rate)),
        ("Transactions", analytics.total_transactions.to_string()),
        ("Successful", analytics.successful.to_string()),
        ("Pending count", analytics.pending.to_string()),
        ("Failed", analytics.failed.to_string()),
        (
            "Avg per completion",
            context.format_total(analytics.average_per_completion),
        ),
    ]);
    Ok(())
}

fn cmd_complete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let fields = require_args(
        args,
        3,
        "complete <teacher-address> <student-address> <course>",
    )?;
    let request = CompletionRequest::new(fields[0], fields[1], fields[2]);
    let receipt = context
        .app
        .with_ledger_mut(|ledger, clock| CompletionService::record(ledger, request, clock))?;

    output::success(format!("Paid {}", receipt.payout.display_label()));
    if let Some(hash) = &receipt.payout.tx_hash {
        output::info(format!("  Tx hash: {}", hash));
    }
    output::info(format!(
        "  {} balance: {}",
        receipt.teacher.name,
        context.format_amount(receipt.teacher.balance)
    ));
    match receipt.student {
        StudentUpdate::Updated(CourseCompletion::Updated) => {
            output::info("  Existing enrollment marked completed.")
        }
        StudentUpdate::Updated(CourseCompletion::Appended) => {
            output::info("  New completed enrollment added.")
        }
        StudentUpdate::Skipped => {
            output::warning("Student address not registered; payout recorded without a student.")
        }
    }
    Ok(())
}
