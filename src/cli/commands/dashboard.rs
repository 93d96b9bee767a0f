use payouts_core::SummaryService;

use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "dashboard",
        "Show platform stats, recent completions and top teachers",
        "dashboard",
        cmd_dashboard,
    )]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let ledger = context.app.ledger();
    let config = context.config();
    let stats = SummaryService::dashboard(&ledger);
    let recent = SummaryService::recent_completions(&ledger, config.recent_activity_limit);
    let top = SummaryService::top_teachers(&ledger, config.top_teacher_limit);

    output::section("Dashboard");
    output::two_column(&[
        (
            "Active teachers",
            format!("{} of {}", stats.active_teachers, stats.total_teachers),
        ),
        ("Students", stats.total_students.to_string()),
        ("Enrollments", stats.total_enrollments.to_string()),
        ("Total paid", context.format_total(stats.total_paid)),
        ("Pending", context.format_total(stats.pending_amount)),
        ("Completed payouts", stats.completed_payouts.to_string()),
        ("Completion rate", format!("{}%", stats.completion_rate)),
    ]);

    output::section("Recent completions");
    if recent.is_empty() {
        output::info("No completions yet.");
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("Student"),
            TableColumn::left("Course").truncated(24),
            TableColumn::left("Teacher"),
            TableColumn::right("Amount"),
            TableColumn::left("Status"),
        ]);
        for completion in &recent {
            table.push(vec![
                completion.student.clone(),
                completion.course.clone(),
                completion.teacher.clone(),
                completion.amount.to_string(),
                completion.status.to_string(),
            ]);
        }
        output::info(table.render());
    }

    output::section("Top teachers");
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Name"),
        TableColumn::right("Completions"),
        TableColumn::right("Earnings"),
    ]);
    for (rank, teacher) in top.iter().enumerate() {
        table.push(vec![
            (rank + 1).to_string(),
            teacher.name.clone(),
            teacher.completions.to_string(),
            teacher.earnings.to_string(),
        ]);
    }
    output::info(table.render());
    Ok(())
}
