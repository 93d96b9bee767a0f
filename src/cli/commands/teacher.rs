use payouts_core::{CoreError, RegisterTeacherRequest, SummaryService, TeacherService};
use payouts_domain::{Displayable, Teacher};

use crate::cli::context::{require_args, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "teachers",
            "List teachers, optionally filtered by name or subject",
            "teachers [query]",
            cmd_teachers,
        ),
        CommandEntry::new(
            "teacher",
            "Show one teacher by wallet address",
            "teacher <address>",
            cmd_teacher,
        ),
        CommandEntry::new(
            "register",
            "Register a new teacher",
            "register <name> <address> <subject> <balance>",
            cmd_register,
        ),
        CommandEntry::new(
            "fund",
            "Add funds to a teacher's payout balance",
            "fund <address> <amount>",
            cmd_fund,
        ),
    ]
}

fn cmd_teachers(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = args.join(" ");
    let ledger = context.app.ledger();
    let teachers = SummaryService::search_teachers(&ledger, &query);

    output::section("Teachers");
    if teachers.is_empty() {
        output::info("No teachers match.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Name"),
        TableColumn::left("Subject"),
        TableColumn::left("Address").truncated(20),
        TableColumn::right("Balance"),
        TableColumn::right("Earned"),
        TableColumn::right("Done"),
        TableColumn::right("Rate"),
        TableColumn::left("Status"),
    ]);
    for teacher in teachers {
        table.push(vec![
            teacher.name.clone(),
            teacher.subject.clone(),
            teacher.address.clone(),
            teacher.balance.to_string(),
            teacher.total_earnings.to_string(),
            teacher.students_completed.to_string(),
            format!("{}%", teacher.completion_rate),
            teacher.status.to_string(),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn cmd_teacher(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let address = require_args(args, 1, "teacher <address>")?[0];
    let ledger = context.app.ledger();
    let teacher = ledger
        .teacher_by_address(address)
        .ok_or_else(|| CoreError::TeacherNotFound(address.to_string()))?;
    print_teacher(context, teacher);
    Ok(())
}

fn cmd_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let fields = require_args(args, 4, "register <name> <address> <subject> <balance>")?;
    let request = RegisterTeacherRequest::new(fields[0], fields[1], fields[2], fields[3]);
    let label = context.app.with_ledger_mut(|ledger, clock| {
        let id = TeacherService::register(ledger, request, clock)?;
        Ok::<_, CoreError>(
            ledger
                .teacher(id)
                .map(Displayable::display_label)
                .unwrap_or_default(),
        )
    })?;
    output::success(format!("Registered {}", label));
    Ok(())
}

fn cmd_fund(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let fields = require_args(args, 2, "fund <address> <amount>")?;
    let (address, raw_amount) = (fields[0], fields[1]);
    let balance = context.app.with_ledger_mut(|ledger, _clock| {
        let id = ledger
            .teacher_by_address(address)
            .map(|teacher| teacher.id)
            .ok_or_else(|| CoreError::TeacherNotFound(address.to_string()))?;
        TeacherService::add_funds(ledger, Some(id), raw_amount)
    })?;
    output::success(format!(
        "Funds added. New balance: {}",
        context.format_amount(balance)
    ));
    Ok(())
}

fn print_teacher(context: &ShellContext, teacher: &Teacher) {
    output::section(teacher.display_label());
    output::two_column(&[
        ("Address", teacher.address.clone()),
        ("Registered", context.format_date(teacher.registered_date)),
        ("Balance", context.format_amount(teacher.balance)),
        ("Total earnings", context.format_amount(teacher.total_earnings)),
        ("Completed", teacher.students_completed.to_string()),
        ("Completion rate", format!("{}%", teacher.completion_rate)),
    ]);
    if teacher.balance.is_negative() {
        output::warning("Balance is negative; new completions are blocked until funded.");
    }
}
