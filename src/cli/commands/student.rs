use payouts_core::{CoreError, SummaryService};
use payouts_domain::Displayable;

use crate::cli::context::{require_args, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::{Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "students",
            "List students, optionally filtered by name or address",
            "students [query]",
            cmd_students,
        ),
        CommandEntry::new(
            "student",
            "Show a student's enrollments",
            "student <address>",
            cmd_student,
        ),
    ]
}

fn cmd_students(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let query = args.join(" ");
    let ledger = context.app.ledger();
    let students = SummaryService::search_students(&ledger, &query);

    output::section("Students");
    if students.is_empty() {
        output::info("No students match.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Name"),
        TableColumn::left("Address").truncated(20),
        TableColumn::right("Courses"),
        TableColumn::right("Completed"),
        TableColumn::left("Joined"),
    ]);
    for student in students {
        table.push(vec![
            student.name.clone(),
            student.address.clone(),
            student.enrolled_courses.len().to_string(),
            student.total_completions.to_string(),
            context.format_date(student.join_date),
        ]);
    }
    output::info(table.render());
    Ok(())
}

fn cmd_student(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let address = require_args(args, 1, "student <address>")?[0];
    let ledger = context.app.ledger();
    let student = ledger
        .student_by_address(address)
        .ok_or_else(|| CoreError::StudentNotFound(address.to_string()))?;

    output::section(student.display_label());
    output::two_column(&[
        ("Address", student.address.clone()),
        ("Joined", context.format_date(student.join_date)),
    ]);

    let mut table = Table::new(vec![
        TableColumn::left("Course"),
        TableColumn::left("Teacher"),
        TableColumn::left("Status"),
        TableColumn::left("Completed"),
    ]);
    for enrollment in &student.enrolled_courses {
        table.push(vec![
            enrollment.course.clone(),
            enrollment.teacher.clone(),
            enrollment.status.to_string(),
            enrollment
                .completed_date
                .map(|date| context.format_date(date))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    output::info(table.render());
    Ok(())
}
