pub mod dashboard;
pub mod payout;
pub mod student;
pub mod system;
pub mod teacher;
pub mod wallet;

use crate::cli::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(dashboard::definitions());
    commands.extend(teacher::definitions());
    commands.extend(student::definitions());
    commands.extend(payout::definitions());
    commands.extend(wallet::definitions());
    commands.extend(system::definitions());
    commands
}
