//! Shared traits implemented by every ledger record.

use uuid::Uuid;

/// Exposes a stable identifier for records stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Wallet-style address shared by teachers and students.
pub trait Addressed {
    fn address(&self) -> &str;
}

/// Converts a record into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}
