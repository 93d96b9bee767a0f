//! Caller-side validation for teacher registration and funding forms.

use tracing::warn;
use uuid::Uuid;

use payouts_domain::{Amount, NewTeacher, PayoutLedger};

use crate::{ledger_service::LedgerService, time::Clock, CoreError, CoreResult};

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const INVALID_AMOUNT: &str = "Please enter a valid amount";

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterTeacherRequest {
    pub name: String,
    pub address: String,
    pub subject: String,
    pub balance: String,
}

impl RegisterTeacherRequest {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        subject: impl Into<String>,
        balance: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            subject: subject.into(),
            balance: balance.into(),
        }
    }

    fn validate(&self) -> CoreResult<NewTeacher> {
        let fields = [
            self.name.as_str(),
            self.address.as_str(),
            self.subject.as_str(),
            self.balance.as_str(),
        ];
        if any_blank(&fields) {
            return Err(CoreError::Validation(MISSING_FIELDS.into()));
        }
        let balance: Amount = self
            .balance
            .parse()
            .map_err(|err| CoreError::Validation(format!("Initial balance: {err}")))?;
        Ok(NewTeacher::new(
            self.name.trim(),
            self.address.trim(),
            self.subject.trim(),
            balance,
        ))
    }
}

/// Form fields count as missing when empty or whitespace only.
pub(crate) fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|value| value.trim().is_empty())
}

/// Validates form input before handing it to [`LedgerService`].
pub struct TeacherService;

impl TeacherService {
    /// Registers a teacher once every field is present and the balance parses.
    pub fn register(
        ledger: &mut PayoutLedger,
        request: RegisterTeacherRequest,
        clock: &dyn Clock,
    ) -> CoreResult<Uuid> {
        let details = request.validate().inspect_err(|err| {
            warn!(error = %err, "teacher registration rejected");
        })?;
        Ok(LedgerService::register_teacher(ledger, details, clock))
    }

    /// Adds funds to the selected teacher. The amount must parse and be positive.
    pub fn add_funds(
        ledger: &mut PayoutLedger,
        teacher_id: Option<Uuid>,
        raw_amount: &str,
    ) -> CoreResult<Amount> {
        let Some(teacher_id) = teacher_id else {
            return Err(CoreError::Validation(INVALID_AMOUNT.into()));
        };
        let amount = match raw_amount.parse::<Amount>() {
            Ok(amount) if amount.is_positive() => amount,
            _ => {
                warn!(%teacher_id, raw_amount, "funding rejected: invalid amount");
                return Err(CoreError::Validation(INVALID_AMOUNT.into()));
            }
        };
        LedgerService::add_funds_to_teacher(ledger, teacher_id, amount)
    }
}
