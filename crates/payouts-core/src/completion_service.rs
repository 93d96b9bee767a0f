//! Caller-side checks that gate [`LedgerService::record_completion`].

use tracing::warn;

use payouts_domain::{PayoutLedger, COMPLETION_PAYOUT};

use crate::{
    ledger_service::{CompletionReceipt, LedgerService},
    teacher_service::{any_blank, MISSING_FIELDS},
    time::Clock,
    CoreError, CoreResult,
};

/// Raw completion form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionRequest {
    pub teacher_address: String,
    pub student_address: String,
    pub course: String,
}

impl CompletionRequest {
    pub fn new(
        teacher_address: impl Into<String>,
        student_address: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            teacher_address: teacher_address.into(),
            student_address: student_address.into(),
            course: course.into(),
        }
    }
}

pub struct CompletionService;

impl CompletionService {
    /// Records a completion after checking required fields, that the teacher
    /// exists, and that the teacher can cover the payout.
    pub fn record(
        ledger: &mut PayoutLedger,
        request: CompletionRequest,
        clock: &dyn Clock,
    ) -> CoreResult<CompletionReceipt> {
        Self::precheck(ledger, &request).inspect_err(|err| {
            warn!(error = %err, teacher_address = %request.teacher_address, "completion rejected");
        })?;
        LedgerService::record_completion(
            ledger,
            &request.teacher_address,
            &request.student_address,
            &request.course,
            clock,
        )
    }

    fn precheck(ledger: &PayoutLedger, request: &CompletionRequest) -> CoreResult<()> {
        if any_blank(&[
            request.teacher_address.as_str(),
            request.student_address.as_str(),
            request.course.as_str(),
        ]) {
            return Err(CoreError::Validation(MISSING_FIELDS.into()));
        }
        let teacher = LedgerService::require_teacher(ledger, &request.teacher_address)?;
        if teacher.balance < COMPLETION_PAYOUT {
            return Err(CoreError::InsufficientBalance {
                teacher: teacher.name.clone(),
                balance: teacher.balance,
                required: COMPLETION_PAYOUT,
            });
        }
        Ok(())
    }
}
