//! Store operations over a [`PayoutLedger`].
//!
//! Every mutation either applies completely or leaves the ledger untouched.
//! Missing records are reported as [`CoreError`] values instead of being
//! silently ignored.

use rand::Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use payouts_domain::{
    Amount, CourseCompletion, NewTeacher, Payout, PayoutLedger, PayoutStatus, Student, Teacher,
    TxHash, COMPLETION_PAYOUT, UNKNOWN_STUDENT,
};

use crate::{time::Clock, CoreError, CoreResult};

/// Rejection message when a balance or earnings total would leave the decimal range.
pub const AMOUNT_OUT_OF_RANGE: &str = "Amount out of range";

/// Outcome of the student side of a recorded completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentUpdate {
    /// The student record was updated; the enrollment was re-marked or appended.
    Updated(CourseCompletion),
    /// No student matched the address, so no student record changed.
    Skipped,
}

/// Snapshot of everything a completion changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReceipt {
    pub payout: Payout,
    pub teacher: Teacher,
    pub student: StudentUpdate,
}

/// Provides the mutation and lookup operations of the payout store.
pub struct LedgerService;

impl LedgerService {
    /// Appends a new active teacher. Duplicate addresses are permitted.
    pub fn register_teacher(ledger: &mut PayoutLedger, details: NewTeacher, clock: &dyn Clock) -> Uuid {
        let teacher = Teacher::register(details, clock.today());
        info!(
            teacher_id = %teacher.id,
            address = %teacher.address,
            balance = %teacher.balance,
            "registered teacher"
        );
        ledger.add_teacher(teacher)
    }

    /// Adds `amount` (which may be negative) to the teacher's balance and returns the new balance.
    pub fn add_funds_to_teacher(
        ledger: &mut PayoutLedger,
        teacher_id: Uuid,
        amount: Amount,
    ) -> CoreResult<Amount> {
        let Some(teacher) = ledger.teacher_mut(teacher_id) else {
            warn!(%teacher_id, "funding rejected: unknown teacher");
            return Err(CoreError::TeacherNotFound(teacher_id.to_string()));
        };
        let Some(balance) = teacher.credit(amount) else {
            warn!(%teacher_id, %amount, "funding rejected: balance out of range");
            return Err(CoreError::Validation(AMOUNT_OUT_OF_RANGE.into()));
        };
        info!(%teacher_id, %amount, %balance, "funded teacher");
        Ok(balance)
    }

    /// Books a course completion: pays the teacher the fixed completion
    /// amount, updates the student's enrollment when the student is known,
    /// and prepends the payout record.
    pub fn record_completion(
        ledger: &mut PayoutLedger,
        teacher_address: &str,
        student_address: &str,
        course: &str,
        clock: &dyn Clock,
    ) -> CoreResult<CompletionReceipt> {
        let Some(current) = ledger.teacher_by_address(teacher_address) else {
            warn!(teacher_address, "completion rejected: unknown teacher");
            return Err(CoreError::TeacherNotFound(teacher_address.to_string()));
        };
        let today = clock.today();

        let mut teacher = current.clone();
        let student_record = ledger.student_by_address(student_address).cloned();
        let student_name = student_record
            .as_ref()
            .map(|student| student.name.clone())
            .unwrap_or_else(|| UNKNOWN_STUDENT.to_string());

        let payout = Payout {
            id: Uuid::new_v4(),
            teacher: teacher.name.clone(),
            teacher_address: teacher_address.to_string(),
            student: student_name,
            student_address: student_address.to_string(),
            course: course.to_string(),
            amount: COMPLETION_PAYOUT,
            status: PayoutStatus::Completed,
            timestamp: clock.now(),
            tx_hash: Some(simulated_tx_hash()),
        };

        if teacher.apply_payout(COMPLETION_PAYOUT).is_none() {
            warn!(teacher_address, "completion rejected: balance out of range");
            return Err(CoreError::Validation(AMOUNT_OUT_OF_RANGE.into()));
        }

        let (student, update) = match student_record {
            Some(mut student) => {
                let outcome = student.complete_course(&teacher.name, course, today);
                (Some(student), StudentUpdate::Updated(outcome))
            }
            None => {
                debug!(student_address, "no student record; skipping enrollment update");
                (None, StudentUpdate::Skipped)
            }
        };

        let receipt = CompletionReceipt {
            payout: payout.clone(),
            teacher: teacher.clone(),
            student: update,
        };
        if !ledger.commit_completion(teacher, student, payout) {
            return Err(CoreError::TeacherNotFound(teacher_address.to_string()));
        }

        info!(
            payout_id = %receipt.payout.id,
            teacher = %receipt.teacher.name,
            student = %receipt.payout.student,
            course,
            balance = %receipt.teacher.balance,
            "recorded completion"
        );
        Ok(receipt)
    }

    pub fn teacher_by_address<'a>(ledger: &'a PayoutLedger, address: &str) -> Option<&'a Teacher> {
        let found = ledger.teacher_by_address(address);
        debug!(address, found = found.is_some(), "teacher lookup");
        found
    }

    pub fn student_by_address<'a>(ledger: &'a PayoutLedger, address: &str) -> Option<&'a Student> {
        let found = ledger.student_by_address(address);
        debug!(address, found = found.is_some(), "student lookup");
        found
    }

    pub fn require_teacher<'a>(ledger: &'a PayoutLedger, address: &str) -> CoreResult<&'a Teacher> {
        Self::teacher_by_address(ledger, address)
            .ok_or_else(|| CoreError::TeacherNotFound(address.to_string()))
    }
}

/// Cosmetic `0x`-prefixed hex reference for a payout. Random, not a digest.
pub fn simulated_tx_hash() -> TxHash {
    let mut bytes = [0u8; TxHash::HEX_LEN / 2];
    rand::rng().fill(&mut bytes);
    TxHash::simulated(format!("0x{}", hex::encode(bytes)))
}
