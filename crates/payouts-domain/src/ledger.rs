//! In-memory collections of teachers, students and payouts.
//!
//! Records reference each other by copied names and addresses only; the
//! ledger does not enforce referential integrity between collections.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::{Addressed, Identifiable},
    payout::Payout,
    student::Student,
    teacher::Teacher,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutLedger {
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    /// Newest first.
    pub payouts: Vec<Payout>,
}

impl PayoutLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_teacher(&mut self, teacher: Teacher) -> Uuid {
        let id = teacher.id;
        self.teachers.push(teacher);
        id
    }

    pub fn add_student(&mut self, student: Student) -> Uuid {
        let id = student.id;
        self.students.push(student);
        id
    }

    pub fn prepend_payout(&mut self, payout: Payout) -> Uuid {
        let id = payout.id;
        self.payouts.insert(0, payout);
        id
    }

    pub fn teacher(&self, id: Uuid) -> Option<&Teacher> {
        position_by_id(&self.teachers, id).map(|idx| &self.teachers[idx])
    }

    pub fn teacher_mut(&mut self, id: Uuid) -> Option<&mut Teacher> {
        position_by_id(&self.teachers, id).map(|idx| &mut self.teachers[idx])
    }

    /// First teacher whose address matches exactly.
    pub fn teacher_by_address(&self, address: &str) -> Option<&Teacher> {
        position_by_address(&self.teachers, address).map(|idx| &self.teachers[idx])
    }

    /// First student whose address matches exactly.
    pub fn student_by_address(&self, address: &str) -> Option<&Student> {
        position_by_address(&self.students, address).map(|idx| &self.students[idx])
    }

    pub(crate) fn teacher_position(&self, id: Uuid) -> Option<usize> {
        position_by_id(&self.teachers, id)
    }

    pub(crate) fn student_position_by_address(&self, address: &str) -> Option<usize> {
        position_by_address(&self.students, address)
    }

    /// Applies a prepared completion in one step: replaces the teacher and
    /// (optionally) the student records and prepends the payout.
    pub fn commit_completion(
        &mut self,
        teacher: Teacher,
        student: Option<Student>,
        payout: Payout,
    ) -> bool {
        let Some(teacher_idx) = self.teacher_position(teacher.id) else {
            return false;
        };
        let student_idx = match &student {
            Some(updated) => match self.student_position_by_address(&updated.address) {
                Some(idx) => Some(idx),
                None => return false,
            },
            None => None,
        };
        self.teachers[teacher_idx] = teacher;
        if let (Some(idx), Some(updated)) = (student_idx, student) {
            self.students[idx] = updated;
        }
        self.prepend_payout(payout);
        true
    }
}

fn position_by_id<T: Identifiable>(records: &[T], id: Uuid) -> Option<usize> {
    records.iter().position(|record| record.id() == id)
}

fn position_by_address<T: Addressed>(records: &[T], address: &str) -> Option<usize> {
    records.iter().position(|record| record.address() == address)
}
