//! Domain models for students and their course enrollments.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub enrolled_courses: Vec<Enrollment>,
    /// Tracked independently of `enrolled_courses`; seed data may disagree with it.
    pub total_completions: u32,
    pub join_date: NaiveDate,
}

impl Student {
    pub fn new(name: impl Into<String>, address: impl Into<String>, join_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            address: address.into(),
            enrolled_courses: Vec::new(),
            total_completions: 0,
            join_date,
        }
    }

    pub fn with_enrollment(mut self, enrollment: Enrollment) -> Self {
        self.enrolled_courses.push(enrollment);
        self
    }

    pub fn with_total_completions(mut self, total: u32) -> Self {
        self.total_completions = total;
        self
    }

    pub fn enrollment(&self, teacher: &str, course: &str) -> Option<&Enrollment> {
        self.enrolled_courses
            .iter()
            .find(|entry| entry.matches(teacher, course))
    }

    /// Marks the matching enrollment completed, or appends a completed one.
    pub fn complete_course(
        &mut self,
        teacher: &str,
        course: &str,
        completed_on: NaiveDate,
    ) -> CourseCompletion {
        let outcome = match self
            .enrolled_courses
            .iter_mut()
            .find(|entry| entry.matches(teacher, course))
        {
            Some(entry) => {
                entry.mark_completed(completed_on);
                CourseCompletion::Updated
            }
            None => {
                self.enrolled_courses
                    .push(Enrollment::completed(teacher, course, completed_on));
                CourseCompletion::Appended
            }
        };
        self.total_completions += 1;
        outcome
    }

    pub fn completed_count(&self) -> usize {
        self.enrolled_courses
            .iter()
            .filter(|entry| entry.status == EnrollmentStatus::Completed)
            .count()
    }
}

impl Identifiable for Student {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Addressed for Student {
    fn address(&self) -> &str {
        &self.address
    }
}

impl Displayable for Student {
    fn display_label(&self) -> String {
        format!(
            "{} ({} courses, {} completions)",
            self.name,
            self.enrolled_courses.len(),
            self.total_completions
        )
    }
}

/// A course taken under a teacher, referenced by the teacher's display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Enrollment {
    pub teacher: String,
    pub course: String,
    pub status: EnrollmentStatus,
    pub completed_date: Option<NaiveDate>,
}

impl Enrollment {
    pub fn in_progress(teacher: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            teacher: teacher.into(),
            course: course.into(),
            status: EnrollmentStatus::InProgress,
            completed_date: None,
        }
    }

    pub fn completed(
        teacher: impl Into<String>,
        course: impl Into<String>,
        completed_on: NaiveDate,
    ) -> Self {
        Self {
            teacher: teacher.into(),
            course: course.into(),
            status: EnrollmentStatus::Completed,
            completed_date: Some(completed_on),
        }
    }

    pub fn matches(&self, teacher: &str, course: &str) -> bool {
        self.course == course && self.teacher == teacher
    }

    pub fn mark_completed(&mut self, completed_on: NaiveDate) {
        self.status = EnrollmentStatus::Completed;
        self.completed_date = Some(completed_on);
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    Completed,
    InProgress,
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::InProgress => "in-progress",
        };
        f.write_str(label)
    }
}

/// How [`Student::complete_course`] changed the enrollment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseCompletion {
    Updated,
    Appended,
}
