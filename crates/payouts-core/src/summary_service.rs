//! Aggregation helpers for the dashboard and payout analytics views.
//!
//! Everything here is a pure read over the ledger and is recomputed on demand.

use chrono::{DateTime, Utc};

use payouts_domain::{Amount, Payout, PayoutLedger, PayoutStatus, Student, Teacher};

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_teachers: usize,
    pub total_teachers: usize,
    pub total_students: usize,
    pub total_enrollments: usize,
    pub total_paid: Amount,
    pub pending_amount: Amount,
    pub completed_payouts: usize,
    /// Completed payouts as a percentage of all enrollments.
    pub completion_rate: u32,
}

/// Payout counts and totals by status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutAnalytics {
    pub total_paid: Amount,
    pub pending_amount: Amount,
    pub successful: usize,
    pub failed: usize,
    pub pending: usize,
    /// Every payout regardless of status.
    pub total_transactions: usize,
    /// Successful payouts as a percentage of settled (successful plus failed) ones.
    pub success_rate: u32,
    pub average_per_completion: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentCompletion {
    pub student: String,
    pub teacher: String,
    pub course: String,
    pub amount: Amount,
    pub status: PayoutStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTeacher {
    pub name: String,
    pub completions: u32,
    pub earnings: Amount,
}

pub struct SummaryService;

impl SummaryService {
    pub fn dashboard(ledger: &PayoutLedger) -> DashboardStats {
        let total_enrollments = ledger
            .students
            .iter()
            .map(|student| student.enrolled_courses.len())
            .sum();
        let completed_payouts = count_status(ledger, PayoutStatus::Completed);
        DashboardStats {
            active_teachers: ledger.teachers.iter().filter(|t| t.is_active()).count(),
            total_teachers: ledger.teachers.len(),
            total_students: ledger.students.len(),
            total_enrollments,
            total_paid: sum_status(ledger, PayoutStatus::Completed),
            pending_amount: sum_status(ledger, PayoutStatus::Pending),
            completed_payouts,
            completion_rate: rounded_percent(completed_payouts, total_enrollments),
        }
    }

    pub fn payout_analytics(ledger: &PayoutLedger) -> PayoutAnalytics {
        let total_paid = sum_status(ledger, PayoutStatus::Completed);
        let successful = count_status(ledger, PayoutStatus::Completed);
        let failed = count_status(ledger, PayoutStatus::Failed);
        PayoutAnalytics {
            total_paid,
            pending_amount: sum_status(ledger, PayoutStatus::Pending),
            successful,
            failed,
            pending: count_status(ledger, PayoutStatus::Pending),
            total_transactions: ledger.payouts.len(),
            success_rate: rounded_percent(successful, successful + failed),
            average_per_completion: total_paid.per(successful),
        }
    }

    /// The newest `limit` payouts, newest first.
    pub fn recent_completions(ledger: &PayoutLedger, limit: usize) -> Vec<RecentCompletion> {
        ledger
            .payouts
            .iter()
            .take(limit)
            .map(|payout| RecentCompletion {
                student: payout.student.clone(),
                teacher: payout.teacher.clone(),
                course: payout.course.clone(),
                amount: payout.amount,
                status: payout.status,
                timestamp: payout.timestamp,
            })
            .collect()
    }

    /// Teachers ranked by total earnings. Ties keep registration order.
    pub fn top_teachers(ledger: &PayoutLedger, limit: usize) -> Vec<TopTeacher> {
        let mut ranked: Vec<&Teacher> = ledger.teachers.iter().collect();
        ranked.sort_by(|a, b| b.total_earnings.cmp(&a.total_earnings));
        ranked
            .into_iter()
            .take(limit)
            .map(|teacher| TopTeacher {
                name: teacher.name.clone(),
                completions: teacher.students_completed,
                earnings: teacher.total_earnings,
            })
            .collect()
    }

    /// Teachers whose name or subject contains `query`, ignoring case.
    pub fn search_teachers<'a>(ledger: &'a PayoutLedger, query: &str) -> Vec<&'a Teacher> {
        let needle = query.to_lowercase();
        ledger
            .teachers
            .iter()
            .filter(|t| contains(&t.name, &needle) || contains(&t.subject, &needle))
            .collect()
    }

    /// Students whose name or address contains `query`, ignoring case.
    pub fn search_students<'a>(ledger: &'a PayoutLedger, query: &str) -> Vec<&'a Student> {
        let needle = query.to_lowercase();
        ledger
            .students
            .iter()
            .filter(|s| contains(&s.name, &needle) || contains(&s.address, &needle))
            .collect()
    }

    /// Payouts whose teacher, student or course contains `query`, ignoring case.
    pub fn search_payouts<'a>(ledger: &'a PayoutLedger, query: &str) -> Vec<&'a Payout> {
        let needle = query.to_lowercase();
        ledger
            .payouts
            .iter()
            .filter(|p| {
                contains(&p.teacher, &needle)
                    || contains(&p.student, &needle)
                    || contains(&p.course, &needle)
            })
            .collect()
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn count_status(ledger: &PayoutLedger, status: PayoutStatus) -> usize {
    ledger.payouts.iter().filter(|p| p.status == status).count()
}

fn sum_status(ledger: &PayoutLedger, status: PayoutStatus) -> Amount {
    ledger
        .payouts
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.amount)
        .sum()
}

fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u64, whole as u64);
    ((200 * part + whole) / (2 * whole)) as u32
}
