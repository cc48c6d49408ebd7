//! Progress aggregation
//!
//! Pure reductions over the attempt log: per-student totals, a by-tense
//! breakdown of recent work, and the class-wide summary a teacher exports.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::models::{PracticeAttempt, Student, Tense};

/// Attempts considered by the tense breakdown when not configured
pub const DEFAULT_RECENT_WINDOW: usize = 50;

/// Totals for one student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StudentSummary {
    /// Answers submitted
    pub total: usize,
    /// Answers judged correct
    pub correct: usize,
    /// Rounded percentage, 0 when nothing was submitted
    pub accuracy: u32,
}

/// Correct/total for one tense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenseStats {
    /// The tense
    pub tense: Tense,
    /// Correct answers in the window
    pub correct: usize,
    /// Answers in the window
    pub total: usize,
}

/// One line of the class summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRow {
    /// Student identity
    pub student: String,
    /// Display name (identity when the student is not on the roster)
    pub name: String,
    /// Answers submitted
    pub total: usize,
    /// Answers judged correct
    pub correct: usize,
    /// Rounded percentage
    pub accuracy: u32,
    /// Most recent submission, if any
    pub last_attempt: Option<DateTime<Utc>>,
}

/// `round(correct / total * 100)`, 0 when `total` is 0
#[must_use]
pub fn accuracy(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (correct.min(total) * 100 + total / 2) / total;
    u32::try_from(rounded).unwrap_or(100)
}

/// Totals for `student` across the whole log
#[must_use]
pub fn summarize(attempts: &[PracticeAttempt], student: &str) -> StudentSummary {
    let (total, correct) = attempts
        .iter()
        .filter(|a| a.student == student)
        .fold((0, 0), |(total, correct), a| (total + 1, correct + usize::from(a.correct)));
    StudentSummary {
        total,
        correct,
        accuracy: accuracy(correct, total),
    }
}

/// Per-tense correct/total over the student's most recent `window` attempts
///
/// Tenses are returned in canonical order; tenses with no attempts in the
/// window are omitted.
#[must_use]
pub fn tense_breakdown(attempts: &[PracticeAttempt], student: &str, window: usize) -> Vec<TenseStats> {
    let mine: Vec<&PracticeAttempt> = attempts.iter().filter(|a| a.student == student).collect();
    let recent = &mine[mine.len().saturating_sub(window)..];

    Tense::ALL
        .into_iter()
        .filter_map(|tense| {
            let (total, correct) = recent
                .iter()
                .filter(|a| a.tense == tense)
                .fold((0, 0), |(total, correct), a| (total + 1, correct + usize::from(a.correct)));
            (total > 0).then_some(TenseStats { tense, correct, total })
        })
        .collect()
}

/// One row per rostered student, then any identities found only in the log
#[must_use]
pub fn class_summary(attempts: &[PracticeAttempt], roster: &[Student]) -> Vec<ClassRow> {
    let mut identities: Vec<(String, String)> =
        roster.iter().map(|s| (s.id.clone(), s.name.clone())).collect();
    for attempt in attempts {
        if !identities.iter().any(|(id, _)| *id == attempt.student) {
            identities.push((attempt.student.clone(), attempt.student.clone()));
        }
    }

    identities
        .into_iter()
        .map(|(student, name)| {
            let summary = summarize(attempts, &student);
            let last_attempt = attempts
                .iter()
                .filter(|a| a.student == student)
                .map(|a| a.timestamp)
                .max();
            ClassRow {
                student,
                name,
                total: summary.total,
                correct: summary.correct,
                accuracy: summary.accuracy,
                last_attempt,
            }
        })
        .collect()
}
