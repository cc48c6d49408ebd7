//! Practice attempt model
//!
//! One submitted answer. Created on submission, never edited; the workbook
//! appends these to its log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Person, Tense};

/// A recorded answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeAttempt {
    /// When the answer was submitted
    pub timestamp: DateTime<Utc>,

    /// Student identity (see [`super::student_id`])
    pub student: String,

    /// Infinitive of the practiced verb
    pub verb: String,

    /// Practiced tense
    pub tense: Tense,

    /// Practiced person
    pub person: Person,

    /// Resolved form at submission time ("" if unresolved)
    pub expected: String,

    /// What the student typed, verbatim
    pub submitted: String,

    /// Outcome of the normalized comparison
    pub correct: bool,
}

impl PracticeAttempt {
    /// Record an attempt stamped with the current time
    #[must_use]
    pub fn now(
        student: impl Into<String>,
        verb: impl Into<String>,
        tense: Tense,
        person: Person,
        expected: impl Into<String>,
        submitted: impl Into<String>,
        correct: bool,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            student: student.into(),
            verb: verb.into(),
            tense,
            person,
            expected: expected.into(),
            submitted: submitted.into(),
            correct,
        }
    }
}
