//! Student roster entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student known to this workbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Identity used in attempt records (lowercased, whitespace collapsed)
    pub id: String,

    /// Display name as entered
    pub name: String,

    /// When the student first logged in
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Create a roster entry for a (trimmed) display name
    #[must_use]
    pub fn new(name: &str) -> Self {
        let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
        Self {
            id: student_id(&name),
            name,
            created_at: Utc::now(),
        }
    }
}

/// Derive the identity for a display name
///
/// "  Ana  María " and "ana maría" are the same student.
#[must_use]
pub fn student_id(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
