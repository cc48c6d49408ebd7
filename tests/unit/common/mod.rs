//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing conjuga components.

use chrono::{Duration, TimeZone, Utc};

use conjuga::adapters::MemoryStore;
use conjuga::config::Config;
use conjuga::core::models::{ConjugationClass, Person, PracticeAttempt, Tense, VerbDefinition};
use conjuga::core::ports::RandomSource;
use conjuga::core::services::Workbook;

/// A random source that replays a fixed script of indices
///
/// Each value is reduced modulo the requested bound; the script wraps.
#[derive(Debug)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(script: &[usize]) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.script[self.next % self.script.len()];
        self.next += 1;
        value % bound
    }
}

/// A workbook over an empty in-memory store (seeded bank)
pub fn workbook() -> Workbook<MemoryStore> {
    Workbook::open(MemoryStore::new(), &Config::default())
}

/// hablar (to speak), regular -ar
pub fn hablar() -> VerbDefinition {
    VerbDefinition::new("hablar", ConjugationClass::Ar)
        .with_meaning("to speak")
        .with_tags(["regular", "ar"])
}

/// An attempt with a fixed timestamp `minute` minutes after a base instant
pub fn attempt(student: &str, tense: Tense, correct: bool, minute: i64) -> PracticeAttempt {
    let base = Utc.with_ymd_and_hms(2024, 9, 1, 9, 0, 0).unwrap();
    PracticeAttempt {
        timestamp: base + Duration::minutes(minute),
        student: student.to_string(),
        verb: "hablar".to_string(),
        tense,
        person: Person::Yo,
        expected: "hablo".to_string(),
        submitted: if correct { "hablo" } else { "habla" }.to_string(),
        correct,
    }
}
