//! Domain models for conjuga
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`VerbDefinition`] - An infinitive, its class, and any override forms
//! - [`Tense`] / [`Person`] - The two closed axes of a conjugation table
//! - [`ConjugationClass`] - Which suffix table applies (-ar, -er, -ir, irregular)
//! - [`PracticeAttempt`] - One submitted answer, immutable once recorded
//! - [`Student`] - A roster entry

mod attempt;
mod class;
mod person;
mod student;
mod tense;
mod verb;

pub use attempt::PracticeAttempt;
pub use class::ConjugationClass;
pub use person::Person;
pub use student::{Student, student_id};
pub use tense::Tense;
pub use verb::{Overrides, VerbDefinition};

/// Fold a user-typed keyword for lenient parsing.
///
/// Lowercases, trims, strips Spanish acute accents and maps separators to `_`,
/// so "Pretérito", "preterito" and "PRETERITO" all compare equal.
pub(crate) fn fold_keyword(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            '-' | ' ' | '/' => '_',
            other => other,
        })
        .collect()
}
