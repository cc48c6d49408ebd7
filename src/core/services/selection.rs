//! Question selection
//!
//! A tense selection that can never be empty, and a uniform draw of
//! (verb, tense, person) with replacement. Nothing is remembered between
//! draws.

use serde::Serialize;

use crate::core::models::{Person, Tense, VerbDefinition};
use crate::core::ports::RandomSource;

/// The set of tenses being practiced
///
/// Kept in canonical tense order. Emptying it snaps back to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenseSelection {
    tenses: Vec<Tense>,
    default: Tense,
}

impl TenseSelection {
    /// A selection holding only `default`
    #[must_use]
    pub fn new(default: Tense) -> Self {
        Self {
            tenses: vec![default],
            default,
        }
    }

    /// A selection from `tenses`, or just `default` if that is empty
    #[must_use]
    pub fn from_tenses(tenses: impl IntoIterator<Item = Tense>, default: Tense) -> Self {
        let mut selection = Self::new(default);
        selection.set(tenses);
        selection
    }

    /// Replace the selection; an empty input restores the default
    pub fn set(&mut self, tenses: impl IntoIterator<Item = Tense>) {
        let wanted: Vec<Tense> = tenses.into_iter().collect();
        self.tenses = Tense::ALL.into_iter().filter(|t| wanted.contains(t)).collect();
        self.ensure_non_empty();
    }

    /// Add `tense` if absent, remove it if present
    ///
    /// Returns whether the tense is selected afterwards. Removing the last
    /// tense restores the default selection.
    pub fn toggle(&mut self, tense: Tense) -> bool {
        if self.tenses.contains(&tense) {
            self.tenses.retain(|t| *t != tense);
        } else {
            self.tenses.push(tense);
            self.tenses.sort();
        }
        self.ensure_non_empty();
        self.contains(tense)
    }

    fn ensure_non_empty(&mut self) {
        if self.tenses.is_empty() {
            self.tenses.push(self.default);
        }
    }

    /// Whether `tense` is selected
    #[must_use]
    pub fn contains(&self, tense: Tense) -> bool {
        self.tenses.contains(&tense)
    }

    /// Selected tenses in canonical order (never empty)
    #[must_use]
    pub fn tenses(&self) -> &[Tense] {
        &self.tenses
    }

    /// The tense restored when the selection empties
    #[must_use]
    pub const fn default_tense(&self) -> Tense {
        self.default
    }
}

impl Default for TenseSelection {
    fn default() -> Self {
        Self::new(Tense::default())
    }
}

/// One drawn question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// The verb to conjugate
    pub verb: VerbDefinition,
    /// Requested tense
    pub tense: Tense,
    /// Requested person
    pub person: Person,
}

impl Question {
    /// Build a question
    #[must_use]
    pub const fn new(verb: VerbDefinition, tense: Tense, person: Person) -> Self {
        Self { verb, tense, person }
    }

    /// One-line prompt, e.g. `hablar (to speak) · presente · yo`
    #[must_use]
    pub fn prompt(&self) -> String {
        let verb = if self.verb.meaning.is_empty() {
            self.verb.infinitive.clone()
        } else {
            format!("{} ({})", self.verb.infinitive, self.verb.meaning)
        };
        format!("{verb} · {} · {}", self.tense.spanish_name(), self.person.pronoun())
    }
}

/// Draw a uniformly random question from `pool`
///
/// Returns `None` only when the pool is empty.
pub fn draw_question<R>(
    pool: &[&VerbDefinition],
    selection: &TenseSelection,
    rng: &mut R,
) -> Option<Question>
where
    R: RandomSource + ?Sized,
{
    if pool.is_empty() {
        return None;
    }
    let verb = pool[rng.next_index(pool.len()).min(pool.len() - 1)];
    let tenses = selection.tenses();
    let tense = tenses[rng.next_index(tenses.len()).min(tenses.len() - 1)];
    let person = Person::from_ordinal(rng.next_index(Person::ALL.len())).unwrap_or(Person::Yo);
    Some(Question::new(verb.clone(), tense, person))
}
