//! Verb definitions
//!
//! A verb is an infinitive, a conjugation class and a sparse table of
//! teacher-supplied override forms. Overrides are keyed by the
//! `(Tense, Person)` pair so "is there an override?" is one lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ConjugationClass, Person, Tense};

/// Wire form of the override table: `{ "imperfect": { "nosotros": "éramos" } }`
type OverrideWire = BTreeMap<Tense, BTreeMap<Person, String>>;

/// Sparse override table keyed by `(tense, person)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OverrideWire", into = "OverrideWire")]
pub struct Overrides(BTreeMap<(Tense, Person), String>);

impl Overrides {
    /// Empty table
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// The override at a cell, if present
    #[must_use]
    pub fn get(&self, tense: Tense, person: Person) -> Option<&str> {
        self.0.get(&(tense, person)).map(String::as_str)
    }

    /// Set a cell. An empty (or whitespace-only) form clears it instead.
    pub fn set(&mut self, tense: Tense, person: Person, form: &str) {
        let form = form.trim();
        if form.is_empty() {
            self.0.remove(&(tense, person));
        } else {
            self.0.insert((tense, person), form.to_string());
        }
    }

    /// Clear a cell, returning the previous form
    pub fn remove(&mut self, tense: Tense, person: Person) -> Option<String> {
        self.0.remove(&(tense, person))
    }

    /// Number of filled cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no cell is filled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<OverrideWire> for Overrides {
    fn from(wire: OverrideWire) -> Self {
        let mut table = Self::new();
        for (tense, row) in wire {
            for (person, form) in row {
                table.set(tense, person, &form);
            }
        }
        table
    }
}

impl From<Overrides> for OverrideWire {
    fn from(table: Overrides) -> Self {
        let mut wire = Self::new();
        for ((tense, person), form) in table.0 {
            wire.entry(tense).or_default().insert(person, form);
        }
        wire
    }
}

/// A verb in the bank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbDefinition {
    /// The infinitive (e.g., "hablar")
    pub infinitive: String,

    /// English gloss shown next to the verb
    #[serde(default)]
    pub meaning: String,

    /// Conjugation class: "-ar", "-er", "-ir", "irregular"
    #[serde(rename = "type")]
    pub class: ConjugationClass,

    /// Free-form labels used to filter practice pools
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Explicit forms that win over rule-based derivation
    #[serde(default, skip_serializing_if = "Overrides::is_empty")]
    pub overrides: Overrides,
}

impl VerbDefinition {
    /// Create a verb with no meaning, tags or overrides
    #[must_use]
    pub fn new(infinitive: impl Into<String>, class: ConjugationClass) -> Self {
        Self {
            infinitive: infinitive.into(),
            meaning: String::new(),
            class,
            tags: Vec::new(),
            overrides: Overrides::new(),
        }
    }

    /// Set the English gloss
    #[must_use]
    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    /// Set the tags
    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single override cell
    #[must_use]
    pub fn with_override(mut self, tense: Tense, person: Person, form: &str) -> Self {
        self.overrides.set(tense, person, form);
        self
    }

    /// Add a full six-person override row for one tense
    #[must_use]
    pub fn with_override_row(mut self, tense: Tense, forms: [&str; 6]) -> Self {
        for (person, form) in Person::ALL.into_iter().zip(forms) {
            self.overrides.set(tense, person, form);
        }
        self
    }

    /// Case-insensitive tag membership
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.trim().to_lowercase() == tag)
    }

    /// Whether `infinitive` names this verb (case-insensitive)
    #[must_use]
    pub fn is_named(&self, infinitive: &str) -> bool {
        self.infinitive.trim().to_lowercase() == infinitive.trim().to_lowercase()
    }

    /// Why this definition cannot be conjugated as declared, if it can't
    #[must_use]
    pub fn problem(&self) -> Option<String> {
        let infinitive = self.infinitive.trim();
        if infinitive.chars().count() < 2 {
            return Some("infinitive must be at least 2 characters".to_string());
        }
        if !infinitive.chars().all(char::is_alphabetic) {
            return Some("infinitive must contain only letters".to_string());
        }
        if let Some(ending) = self.class.ending()
            && !infinitive.to_lowercase().ends_with(ending)
        {
            return Some(format!("a {} verb must end in '{ending}'", self.class));
        }
        None
    }
}
