//! Verb bank
//!
//! The teacher-editable collection of verb definitions. Infinitives are
//! unique (case-insensitive); every edit goes through an explicit method so
//! the workbook knows when to persist.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::models::{ConjugationClass, Person, Tense, VerbDefinition};
use crate::error::{Error, Result};

/// Counts from merging imported verbs into the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImportReport {
    /// New infinitives added
    pub added: usize,
    /// Existing infinitives replaced
    pub replaced: usize,
    /// Rows or records that could not be used
    pub skipped: usize,
}

/// An ordered collection of verbs with unique infinitives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VerbBank {
    verbs: Vec<VerbDefinition>,
}

impl VerbBank {
    /// An empty bank
    #[must_use]
    pub const fn new() -> Self {
        Self { verbs: Vec::new() }
    }

    /// Build a bank from definitions, dropping duplicates and invalid entries
    #[must_use]
    pub fn from_verbs(verbs: impl IntoIterator<Item = VerbDefinition>) -> Self {
        let mut bank = Self::new();
        for verb in verbs {
            if let Err(e) = bank.add(verb) {
                warn!("Dropping verb from bank: {e}");
            }
        }
        bank
    }

    /// All verbs in insertion order
    #[must_use]
    pub fn verbs(&self) -> &[VerbDefinition] {
        &self.verbs
    }

    /// Number of verbs
    #[must_use]
    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    /// Whether the bank holds no verbs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Look up a verb by infinitive (case-insensitive)
    #[must_use]
    pub fn get(&self, infinitive: &str) -> Option<&VerbDefinition> {
        self.verbs.iter().find(|v| v.is_named(infinitive))
    }

    fn position(&self, infinitive: &str) -> Result<usize> {
        self.verbs
            .iter()
            .position(|v| v.is_named(infinitive))
            .ok_or_else(|| Error::VerbNotFound(infinitive.trim().to_string()))
    }

    /// Verbs carrying `tag`, or every verb when `tag` is `None`
    #[must_use]
    pub fn pool(&self, tag: Option<&str>) -> Vec<&VerbDefinition> {
        self.verbs.iter().filter(|v| tag.is_none_or(|t| v.has_tag(t))).collect()
    }

    /// Add a new verb
    pub fn add(&mut self, verb: VerbDefinition) -> Result<()> {
        let verb = tidy(verb)?;
        if self.get(&verb.infinitive).is_some() {
            return Err(Error::DuplicateVerb(verb.infinitive));
        }
        self.verbs.push(verb);
        Ok(())
    }

    /// Replace the verb named `infinitive` (the replacement may rename it)
    pub fn update(&mut self, infinitive: &str, verb: VerbDefinition) -> Result<()> {
        let index = self.position(infinitive)?;
        let verb = tidy(verb)?;
        if let Some(other) = self.verbs.iter().position(|v| v.is_named(&verb.infinitive))
            && other != index
        {
            return Err(Error::DuplicateVerb(verb.infinitive));
        }
        self.verbs[index] = verb;
        Ok(())
    }

    /// Remove and return the verb named `infinitive`
    pub fn remove(&mut self, infinitive: &str) -> Result<VerbDefinition> {
        let index = self.position(infinitive)?;
        Ok(self.verbs.remove(index))
    }

    /// Set one override cell; an empty form clears it
    pub fn set_override(
        &mut self,
        infinitive: &str,
        tense: Tense,
        person: Person,
        form: &str,
    ) -> Result<()> {
        let index = self.position(infinitive)?;
        self.verbs[index].overrides.set(tense, person, form);
        Ok(())
    }

    /// Clear one override cell, returning the previous form
    pub fn clear_override(
        &mut self,
        infinitive: &str,
        tense: Tense,
        person: Person,
    ) -> Result<Option<String>> {
        let index = self.position(infinitive)?;
        Ok(self.verbs[index].overrides.remove(tense, person))
    }

    /// Merge imported verbs: new infinitives are added, existing ones replaced
    pub fn merge(&mut self, verbs: impl IntoIterator<Item = VerbDefinition>) -> ImportReport {
        let mut report = ImportReport::default();
        for verb in verbs {
            let Ok(verb) = tidy(verb) else {
                report.skipped += 1;
                continue;
            };
            match self.verbs.iter().position(|v| v.is_named(&verb.infinitive)) {
                Some(index) => {
                    self.verbs[index] = verb;
                    report.replaced += 1;
                },
                None => {
                    self.verbs.push(verb);
                    report.added += 1;
                },
            }
        }
        report
    }

    /// The bank new workbooks start with
    #[must_use]
    pub fn seeded() -> Self {
        use ConjugationClass::{Ar, Er, Ir, Irregular};

        let regular = |infinitive: &str, class: ConjugationClass, meaning: &str| {
            let ending = class.ending().unwrap_or_default();
            VerbDefinition::new(infinitive, class)
                .with_meaning(meaning)
                .with_tags(["regular", ending, "common"])
        };

        Self::from_verbs([
            regular("hablar", Ar, "to speak"),
            regular("estudiar", Ar, "to study"),
            regular("trabajar", Ar, "to work"),
            regular("comer", Er, "to eat"),
            regular("aprender", Er, "to learn"),
            regular("beber", Er, "to drink"),
            regular("vivir", Ir, "to live"),
            regular("escribir", Ir, "to write"),
            regular("abrir", Ir, "to open"),
            VerbDefinition::new("ser", Irregular)
                .with_meaning("to be (essence)")
                .with_tags(["irregular", "common"])
                .with_override_row(Tense::Present, ["soy", "eres", "es", "somos", "sois", "son"])
                .with_override_row(
                    Tense::Preterite,
                    ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"],
                )
                .with_override_row(
                    Tense::Imperfect,
                    ["era", "eras", "era", "éramos", "erais", "eran"],
                ),
            VerbDefinition::new("ir", Irregular)
                .with_meaning("to go")
                .with_tags(["irregular", "common"])
                .with_override_row(Tense::Present, ["voy", "vas", "va", "vamos", "vais", "van"])
                .with_override_row(
                    Tense::Preterite,
                    ["fui", "fuiste", "fue", "fuimos", "fuisteis", "fueron"],
                )
                .with_override_row(
                    Tense::Imperfect,
                    ["iba", "ibas", "iba", "íbamos", "ibais", "iban"],
                ),
            VerbDefinition::new("estar", Irregular)
                .with_meaning("to be (state)")
                .with_tags(["irregular", "common"])
                .with_override_row(
                    Tense::Present,
                    ["estoy", "estás", "está", "estamos", "estáis", "están"],
                )
                .with_override_row(
                    Tense::Preterite,
                    ["estuve", "estuviste", "estuvo", "estuvimos", "estuvisteis", "estuvieron"],
                )
                .with_override_row(
                    Tense::Imperfect,
                    ["estaba", "estabas", "estaba", "estábamos", "estabais", "estaban"],
                ),
            VerbDefinition::new("tener", Irregular)
                .with_meaning("to have")
                .with_tags(["irregular", "common"])
                .with_override_row(
                    Tense::Present,
                    ["tengo", "tienes", "tiene", "tenemos", "tenéis", "tienen"],
                )
                .with_override_row(
                    Tense::Preterite,
                    ["tuve", "tuviste", "tuvo", "tuvimos", "tuvisteis", "tuvieron"],
                )
                .with_override_row(
                    Tense::Imperfect,
                    ["tenía", "tenías", "tenía", "teníamos", "teníais", "tenían"],
                )
                .with_override_row(
                    Tense::Future,
                    ["tendré", "tendrás", "tendrá", "tendremos", "tendréis", "tendrán"],
                )
                .with_override_row(
                    Tense::Conditional,
                    ["tendría", "tendrías", "tendría", "tendríamos", "tendríais", "tendrían"],
                ),
        ])
    }
}

/// Trim fields, drop blank tags and reject definitions that cannot conjugate
fn tidy(mut verb: VerbDefinition) -> Result<VerbDefinition> {
    verb.infinitive = verb.infinitive.trim().to_lowercase();
    verb.meaning = verb.meaning.trim().to_string();
    verb.tags = verb
        .tags
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    match verb.problem() {
        Some(reason) => Err(Error::InvalidVerb {
            infinitive: verb.infinitive,
            reason,
        }),
        None => Ok(verb),
    }
}
