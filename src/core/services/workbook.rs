//! # Workbook
//!
//! All mutable state of a practice/teaching session in one owned struct:
//!
//! ```text
//! Workbook
//! ├── store: S                      // KeyValueStore port
//! ├── bank: VerbBank                // teacher-editable verbs
//! ├── roster: Vec<Student>          // known students
//! ├── attempts: Vec<PracticeAttempt> // append-only log
//! ├── active: Option<String>        // logged-in student id
//! └── selection: TenseSelection     // tenses being practiced
//! ```
//!
//! Every user action is an [`Action`] handed to [`Workbook::dispatch`]. After
//! a successful mutation the touched slots are written back through the
//! store. Write failures are logged and ignored: the in-memory state stands.

use log::{debug, info};
use serde::Serialize;

use crate::config::Config;
use crate::core::models::{
    Person, PracticeAttempt, Student, Tense, VerbDefinition, student_id,
};
use crate::core::ports::{KeyValueStore, RandomSource, Slot, load_slot, save_slot};
use crate::core::services::answer::check_answer;
use crate::core::services::bank::{ImportReport, VerbBank};
use crate::core::services::progress::{self, StudentSummary, TenseStats};
use crate::core::services::resolver::resolve;
use crate::core::services::selection::{Question, TenseSelection, draw_question};
use crate::error::{Error, Result};

/// Everything that can happen to a workbook
#[derive(Debug, Clone)]
pub enum Action {
    /// Explicit-submit login; creates the student on first use
    Login {
        /// Display name as typed
        name: String,
    },
    /// Clear the active student
    Logout,
    /// Add a verb to the bank
    AddVerb(VerbDefinition),
    /// Replace a verb in the bank
    UpdateVerb {
        /// Infinitive of the verb being replaced
        infinitive: String,
        /// The new definition
        verb: VerbDefinition,
    },
    /// Remove a verb from the bank
    RemoveVerb {
        /// Infinitive of the verb to remove
        infinitive: String,
    },
    /// Set one override cell (an empty form clears it)
    SetOverride {
        /// Verb to edit
        infinitive: String,
        /// Cell tense
        tense: Tense,
        /// Cell person
        person: Person,
        /// Explicit surface form
        form: String,
    },
    /// Clear one override cell
    ClearOverride {
        /// Verb to edit
        infinitive: String,
        /// Cell tense
        tense: Tense,
        /// Cell person
        person: Person,
    },
    /// Merge imported verbs into the bank
    ImportVerbs(Vec<VerbDefinition>),
    /// Toggle one tense in the practice selection
    ToggleTense(Tense),
    /// Replace the practice selection
    SelectTenses(Vec<Tense>),
    /// Answer a question as the active student
    Submit {
        /// The question being answered
        question: Question,
        /// What the student typed
        answer: String,
    },
    /// Drop a student's attempts (`None` = active student)
    ResetProgress {
        /// Name or identity of the student
        student: Option<String>,
    },
}

/// Result of checking one answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Infinitive of the practiced verb
    pub verb: String,
    /// Practiced tense
    pub tense: Tense,
    /// Practiced person
    pub person: Person,
    /// Resolved form ("" when no form is known)
    pub expected: String,
    /// What was typed
    pub submitted: String,
    /// Whether it matched
    pub correct: bool,
}

impl Feedback {
    /// Whether a form could be resolved for the question
    #[must_use]
    pub fn resolved(&self) -> bool {
        !self.expected.is_empty()
    }
}

/// Check an answer without recording it
#[must_use]
pub fn evaluate(question: &Question, answer: &str) -> Feedback {
    let expected = resolve(&question.verb, question.tense, question.person);
    Feedback {
        verb: question.verb.infinitive.clone(),
        tense: question.tense,
        person: question.person,
        correct: check_answer(answer, &expected),
        expected,
        submitted: answer.to_string(),
    }
}

/// What a dispatched action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A student is now active
    LoggedIn {
        /// The roster entry
        student: Student,
        /// Whether the entry was created by this login
        created: bool,
    },
    /// Nobody is active (carries who was, if anyone)
    LoggedOut(Option<Student>),
    /// The bank changed
    BankChanged,
    /// Verbs were merged into the bank
    Imported(ImportReport),
    /// The practice selection is now this (never empty)
    TensesSelected(Vec<Tense>),
    /// An answer was checked and recorded
    Answered(Feedback),
    /// A student's attempts were dropped
    ProgressReset {
        /// Student identity
        student: String,
        /// Number of attempts removed
        removed: usize,
    },
}

/// Owned session state backed by a [`KeyValueStore`]
#[derive(Debug)]
pub struct Workbook<S> {
    store: S,
    bank: VerbBank,
    roster: Vec<Student>,
    attempts: Vec<PracticeAttempt>,
    active: Option<String>,
    selection: TenseSelection,
    min_name_length: usize,
}

impl<S: KeyValueStore> Workbook<S> {
    /// Load every slot from `store`, falling back to defaults
    ///
    /// A missing bank is seeded; a dangling active-student pointer is dropped.
    pub fn open(store: S, config: &Config) -> Self {
        let bank: VerbBank = load_slot(&store, Slot::VerbBank, VerbBank::seeded());
        let roster: Vec<Student> = load_slot(&store, Slot::Students, Vec::new());
        let attempts: Vec<PracticeAttempt> = load_slot(&store, Slot::Attempts, Vec::new());
        let active: Option<String> = load_slot::<_, Option<String>>(&store, Slot::ActiveStudent, None)
            .filter(|id| roster.iter().any(|s| s.id == *id));

        debug!(
            "Opened workbook: {} verbs, {} students, {} attempts",
            bank.len(),
            roster.len(),
            attempts.len()
        );

        Self {
            store,
            bank,
            roster,
            attempts,
            active,
            selection: TenseSelection::from_tenses(
                config.default_tenses.iter().copied(),
                config.default_tense,
            ),
            min_name_length: config.min_name_length.max(1),
        }
    }

    /// Apply an action, persisting the slots it touched
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        debug!("Dispatching {action:?}");
        let (outcome, touched) = self.apply(action)?;
        for slot in touched {
            self.persist(*slot);
        }
        Ok(outcome)
    }

    /// Submit an answer as the active student and return the feedback
    ///
    /// Same effect as dispatching [`Action::Submit`].
    pub fn submit(&mut self, question: &Question, answer: &str) -> Result<Feedback> {
        let feedback = self.record(question, answer)?;
        self.persist(Slot::Attempts);
        Ok(feedback)
    }

    /// Merge verbs into the bank and return the counts
    ///
    /// Same effect as dispatching [`Action::ImportVerbs`].
    pub fn import(&mut self, verbs: Vec<VerbDefinition>) -> ImportReport {
        let report = self.merge(verbs);
        self.persist(Slot::VerbBank);
        report
    }

    fn apply(&mut self, action: Action) -> Result<(Outcome, &'static [Slot])> {
        match action {
            Action::Login { name } => {
                let (student, created) = self.login(&name)?;
                Ok((Outcome::LoggedIn { student, created }, &[Slot::Students, Slot::ActiveStudent]))
            },
            Action::Logout => {
                let previous = self.active_student().cloned();
                self.active = None;
                Ok((Outcome::LoggedOut(previous), &[Slot::ActiveStudent]))
            },
            Action::AddVerb(verb) => {
                self.bank.add(verb)?;
                Ok((Outcome::BankChanged, &[Slot::VerbBank]))
            },
            Action::UpdateVerb { infinitive, verb } => {
                self.bank.update(&infinitive, verb)?;
                Ok((Outcome::BankChanged, &[Slot::VerbBank]))
            },
            Action::RemoveVerb { infinitive } => {
                self.bank.remove(&infinitive)?;
                Ok((Outcome::BankChanged, &[Slot::VerbBank]))
            },
            Action::SetOverride {
                infinitive,
                tense,
                person,
                form,
            } => {
                self.bank.set_override(&infinitive, tense, person, &form)?;
                Ok((Outcome::BankChanged, &[Slot::VerbBank]))
            },
            Action::ClearOverride {
                infinitive,
                tense,
                person,
            } => {
                self.bank.clear_override(&infinitive, tense, person)?;
                Ok((Outcome::BankChanged, &[Slot::VerbBank]))
            },
            Action::ImportVerbs(verbs) => Ok((Outcome::Imported(self.merge(verbs)), &[Slot::VerbBank])),
            Action::ToggleTense(tense) => {
                self.selection.toggle(tense);
                Ok((Outcome::TensesSelected(self.selection.tenses().to_vec()), &[]))
            },
            Action::SelectTenses(tenses) => {
                self.selection.set(tenses);
                Ok((Outcome::TensesSelected(self.selection.tenses().to_vec()), &[]))
            },
            Action::Submit { question, answer } => {
                Ok((Outcome::Answered(self.record(&question, &answer)?), &[Slot::Attempts]))
            },
            Action::ResetProgress { student } => {
                let id = match student {
                    Some(name) => {
                        let id = student_id(&name);
                        let known = self.roster.iter().any(|s| s.id == id)
                            || self.attempts.iter().any(|a| a.student == id);
                        if !known {
                            return Err(Error::UnknownStudent(name.trim().to_string()));
                        }
                        id
                    },
                    None => self.active.clone().ok_or(Error::NoActiveStudent)?,
                };
                let before = self.attempts.len();
                self.attempts.retain(|a| a.student != id);
                let removed = before - self.attempts.len();
                Ok((Outcome::ProgressReset { student: id, removed }, &[Slot::Attempts]))
            },
        }
    }

    fn record(&mut self, question: &Question, answer: &str) -> Result<Feedback> {
        let student = self.active.clone().ok_or(Error::NoActiveStudent)?;
        let feedback = evaluate(question, answer);
        self.attempts.push(PracticeAttempt::now(
            student,
            feedback.verb.clone(),
            feedback.tense,
            feedback.person,
            feedback.expected.clone(),
            feedback.submitted.clone(),
            feedback.correct,
        ));
        Ok(feedback)
    }

    fn merge(&mut self, verbs: Vec<VerbDefinition>) -> ImportReport {
        let report = self.bank.merge(verbs);
        info!(
            "Imported verbs: {} added, {} replaced, {} skipped",
            report.added, report.replaced, report.skipped
        );
        report
    }

    fn login(&mut self, name: &str) -> Result<(Student, bool)> {
        let trimmed = name.trim();
        if trimmed.chars().count() < self.min_name_length {
            return Err(Error::InvalidName {
                min: self.min_name_length,
            });
        }

        let id = student_id(trimmed);
        let (student, created) = match self.roster.iter().find(|s| s.id == id) {
            Some(existing) => (existing.clone(), false),
            None => {
                let student = Student::new(trimmed);
                self.roster.push(student.clone());
                (student, true)
            },
        };
        self.active = Some(student.id.clone());
        Ok((student, created))
    }

    fn persist(&self, slot: Slot) {
        match slot {
            Slot::VerbBank => save_slot(&self.store, slot, &self.bank),
            Slot::Students => save_slot(&self.store, slot, &self.roster),
            Slot::Attempts => save_slot(&self.store, slot, &self.attempts),
            Slot::ActiveStudent => save_slot(&self.store, slot, &self.active),
        }
    }

    /// Draw a question from the bank (optionally restricted to `tag`)
    pub fn draw<R>(&self, tag: Option<&str>, rng: &mut R) -> Result<Question>
    where
        R: RandomSource + ?Sized,
    {
        draw_question(&self.bank.pool(tag), &self.selection, rng).ok_or(Error::EmptyPool)
    }

    /// Build a question for a named verb
    pub fn question(&self, infinitive: &str, tense: Tense, person: Person) -> Result<Question> {
        let verb = self
            .bank
            .get(infinitive)
            .ok_or_else(|| Error::VerbNotFound(infinitive.trim().to_string()))?;
        Ok(Question::new(verb.clone(), tense, person))
    }

    /// Totals for a student (by name or identity)
    #[must_use]
    pub fn summary(&self, student: &str) -> StudentSummary {
        progress::summarize(&self.attempts, &student_id(student))
    }

    /// Recent per-tense breakdown for a student (by name or identity)
    #[must_use]
    pub fn breakdown(&self, student: &str, window: usize) -> Vec<TenseStats> {
        progress::tense_breakdown(&self.attempts, &student_id(student), window)
    }

    /// The student's attempts in log order
    #[must_use]
    pub fn attempts_for(&self, student: &str) -> Vec<&PracticeAttempt> {
        let id = student_id(student);
        self.attempts.iter().filter(|a| a.student == id).collect()
    }

    /// Look up a rostered student by name or identity
    #[must_use]
    pub fn student(&self, name: &str) -> Option<&Student> {
        let id = student_id(name);
        self.roster.iter().find(|s| s.id == id)
    }

    /// The logged-in student, if any
    #[must_use]
    pub fn active_student(&self) -> Option<&Student> {
        self.active
            .as_deref()
            .and_then(|id| self.roster.iter().find(|s| s.id == id))
    }

    /// The verb bank
    #[must_use]
    pub const fn bank(&self) -> &VerbBank {
        &self.bank
    }

    /// The roster
    #[must_use]
    pub fn roster(&self) -> &[Student] {
        &self.roster
    }

    /// The full attempt log
    #[must_use]
    pub fn attempts(&self) -> &[PracticeAttempt] {
        &self.attempts
    }

    /// The current tense selection
    #[must_use]
    pub const fn selection(&self) -> &TenseSelection {
        &self.selection
    }

    /// Give back the backing store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
