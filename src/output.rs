//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Person, Student, Tense, VerbDefinition};
use crate::core::services::{
    ClassRow, Feedback, ImportReport, StudentSummary, TenseRow, TenseStats, display_form,
};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Result of checking one answer
#[derive(Debug, Serialize)]
pub struct AnswerResult {
    /// The checked answer
    #[serde(flatten)]
    pub feedback: Feedback,
    /// Whether the attempt was written to the log
    pub recorded: bool,
}

impl AnswerResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human_line()),
            OutputMode::Json => print_json(self),
        }
    }

    /// One line of feedback, as shown after each practice answer
    #[must_use]
    pub fn human_line(&self) -> String {
        let f = &self.feedback;
        if f.correct {
            format!("{} {}", "✓ Correct:".green().bold(), f.expected)
        } else if f.resolved() {
            format!("{} expected {}", "✗ Incorrect:".red().bold(), f.expected.bold())
        } else {
            format!("{} {}", "✗".red().bold(), display_form(&f.expected))
        }
    }
}

/// A verb's full conjugation table
#[derive(Debug, Serialize)]
pub struct ConjugationResult {
    /// The verb
    pub verb: VerbDefinition,
    /// Rows for the requested tenses
    pub rows: Vec<TenseRow>,
}

impl ConjugationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let verb = &self.verb;
        if verb.meaning.is_empty() {
            println!("{} [{}]", verb.infinitive.bold(), verb.class);
        } else {
            println!("{} ({}) [{}]", verb.infinitive.bold(), verb.meaning, verb.class);
        }
        if !verb.tags.is_empty() {
            println!("  tags: {}", verb.tags.join(", "));
        }
        for row in &self.rows {
            println!("\n  {}", row.tense.spanish_name().underline());
            for (person, form) in Person::ALL.iter().zip(&row.forms) {
                let marker = if verb.overrides.get(row.tense, *person).is_some() { "*" } else { " " };
                println!("   {marker}{:<22} {}", person.pronoun(), display_form(form));
            }
        }
        if !verb.overrides.is_empty() {
            println!("\n  * custom form");
        }
    }
}

/// Summary line for one verb
#[derive(Debug, Serialize)]
pub struct VerbInfo {
    /// Infinitive
    pub infinitive: String,
    /// English gloss
    pub meaning: String,
    /// Conjugation class
    #[serde(rename = "type")]
    pub class: String,
    /// Tags
    pub tags: Vec<String>,
    /// Number of override cells
    pub overrides: usize,
}

impl From<&VerbDefinition> for VerbInfo {
    fn from(verb: &VerbDefinition) -> Self {
        Self {
            infinitive: verb.infinitive.clone(),
            meaning: verb.meaning.clone(),
            class: verb.class.to_string(),
            tags: verb.tags.clone(),
            overrides: verb.overrides.len(),
        }
    }
}

/// Result of a verb list operation
#[derive(Debug, Serialize)]
pub struct VerbListResult {
    /// Number of verbs listed
    pub total: usize,
    /// Listed verbs
    pub verbs: Vec<VerbInfo>,
}

impl VerbListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.verbs.is_empty() {
                    println!("No verbs found.");
                    return;
                }
                for v in &self.verbs {
                    let custom = if v.overrides > 0 {
                        format!(" ({} custom forms)", v.overrides)
                    } else {
                        String::new()
                    };
                    println!("  {:<12} {:<10} {}{custom}", v.infinitive, v.class, v.meaning);
                }
                println!("\n{} verb(s)", self.total);
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of a student list operation
#[derive(Debug, Serialize)]
pub struct StudentListResult {
    /// Identity of the logged-in student
    pub active: Option<String>,
    /// Roster entries with their totals
    pub students: Vec<StudentInfo>,
}

/// A roster entry with totals
#[derive(Debug, Serialize)]
pub struct StudentInfo {
    /// Roster entry
    #[serde(flatten)]
    pub student: Student,
    /// Totals across the log
    pub summary: StudentSummary,
}

impl StudentListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.students.is_empty() {
                    println!("No students yet. Log in with: conjuga student login <name>");
                    return;
                }
                for s in &self.students {
                    let marker = if self.active.as_deref() == Some(s.student.id.as_str()) {
                        "*"
                    } else {
                        " "
                    };
                    println!(
                        "{marker} {:<20} {:>4} answered  {:>3}%",
                        s.student.name, s.summary.total, s.summary.accuracy
                    );
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// A student's progress report
#[derive(Debug, Serialize)]
pub struct ProgressResult {
    /// Display name
    pub student: String,
    /// Totals across the log
    pub summary: StudentSummary,
    /// How many recent attempts the breakdown covers
    pub window: usize,
    /// Per-tense correct/total within the window
    pub by_tense: Vec<TenseStats>,
}

impl ProgressResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let s = &self.summary;
        println!("{}", self.student.bold());
        println!("  {} answered, {} correct, {}% accuracy", s.total, s.correct, s.accuracy);
        if self.by_tense.is_empty() {
            return;
        }
        println!("\n  Last {} attempts by tense:", self.window);
        for t in &self.by_tense {
            println!("    {:<12} {}/{}", t.tense.spanish_name(), t.correct, t.total);
        }
    }
}

/// The class summary
#[derive(Debug, Serialize)]
pub struct ClassResult {
    /// One row per student
    pub rows: Vec<ClassRow>,
}

impl ClassResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.rows.is_empty() {
                    println!("No students yet.");
                    return;
                }
                for r in &self.rows {
                    println!("  {:<20} {:>4} answered  {:>3}%", r.name, r.total, r.accuracy);
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of an import
#[derive(Debug, Serialize)]
pub struct ImportResult {
    /// Source file
    pub source: String,
    /// Merge counts
    #[serde(flatten)]
    pub report: ImportReport,
}

impl ImportResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!(
                "Imported {}: {} added, {} replaced, {} skipped",
                self.source, self.report.added, self.report.replaced, self.report.skipped
            ),
            OutputMode::Json => print_json(self),
        }
    }
}

/// End-of-practice summary
#[derive(Debug, Serialize)]
pub struct PracticeSummary {
    /// Tenses practiced
    pub tenses: Vec<Tense>,
    /// Answers given this session
    pub answered: usize,
    /// Correct answers this session
    pub correct: usize,
    /// Rounded percentage for this session
    pub accuracy: u32,
}

impl PracticeSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!(
                "\n{} answered, {} correct ({}%)",
                self.answered, self.correct, self.accuracy
            ),
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// A successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
