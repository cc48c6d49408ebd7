//! Business logic services
//!
//! Pure functions and the owned workbook state that orchestrates them.
//!
//! - [`resolver`] - verb + tense + person → surface form
//! - [`answer`] - normalized answer comparison
//! - [`selection`] - tense selection and question draws
//! - [`progress`] - per-student and class-wide aggregation
//! - [`bank`] - the editable verb bank
//! - [`workbook`] - owned state mutated through [`workbook::Action`]s

pub mod answer;
pub mod bank;
pub mod progress;
pub mod resolver;
pub mod selection;
pub mod workbook;

pub use answer::{check_answer, normalize};
pub use bank::{ImportReport, VerbBank};
pub use progress::{
    ClassRow, DEFAULT_RECENT_WINDOW, StudentSummary, TenseStats, accuracy, class_summary,
    summarize, tense_breakdown,
};
pub use resolver::{NO_KNOWN_FORM, TenseRow, conjugate_all, display_form, resolve};
pub use selection::{Question, TenseSelection, draw_question};
pub use workbook::{Action, Feedback, Outcome, Workbook, evaluate};
