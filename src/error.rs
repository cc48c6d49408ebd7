//! Domain errors
//!
//! Every failure in conjuga degrades to a user-visible message. These are the
//! ones a command can surface; resolution failures are not errors at all (they
//! produce an empty form).

use thiserror::Error;

/// Errors produced by workbook and verb bank operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Login name was empty or shorter than the configured minimum
    #[error("name must be at least {min} characters long")]
    InvalidName {
        /// Minimum accepted length (in characters, after trimming)
        min: usize,
    },

    /// An answer was submitted with nobody logged in
    #[error("no student is logged in")]
    NoActiveStudent,

    /// No verb with this infinitive exists in the bank
    #[error("verb not found: {0}")]
    VerbNotFound(String),

    /// A verb with this infinitive already exists in the bank
    #[error("verb already exists: {0}")]
    DuplicateVerb(String),

    /// The verb definition cannot be conjugated as declared
    #[error("invalid verb '{infinitive}': {reason}")]
    InvalidVerb {
        /// The offending infinitive
        infinitive: String,
        /// What is wrong with it
        reason: String,
    },

    /// The practice pool is empty (no verbs, or no verbs with the tag)
    #[error("no verbs available to practice")]
    EmptyPool,

    /// The named student is not on the roster
    #[error("unknown student: {0}")]
    UnknownStudent(String),
}

/// Result alias for conjuga domain operations
pub type Result<T> = std::result::Result<T, Error>;
