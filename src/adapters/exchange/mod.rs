//! Export and bulk import
//!
//! - [`csv`] - per-student results, class summary, verb import
//! - [`json`] - verb bank export and import
//!
//! Imports never fail as a whole: unusable rows or records are skipped and
//! counted.

pub mod csv;
pub mod json;

use crate::core::models::VerbDefinition;

/// Verbs recovered from an import document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedImport {
    /// Usable definitions, in document order
    pub verbs: Vec<VerbDefinition>,
    /// Rows or records that could not be read
    pub skipped: usize,
}

/// Import document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// JSON array of verb definitions
    Json,
    /// `infinitive,meaning,type,tags` rows
    Csv,
}

impl ImportFormat {
    /// JSON when the first non-whitespace character opens an array
    ///
    /// A leading byte order mark is ignored.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if strip_bom(text).trim_start().starts_with('[') { Self::Json } else { Self::Csv }
    }
}

/// Drop a leading UTF-8 byte order mark
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Parse an import document of either format
#[must_use]
pub fn parse_verbs(text: &str) -> ParsedImport {
    let text = strip_bom(text);
    match ImportFormat::detect(text) {
        ImportFormat::Json => json::parse_verbs(text),
        ImportFormat::Csv => csv::parse_verbs(text),
    }
}
