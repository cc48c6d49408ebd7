//! Conjugation classes
//!
//! Which suffix table a verb uses. `Irregular` has no table at all: its
//! stem-based forms exist only as overrides.

use serde::{Deserialize, Serialize};

use super::fold_keyword;

/// Conjugation class of a verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConjugationClass {
    /// First conjugation (hablar)
    #[serde(rename = "-ar", alias = "ar")]
    Ar,
    /// Second conjugation (comer)
    #[serde(rename = "-er", alias = "er")]
    Er,
    /// Third conjugation (vivir)
    #[serde(rename = "-ir", alias = "ir")]
    Ir,
    /// No rule-based stem forms
    #[serde(rename = "irregular")]
    Irregular,
}

impl ConjugationClass {
    /// The infinitive ending for regular classes
    #[must_use]
    pub const fn ending(self) -> Option<&'static str> {
        match self {
            Self::Ar => Some("ar"),
            Self::Er => Some("er"),
            Self::Ir => Some("ir"),
            Self::Irregular => None,
        }
    }

    /// Infer a regular class from an infinitive's ending
    #[must_use]
    pub fn infer(infinitive: &str) -> Option<Self> {
        let lower = infinitive.trim().to_lowercase();
        [Self::Ar, Self::Er, Self::Ir]
            .into_iter()
            .find(|class| class.ending().is_some_and(|ending| lower.ends_with(ending)))
    }
}

impl std::fmt::Display for ConjugationClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ar => write!(f, "-ar"),
            Self::Er => write!(f, "-er"),
            Self::Ir => write!(f, "-ir"),
            Self::Irregular => write!(f, "irregular"),
        }
    }
}

impl std::str::FromStr for ConjugationClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_keyword(s).trim_start_matches('_') {
            "ar" => Ok(Self::Ar),
            "er" => Ok(Self::Er),
            "ir" => Ok(Self::Ir),
            "irregular" | "irreg" | "irr" => Ok(Self::Irregular),
            _ => Err(format!("Invalid verb type: {s}. Use: -ar, -er, -ir, irregular")),
        }
    }
}
