//! Grammatical tenses
//!
//! Five indicative tenses. Present, preterite and imperfect conjugate from the
//! stem; future and conditional append to the bare infinitive.

use serde::{Deserialize, Serialize};

use super::fold_keyword;

/// A practiced tense
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// Presente de indicativo (hablo)
    #[default]
    Present,
    /// Pretérito indefinido (hablé)
    Preterite,
    /// Pretérito imperfecto (hablaba)
    Imperfect,
    /// Futuro simple (hablaré)
    Future,
    /// Condicional simple (hablaría)
    Conditional,
}

impl Tense {
    /// All tenses in canonical order
    pub const ALL: [Self; 5] = [
        Self::Present,
        Self::Preterite,
        Self::Imperfect,
        Self::Future,
        Self::Conditional,
    ];

    /// The Spanish name shown to learners
    #[must_use]
    pub const fn spanish_name(self) -> &'static str {
        match self {
            Self::Present => "presente",
            Self::Preterite => "pretérito",
            Self::Imperfect => "imperfecto",
            Self::Future => "futuro",
            Self::Conditional => "condicional",
        }
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Preterite => write!(f, "preterite"),
            Self::Imperfect => write!(f, "imperfect"),
            Self::Future => write!(f, "future"),
            Self::Conditional => write!(f, "conditional"),
        }
    }
}

impl std::str::FromStr for Tense {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_keyword(s).as_str() {
            "present" | "presente" => Ok(Self::Present),
            "preterite" | "preterit" | "preterito" | "indefinido" | "preterito_indefinido" => {
                Ok(Self::Preterite)
            },
            "imperfect" | "imperfecto" | "preterito_imperfecto" => Ok(Self::Imperfect),
            "future" | "futuro" => Ok(Self::Future),
            "conditional" | "condicional" => Ok(Self::Conditional),
            _ => Err(format!(
                "Invalid tense: {s}. Use: present, preterite, imperfect, future, conditional"
            )),
        }
    }
}
