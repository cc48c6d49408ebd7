//! Grammatical persons
//!
//! Six persons in canonical order. The ordinal (0-5) indexes every suffix
//! table, so the order here is load-bearing.

use serde::{Deserialize, Serialize};

use super::fold_keyword;

/// A grammatical person
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    /// 1st singular (yo)
    Yo,
    /// 2nd singular (tú)
    Tu,
    /// 3rd singular (él, ella, usted)
    El,
    /// 1st plural (nosotros)
    Nosotros,
    /// 2nd plural (vosotros)
    Vosotros,
    /// 3rd plural (ellos, ellas, ustedes)
    Ellos,
}

impl Person {
    /// All persons in ordinal order
    pub const ALL: [Self; 6] = [
        Self::Yo,
        Self::Tu,
        Self::El,
        Self::Nosotros,
        Self::Vosotros,
        Self::Ellos,
    ];

    /// Position 0-5 used to index suffix tables
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Yo => 0,
            Self::Tu => 1,
            Self::El => 2,
            Self::Nosotros => 3,
            Self::Vosotros => 4,
            Self::Ellos => 5,
        }
    }

    /// The person at `ordinal`, if in range
    #[must_use]
    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Yo),
            1 => Some(Self::Tu),
            2 => Some(Self::El),
            3 => Some(Self::Nosotros),
            4 => Some(Self::Vosotros),
            5 => Some(Self::Ellos),
            _ => None,
        }
    }

    /// Subject pronoun(s) shown in prompts
    #[must_use]
    pub const fn pronoun(self) -> &'static str {
        match self {
            Self::Yo => "yo",
            Self::Tu => "tú",
            Self::El => "él/ella/usted",
            Self::Nosotros => "nosotros",
            Self::Vosotros => "vosotros",
            Self::Ellos => "ellos/ellas/ustedes",
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pronoun())
    }
}

impl std::str::FromStr for Person {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.trim().parse::<usize>() {
            return Self::from_ordinal(n)
                .ok_or_else(|| format!("Invalid person ordinal: {n}. Use 0-5"));
        }
        match fold_keyword(s).as_str() {
            "yo" => Ok(Self::Yo),
            "tu" => Ok(Self::Tu),
            "el" | "ella" | "usted" | "el_ella" | "el_ella_usted" => Ok(Self::El),
            "nosotros" | "nosotras" => Ok(Self::Nosotros),
            "vosotros" | "vosotras" => Ok(Self::Vosotros),
            "ellos" | "ellas" | "ustedes" | "ellos_ellas" | "ellos_ellas_ustedes" => {
                Ok(Self::Ellos)
            },
            _ => Err(format!(
                "Invalid person: {s}. Use 0-5 or: yo, tu, el, nosotros, vosotros, ellos"
            )),
        }
    }
}
