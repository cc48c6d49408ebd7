//! Conjugation resolver
//!
//! Maps (verb, tense, person) to a surface form. Resolution never fails: an
//! empty string means "no known form".
//!
//! Priority order:
//! 1. A non-empty override for the cell, verbatim
//! 2. Future/conditional: infinitive + suffix
//! 3. Present/preterite/imperfect: stem + class suffix (regular classes only)
//!
//! # Examples
//!
//! ```
//! use conjuga::core::models::{ConjugationClass, Person, Tense, VerbDefinition};
//! use conjuga::core::services::resolve;
//!
//! let comer = VerbDefinition::new("comer", ConjugationClass::Er);
//! assert_eq!(resolve(&comer, Tense::Preterite, Person::El), "comió");
//! assert_eq!(resolve(&comer, Tense::Future, Person::Yo), "comeré");
//! ```

use serde::Serialize;

use crate::core::models::{ConjugationClass, Person, Tense, VerbDefinition};

/// Shown in place of an empty (unresolved) form
pub const NO_KNOWN_FORM: &str = "(no known form)";

type Suffixes = [&'static str; 6];

const PRESENT_AR: Suffixes = ["o", "as", "a", "amos", "áis", "an"];
const PRESENT_ER: Suffixes = ["o", "es", "e", "emos", "éis", "en"];
const PRESENT_IR: Suffixes = ["o", "es", "e", "imos", "ís", "en"];
const PRETERITE_AR: Suffixes = ["é", "aste", "ó", "amos", "asteis", "aron"];
const PRETERITE_ER_IR: Suffixes = ["í", "iste", "ió", "imos", "isteis", "ieron"];
const IMPERFECT_AR: Suffixes = ["aba", "abas", "aba", "ábamos", "abais", "aban"];
const IMPERFECT_ER_IR: Suffixes = ["ía", "ías", "ía", "íamos", "íais", "ían"];
const FUTURE: Suffixes = ["é", "ás", "á", "emos", "éis", "án"];
const CONDITIONAL: Suffixes = ["ía", "ías", "ía", "íamos", "íais", "ían"];

/// Endings a bare infinitive must carry to take future/conditional suffixes
const INFINITIVE_ENDINGS: [&str; 3] = ["ar", "er", "ir"];

/// Suffix table applied directly to the infinitive, for tenses that have one
const fn infinitive_suffixes(tense: Tense) -> Option<&'static Suffixes> {
    match tense {
        Tense::Future => Some(&FUTURE),
        Tense::Conditional => Some(&CONDITIONAL),
        Tense::Present | Tense::Preterite | Tense::Imperfect => None,
    }
}

/// Suffix table applied to the stem, for stem-based tenses and regular classes
const fn stem_suffixes(tense: Tense, class: ConjugationClass) -> Option<&'static Suffixes> {
    use ConjugationClass::{Ar, Er, Ir, Irregular};
    match (tense, class) {
        (Tense::Present, Ar) => Some(&PRESENT_AR),
        (Tense::Present, Er) => Some(&PRESENT_ER),
        (Tense::Present, Ir) => Some(&PRESENT_IR),
        (Tense::Preterite, Ar) => Some(&PRETERITE_AR),
        (Tense::Preterite, Er | Ir) => Some(&PRETERITE_ER_IR),
        (Tense::Imperfect, Ar) => Some(&IMPERFECT_AR),
        (Tense::Imperfect, Er | Ir) => Some(&IMPERFECT_ER_IR),
        (_, Irregular) | (Tense::Future | Tense::Conditional, _) => None,
    }
}

/// Resolve the surface form of `verb` for `tense` and `person`
///
/// Returns an empty string when no override exists and no rule applies
/// (irregular class, or a malformed infinitive). A regular class only
/// resolves when the infinitive carries that class's ending, for every tense.
#[must_use]
pub fn resolve(verb: &VerbDefinition, tense: Tense, person: Person) -> String {
    if let Some(form) = verb.overrides.get(tense, person)
        && !form.trim().is_empty()
    {
        return form.to_string();
    }

    let infinitive = verb.infinitive.trim();
    let index = person.ordinal();

    if let Some(suffixes) = infinitive_suffixes(tense) {
        let lower = infinitive.to_lowercase();
        let ending_fits = verb.class.ending().map_or_else(
            || INFINITIVE_ENDINGS.iter().any(|ending| lower.ends_with(ending)),
            |ending| lower.ends_with(ending),
        );
        if infinitive.chars().count() < 2 || !ending_fits {
            return String::new();
        }
        return format!("{infinitive}{}", suffixes[index]);
    }

    let (Some(ending), Some(suffixes)) = (verb.class.ending(), stem_suffixes(tense, verb.class))
    else {
        return String::new();
    };
    match strip_ending(infinitive, ending) {
        Some(stem) => format!("{stem}{}", suffixes[index]),
        None => String::new(),
    }
}

/// Remove the two-character class ending, case-insensitively
///
/// `None` when the infinitive does not carry that ending or nothing is left.
fn strip_ending<'a>(infinitive: &'a str, ending: &str) -> Option<&'a str> {
    let split = infinitive.len().checked_sub(ending.len())?;
    if split == 0 || !infinitive.is_char_boundary(split) {
        return None;
    }
    let (stem, tail) = infinitive.split_at(split);
    tail.eq_ignore_ascii_case(ending).then_some(stem)
}

/// The resolved form, or [`NO_KNOWN_FORM`] when unresolved
#[must_use]
pub fn display_form(form: &str) -> &str {
    if form.is_empty() { NO_KNOWN_FORM } else { form }
}

/// One tense's six resolved forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenseRow {
    /// The tense
    pub tense: Tense,
    /// Forms in person order ("" where unresolved)
    pub forms: [String; 6],
}

/// Resolve the full tense × person table for a verb
#[must_use]
pub fn conjugate_all(verb: &VerbDefinition) -> Vec<TenseRow> {
    Tense::ALL
        .into_iter()
        .map(|tense| TenseRow {
            tense,
            forms: std::array::from_fn(|i| {
                Person::from_ordinal(i).map_or_else(String::new, |p| resolve(verb, tense, p))
            }),
        })
        .collect()
}
