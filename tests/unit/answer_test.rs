//! Tests for answer normalization and checking
//!
//! Uses proptest for the properties that should hold for all inputs.

use conjuga::core::services::{check_answer, normalize};
use proptest::prelude::*;
use test_case::test_case;

#[test_case("HABLO ", "hablo", true ; "case and trailing space")]
#[test_case("  hablo", "hablo", true ; "leading space")]
#[test_case("hablo", "habló", false ; "accents matter")]
#[test_case("Éramos", "éramos", true ; "accented capital")]
#[test_case("lo  siento", "lo siento", true ; "inner whitespace collapses")]
#[test_case("", "", false ; "empty expected never matches")]
#[test_case("   ", "", false ; "blank answer against empty expected")]
#[test_case("comio", "comió", false ; "missing accent")]
fn test_check_answer(submitted: &str, expected: &str, correct: bool) {
    assert_eq!(check_answer(submitted, expected), correct);
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("  Hablo\t"), "hablo");
    assert_eq!(normalize("ÉRAMOS"), "éramos");
    assert_eq!(normalize("a \n b"), "a b");
}

proptest! {
    /// Normalizing twice changes nothing
    #[test]
    fn normalize_is_idempotent(s in "[ a-zA-ZáéíóúÁÉÍÓÚñÑ\t\n]{0,40}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
    }

    /// Normalized text has no edge or doubled whitespace
    #[test]
    fn normalize_leaves_single_spaces(s in "[ a-zA-Zñ\t]{0,40}") {
        let n = normalize(&s);
        prop_assert_eq!(n.trim(), n.as_str());
        prop_assert!(!n.contains("  "));
        prop_assert!(!n.contains('\t'));
    }

    /// Any casing or padding of a non-empty form is accepted
    #[test]
    fn padded_uppercase_answer_matches(
        form in "[a-zñáéíóú]{1,12}",
        left in " {0,3}",
        right in " {0,3}"
    ) {
        let submitted = format!("{left}{}{right}", form.to_uppercase());
        prop_assert!(check_answer(&submitted, &form));
    }

    /// Nothing matches an empty expected form
    #[test]
    fn empty_expected_never_matches(submitted in ".{0,20}") {
        prop_assert!(!check_answer(&submitted, ""));
    }
}
