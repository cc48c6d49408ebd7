//! Tests for output result structs

use conjuga::core::models::{Person, Tense};
use conjuga::core::services::{Question, VerbBank, evaluate};
use conjuga::output::{AnswerResult, VerbInfo};

fn answer(infinitive: &str, tense: Tense, person: Person, submitted: &str) -> AnswerResult {
    let bank = VerbBank::seeded();
    let verb = bank.get(infinitive).unwrap().clone();
    AnswerResult {
        feedback: evaluate(&Question::new(verb, tense, person), submitted),
        recorded: false,
    }
}

#[test]
fn test_answer_json_is_flat() {
    let result = answer("hablar", Tense::Present, Person::Yo, "HABLO ");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["verb"], "hablar");
    assert_eq!(value["tense"], "present");
    assert_eq!(value["person"], "yo");
    assert_eq!(value["expected"], "hablo");
    assert_eq!(value["correct"], true);
    assert_eq!(value["recorded"], false);
}

#[test]
fn test_human_line_shows_expected_form() {
    colored::control::set_override(false);
    let right = answer("comer", Tense::Preterite, Person::El, "comió");
    assert_eq!(right.human_line(), "✓ Correct: comió");

    let wrong = answer("hablar", Tense::Present, Person::Yo, "habló");
    assert_eq!(wrong.human_line(), "✗ Incorrect: expected hablo");
}

#[test]
fn test_verb_info_counts_custom_forms() {
    let bank = VerbBank::seeded();
    let info = VerbInfo::from(bank.get("ser").unwrap());
    assert_eq!(info.class, "irregular");
    assert_eq!(info.overrides, 18);

    let info = VerbInfo::from(bank.get("hablar").unwrap());
    assert_eq!(info.class, "-ar");
    assert_eq!(info.overrides, 0);
}
