//! Tests for tense selection and question drawing

use conjuga::core::models::{ConjugationClass, Person, Tense, VerbDefinition};
use conjuga::core::services::{Question, TenseSelection, draw_question};

use crate::common::{ScriptedRandom, hablar};

// =============================================================================
// Tense Selection
// =============================================================================

#[test]
fn test_selection_starts_with_default() {
    let selection = TenseSelection::new(Tense::Present);
    assert_eq!(selection.tenses(), &[Tense::Present]);
}

#[test]
fn test_toggle_last_tense_restores_default() {
    let mut selection = TenseSelection::new(Tense::Present);
    selection.toggle(Tense::Preterite);
    assert_eq!(selection.tenses(), &[Tense::Present, Tense::Preterite]);

    assert!(!selection.toggle(Tense::Present));
    assert!(!selection.toggle(Tense::Preterite));
    assert_eq!(selection.tenses(), &[Tense::Present]);
}

#[test]
fn test_toggle_off_default_alone_keeps_it() {
    let mut selection = TenseSelection::new(Tense::Future);
    assert!(selection.toggle(Tense::Future));
    assert_eq!(selection.tenses(), &[Tense::Future]);
}

#[test]
fn test_set_keeps_canonical_order() {
    let mut selection = TenseSelection::default();
    selection.set([Tense::Conditional, Tense::Present, Tense::Imperfect]);
    assert_eq!(
        selection.tenses(),
        &[Tense::Present, Tense::Imperfect, Tense::Conditional]
    );
}

#[test]
fn test_set_empty_restores_default() {
    let mut selection = TenseSelection::from_tenses([Tense::Future], Tense::Preterite);
    selection.set(Vec::new());
    assert_eq!(selection.tenses(), &[Tense::Preterite]);
    assert_eq!(selection.default_tense(), Tense::Preterite);
}

// =============================================================================
// Drawing
// =============================================================================

#[test]
fn test_draw_from_empty_pool_is_none() {
    let mut rng = ScriptedRandom::new(&[0]);
    assert!(draw_question(&[], &TenseSelection::default(), &mut rng).is_none());
}

#[test]
fn test_draw_uses_verb_then_tense_then_person() {
    let comer = VerbDefinition::new("comer", ConjugationClass::Er);
    let hablar = hablar();
    let pool = [&hablar, &comer];
    let selection = TenseSelection::from_tenses([Tense::Present, Tense::Preterite], Tense::Present);
    let mut rng = ScriptedRandom::new(&[1, 1, 2]);

    let question = draw_question(&pool, &selection, &mut rng).unwrap();
    assert_eq!(question.verb.infinitive, "comer");
    assert_eq!(question.tense, Tense::Preterite);
    assert_eq!(question.person, Person::El);
}

#[test]
fn test_draw_only_selected_tenses() {
    let hablar = hablar();
    let pool = [&hablar];
    let selection = TenseSelection::from_tenses([Tense::Imperfect], Tense::Present);
    let mut rng = ScriptedRandom::new(&[0, 1, 2, 3, 4, 5, 6, 7]);

    for _ in 0..20 {
        let question = draw_question(&pool, &selection, &mut rng).unwrap();
        assert_eq!(question.tense, Tense::Imperfect);
    }
}

#[test]
fn test_draw_with_replacement_repeats() {
    let hablar = hablar();
    let pool = [&hablar];
    let selection = TenseSelection::default();
    let mut rng = ScriptedRandom::new(&[0]);

    let first = draw_question(&pool, &selection, &mut rng).unwrap();
    let second = draw_question(&pool, &selection, &mut rng).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_prompt_shows_meaning_tense_and_pronoun() {
    let question = Question::new(hablar(), Tense::Present, Person::Yo);
    assert_eq!(question.prompt(), "hablar (to speak) · presente · yo");
}
