//! Tests for the verb bank

use conjuga::Error;
use conjuga::core::models::{ConjugationClass, Person, Tense, VerbDefinition};
use conjuga::core::services::{VerbBank, resolve};

use crate::common::hablar;

#[test]
fn test_seeded_bank_has_regular_and_irregular_verbs() {
    let bank = VerbBank::seeded();
    assert!(bank.get("hablar").is_some());
    assert!(bank.get("comer").is_some());
    assert!(bank.get("vivir").is_some());
    assert_eq!(bank.get("ser").unwrap().class, ConjugationClass::Irregular);
    assert!(bank.pool(Some("irregular")).iter().all(|v| v.class == ConjugationClass::Irregular));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let bank = VerbBank::seeded();
    assert!(bank.get("  HABLAR ").is_some());
}

#[test]
fn test_add_normalizes_and_rejects_duplicates() {
    let mut bank = VerbBank::new();
    bank.add(VerbDefinition::new(" Cantar ", ConjugationClass::Ar).with_tags(["", " music "]))
        .unwrap();
    let cantar = bank.get("cantar").unwrap();
    assert_eq!(cantar.infinitive, "cantar");
    assert_eq!(cantar.tags, vec!["music"]);

    let err = bank.add(VerbDefinition::new("cantar", ConjugationClass::Ar)).unwrap_err();
    assert_eq!(err, Error::DuplicateVerb("cantar".to_string()));
}

#[test]
fn test_add_rejects_class_mismatch() {
    let mut bank = VerbBank::new();
    let err = bank.add(VerbDefinition::new("comer", ConjugationClass::Ar)).unwrap_err();
    assert!(matches!(err, Error::InvalidVerb { .. }));
    assert!(bank.is_empty());
}

#[test]
fn test_add_rejects_non_letter_infinitive() {
    let mut bank = VerbBank::new();
    let err = bank.add(VerbDefinition::new("[{infinitive:cantar", ConjugationClass::Ar)).unwrap_err();
    assert!(matches!(err, Error::InvalidVerb { .. }));
    assert!(bank.is_empty());
}

#[test]
fn test_irregular_class_accepts_any_infinitive() {
    let mut bank = VerbBank::new();
    bank.add(VerbDefinition::new("oír", ConjugationClass::Irregular)).unwrap();
    assert_eq!(bank.len(), 1);
}

#[test]
fn test_from_verbs_drops_invalid_and_duplicate_entries() {
    let bank = VerbBank::from_verbs([
        hablar(),
        VerbDefinition::new("comer", ConjugationClass::Ar),
        VerbDefinition::new("Hablar", ConjugationClass::Ar).with_meaning("again"),
        VerbDefinition::new("vivir", ConjugationClass::Ir),
    ]);
    assert_eq!(bank.len(), 2);
    assert!(bank.get("comer").is_none());
    assert_ne!(bank.get("hablar").unwrap().meaning, "again");
    assert!(bank.get("vivir").is_some());
}

#[test]
fn test_update_and_remove() {
    let mut bank = VerbBank::from_verbs([hablar()]);
    bank.update("hablar", hablar().with_meaning("to talk")).unwrap();
    assert_eq!(bank.get("hablar").unwrap().meaning, "to talk");

    bank.remove("hablar").unwrap();
    assert!(bank.is_empty());
    assert_eq!(bank.remove("hablar").unwrap_err(), Error::VerbNotFound("hablar".to_string()));
}

#[test]
fn test_update_cannot_rename_onto_another_verb() {
    let comer = VerbDefinition::new("comer", ConjugationClass::Er);
    let mut bank = VerbBank::from_verbs([hablar(), comer.clone()]);
    let err = bank.update("hablar", comer).unwrap_err();
    assert_eq!(err, Error::DuplicateVerb("comer".to_string()));
}

#[test]
fn test_override_cells() {
    let mut bank = VerbBank::from_verbs([hablar()]);
    bank.set_override("hablar", Tense::Present, Person::Yo, "X").unwrap();
    assert_eq!(resolve(bank.get("hablar").unwrap(), Tense::Present, Person::Yo), "X");

    let previous = bank.clear_override("hablar", Tense::Present, Person::Yo).unwrap();
    assert_eq!(previous.as_deref(), Some("X"));
    assert_eq!(resolve(bank.get("hablar").unwrap(), Tense::Present, Person::Yo), "hablo");
}

#[test]
fn test_pool_filters_by_tag() {
    let bank = VerbBank::seeded();
    let er: Vec<&str> = bank.pool(Some("er")).iter().map(|v| v.infinitive.as_str()).collect();
    assert_eq!(er, vec!["comer", "aprender", "beber"]);
    assert_eq!(bank.pool(None).len(), bank.len());
    assert!(bank.pool(Some("nope")).is_empty());
}

#[test]
fn test_merge_adds_replaces_and_skips() {
    let mut bank = VerbBank::from_verbs([hablar()]);
    let report = bank.merge([
        hablar().with_meaning("to talk"),
        VerbDefinition::new("cantar", ConjugationClass::Ar),
        VerbDefinition::new("x", ConjugationClass::Ar),
    ]);
    assert_eq!((report.added, report.replaced, report.skipped), (1, 1, 1));
    assert_eq!(bank.get("hablar").unwrap().meaning, "to talk");
    assert_eq!(bank.len(), 2);
}
