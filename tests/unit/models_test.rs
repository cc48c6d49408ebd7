//! Tests for tense, person and class parsing

use conjuga::core::models::{ConjugationClass, Person, Student, Tense, VerbDefinition, student_id};
use test_case::test_case;

#[test_case("present", Tense::Present ; "english present")]
#[test_case("Presente", Tense::Present ; "spanish present")]
#[test_case("pretérito", Tense::Preterite ; "accented preterite")]
#[test_case("indefinido", Tense::Preterite ; "indefinido")]
#[test_case("imperfecto", Tense::Imperfect ; "spanish imperfect")]
#[test_case("FUTURE", Tense::Future ; "uppercase future")]
#[test_case("condicional", Tense::Conditional ; "spanish conditional")]
fn test_parse_tense(input: &str, expected: Tense) {
    assert_eq!(input.parse::<Tense>().unwrap(), expected);
}

#[test_case("0", Person::Yo ; "ordinal zero")]
#[test_case("5", Person::Ellos ; "ordinal five")]
#[test_case("tú", Person::Tu ; "accented tu")]
#[test_case("usted", Person::El ; "usted")]
#[test_case("él/ella", Person::El ; "el ella")]
#[test_case("Nosotras", Person::Nosotros ; "feminine plural")]
#[test_case("ustedes", Person::Ellos ; "ustedes")]
fn test_parse_person(input: &str, expected: Person) {
    assert_eq!(input.parse::<Person>().unwrap(), expected);
}

#[test_case("-ar", ConjugationClass::Ar ; "dash ar")]
#[test_case("er", ConjugationClass::Er ; "bare er")]
#[test_case("-IR", ConjugationClass::Ir ; "uppercase ir")]
#[test_case("irregular", ConjugationClass::Irregular ; "irregular")]
fn test_parse_class(input: &str, expected: ConjugationClass) {
    assert_eq!(input.parse::<ConjugationClass>().unwrap(), expected);
}

#[test]
fn test_parse_errors_name_the_input() {
    assert!("pluperfect".parse::<Tense>().unwrap_err().contains("pluperfect"));
    assert!("6".parse::<Person>().is_err());
    assert!("ur".parse::<ConjugationClass>().is_err());
}

#[test]
fn test_person_ordinals_round_trip_in_order() {
    for (i, person) in Person::ALL.iter().enumerate() {
        assert_eq!(person.ordinal(), i);
        assert_eq!(Person::from_ordinal(i), Some(*person));
    }
    assert_eq!(Person::from_ordinal(6), None);
}

#[test]
fn test_infer_class() {
    assert_eq!(ConjugationClass::infer("Hablar"), Some(ConjugationClass::Ar));
    assert_eq!(ConjugationClass::infer("vivir"), Some(ConjugationClass::Ir));
    assert_eq!(ConjugationClass::infer("oír"), None);
}

#[test]
fn test_student_identity_ignores_case_and_spacing() {
    assert_eq!(student_id("  Ana   María "), "ana maría");
    let student = Student::new("  Ana   María ");
    assert_eq!(student.name, "Ana María");
    assert_eq!(student.id, "ana maría");
}

#[test]
fn test_verb_json_shape() {
    let verb = VerbDefinition::new("ser", ConjugationClass::Irregular)
        .with_meaning("to be")
        .with_override(Tense::Present, Person::Yo, "soy");
    let value = serde_json::to_value(&verb).unwrap();
    assert_eq!(value["type"], "irregular");
    assert_eq!(value["overrides"]["present"]["yo"], "soy");
    assert!(value.get("tags").is_none());
}

#[test]
fn test_verb_problem() {
    assert!(VerbDefinition::new("hablar", ConjugationClass::Ar).problem().is_none());
    assert!(VerbDefinition::new("hablar", ConjugationClass::Er).problem().is_some());
    assert!(VerbDefinition::new("a", ConjugationClass::Irregular).problem().is_some());
    assert!(VerbDefinition::new("pingüinear", ConjugationClass::Ar).problem().is_none());
    assert!(VerbDefinition::new("ha-blar", ConjugationClass::Ar).problem().is_some());
    assert!(VerbDefinition::new("\u{feff}ser", ConjugationClass::Irregular).problem().is_some());
}
