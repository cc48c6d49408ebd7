//! Tests for CSV/JSON export and bulk import

use conjuga::adapters::exchange::{self, ImportFormat, csv, json};
use conjuga::core::models::{ConjugationClass, Person, Student, Tense};
use conjuga::core::services::{VerbBank, class_summary};

use crate::common::attempt;

// =============================================================================
// CSV Export
// =============================================================================

#[test]
fn test_results_csv_header_and_quoting() {
    let mut a = attempt("ana", Tense::Present, false, 0);
    a.submitted = r#"ha"blo"#.to_string();
    let text = csv::results_csv(&[&a]);
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "timestamp,student,verb,tense,person,expected,submitted,correct");
    assert!(lines[1].starts_with("\"2024-09-01T09:00:00+00:00\",\"ana\",\"hablar\",\"present\""));
    assert!(lines[1].ends_with(r#""hablo","ha""blo","false""#));
}

#[test]
fn test_results_csv_with_no_attempts_is_header_only() {
    assert_eq!(csv::results_csv(&[]), csv::RESULTS_HEADER.join(","));
}

#[test]
fn test_class_csv_rows() {
    let log = vec![
        attempt("ana", Tense::Present, true, 0),
        attempt("ana", Tense::Present, true, 1),
        attempt("ana", Tense::Present, false, 2),
    ];
    let text = csv::class_csv(&class_summary(&log, &[Student::new("Ana"), Student::new("Bea")]));
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines[0], "student,total,correct,accuracy,last_attempt");
    assert_eq!(lines[1], r#""Ana","3","2","67","2024-09-01T09:02:00+00:00""#);
    assert_eq!(lines[2], r#""Bea","0","0","0","""#);
}

// =============================================================================
// Import
// =============================================================================

#[test]
fn test_detect_format() {
    assert_eq!(ImportFormat::detect("  \n[{}]"), ImportFormat::Json);
    assert_eq!(ImportFormat::detect("infinitive,meaning"), ImportFormat::Csv);
}

#[test]
fn test_csv_import_skips_bad_rows() {
    let text = "\
infinitive,meaning,type,tags
cantar,to sing,-ar,music;regular
\"correr\",\"to run, jog\",,
,missing infinitive,ar,
nadar,to swim,xyz,
";
    let parsed = exchange::parse_verbs(text);
    assert_eq!(parsed.skipped, 2);
    assert_eq!(parsed.verbs.len(), 2);

    let cantar = &parsed.verbs[0];
    assert_eq!(cantar.class, ConjugationClass::Ar);
    assert_eq!(cantar.tags, vec!["music", "regular"]);

    let correr = &parsed.verbs[1];
    assert_eq!(correr.meaning, "to run, jog");
    assert_eq!(correr.class, ConjugationClass::Er);
}

#[test]
fn test_csv_import_without_header() {
    let parsed = csv::parse_verbs("oír,to hear,irregular,\n");
    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.verbs[0].class, ConjugationClass::Irregular);
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let json_text = "\u{feff}[{\"infinitive\": \"cantar\", \"type\": \"ar\"}]";
    assert_eq!(ImportFormat::detect(json_text), ImportFormat::Json);
    let parsed = exchange::parse_verbs(json_text);
    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.verbs[0].infinitive, "cantar");

    let csv_text = "\u{feff}infinitive,meaning,type,tags\nbailar,to dance,,\n";
    let parsed = exchange::parse_verbs(csv_text);
    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.verbs.len(), 1);
    assert_eq!(parsed.verbs[0].infinitive, "bailar");
}

#[test]
fn test_csv_import_rejects_infinitives_with_non_letters() {
    let text = "[{infinitive:cantar,meaning,ar,\nsalt ar,to jump,ar,\nreír,to laugh,irregular,\n";
    let parsed = csv::parse_verbs(text);
    assert_eq!(parsed.skipped, 2);
    assert_eq!(parsed.verbs.len(), 1);
    assert_eq!(parsed.verbs[0].infinitive, "reír");
}

#[test]
fn test_csv_import_quoted_field_spans_lines() {
    let text = "\
infinitive,meaning,type,tags
hablar,\"to speak
to talk\",ar,
comer,to eat,er,
";
    let parsed = exchange::parse_verbs(text);
    assert_eq!(parsed.skipped, 0);
    assert_eq!(parsed.verbs.len(), 2);
    assert_eq!(parsed.verbs[0].meaning, "to speak\nto talk");
    assert_eq!(parsed.verbs[1].infinitive, "comer");
}

#[test]
fn test_json_import_skips_bad_records() {
    let text = r#"[
        {"infinitive": "cantar", "meaning": "to sing", "type": "ar"},
        {"infinitive": "saber", "type": "irregular",
         "overrides": {"present": {"yo": "sé"}}},
        {"meaning": "no infinitive", "type": "ar"},
        {"infinitive": "bailar", "type": "dance"},
        42
    ]"#;
    let parsed = json::parse_verbs(text);
    assert_eq!(parsed.verbs.len(), 2);
    assert_eq!(parsed.skipped, 3);
    assert_eq!(parsed.verbs[1].overrides.get(Tense::Present, Person::Yo), Some("sé"));
}

#[test]
fn test_json_import_of_non_array_counts_one_skip() {
    let parsed = json::parse_verbs(r#"{"infinitive": "cantar"}"#);
    assert!(parsed.verbs.is_empty());
    assert_eq!(parsed.skipped, 1);
}

#[test]
fn test_json_export_reimports_whole_bank() {
    let bank = VerbBank::seeded();
    let text = json::export_verbs(&bank).unwrap();
    let parsed = exchange::parse_verbs(&text);
    assert_eq!(parsed.skipped, 0);
    assert_eq!(VerbBank::from_verbs(parsed.verbs), bank);
}
