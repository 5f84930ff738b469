//! Tests for line-to-record parsing.

use formulary_extract::parse_line;
use formulary_model::{Category, DoseForm, Schedule, STRENGTH_UNKNOWN};

#[test]
fn parses_generic_strength_form_line() {
    let record = parse_line("Amoxicillin 500mg capsule").expect("record");
    assert_eq!(record.generic_name, "Amoxicillin");
    assert_eq!(record.brand_name, "Amoxicillin");
    assert_eq!(record.strength, "500mg");
    assert_eq!(record.form, DoseForm::Capsule);
    assert_eq!(record.category, Category::Antibiotics);
    assert_eq!(record.schedule, Schedule::S3);
    assert_eq!(record.description, "Amoxicillin 500mg capsule");
    assert_eq!(record.common_dosage, "500mg");
    assert_eq!(record.common_frequency, "As prescribed");
}

#[test]
fn parses_brand_name_from_parentheses() {
    let record = parse_line("Paracetamol (Panado) 500mg tablet").expect("record");
    assert_eq!(record.generic_name, "Paracetamol");
    assert_eq!(record.brand_name, "Panado");
    assert_eq!(record.strength, "500mg");
    assert_eq!(record.form, DoseForm::Tablet);
    assert_eq!(record.category, Category::Analgesics);
    assert_eq!(record.schedule, Schedule::S0);
}

#[test]
fn short_lines_are_always_rejected() {
    assert!(parse_line("5mg tab").is_none());
    assert!(parse_line("Mg 500mg").is_none());
    assert!(parse_line("").is_none());
}

#[test]
fn bare_number_defaults_to_milligrams() {
    let record = parse_line("Fluoxetine capsules pack of 30").expect("record");
    assert_eq!(record.strength, "30mg");
    assert_eq!(record.form, DoseForm::Capsule);
    assert_eq!(record.category, Category::MentalHealth);
}

#[test]
fn line_without_digits_gets_strength_sentinel() {
    let record = parse_line("Insulin soluble injection vial").expect("record");
    assert_eq!(record.strength, STRENGTH_UNKNOWN);
    assert_eq!(record.form, DoseForm::Injection);
    assert_eq!(record.category, Category::Diabetes);
}

#[test]
fn uncapitalized_line_falls_back_to_leading_tokens() {
    let record = parse_line("aspirin dispersible tablet form").expect("record");
    assert_eq!(record.generic_name, "aspirin dispersible tablet");
    assert_eq!(record.brand_name, "Generic");
    assert_eq!(record.category, Category::Analgesics);
    assert_eq!(record.schedule, Schedule::S0);
}

#[test]
fn decimal_strengths_keep_their_unit() {
    let record = parse_line("Betamethasone 0.05% topical cream").expect("record");
    assert_eq!(record.strength, "0.05%");
    assert_eq!(record.form, DoseForm::Cream);
    assert_eq!(record.category, Category::Dermatology);
}

#[test]
fn parsed_records_always_have_usable_names_and_closed_forms() {
    let lines = [
        "Amoxicillin 500mg capsule",
        "Paracetamol (Panado) 500mg tablet",
        "random 250 mg fragment of a table row",
        "Salbutamol inhaler 100mcg",
        "ferrous sulphate oral solution",
    ];
    for line in lines {
        if let Some(record) = parse_line(line) {
            assert!(record.generic_name.chars().count() >= 3, "line: {line}");
            assert!(DoseForm::ALL.contains(&record.form), "line: {line}");
        }
    }
}
