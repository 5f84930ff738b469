//! Tests for order-preserving deduplication.

use formulary_extract::dedupe_records;
use formulary_model::{Category, DoseForm, MedicationRecord, Schedule};
use proptest::prelude::{Strategy, prop, prop_assert_eq, proptest};

fn record(generic: &str, strength: &str) -> MedicationRecord {
    MedicationRecord {
        generic_name: generic.to_string(),
        brand_name: generic.to_string(),
        strength: strength.to_string(),
        form: DoseForm::Tablet,
        category: Category::Other,
        schedule: Schedule::S2,
        description: format!("{generic} {strength} tablet"),
        common_dosage: strength.to_string(),
        common_frequency: "As prescribed".to_string(),
    }
}

#[test]
fn first_occurrence_wins_and_order_is_stable() {
    let records = vec![
        record("Paracetamol", "500mg"),
        record("Amoxicillin", "250mg"),
        record("PARACETAMOL ", "500MG"),
        record("Paracetamol", "1000mg"),
    ];
    let unique = dedupe_records(records);
    assert_eq!(unique.len(), 3);
    assert_eq!(unique[0].generic_name, "Paracetamol");
    assert_eq!(unique[0].strength, "500mg");
    assert_eq!(unique[1].generic_name, "Amoxicillin");
    assert_eq!(unique[2].strength, "1000mg");
}

#[test]
fn short_generic_names_are_dropped_even_when_unseen() {
    let records = vec![record("EML", "500mg"), record("Iron", "200mg")];
    let unique = dedupe_records(records);
    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].generic_name, "Iron");
}

fn record_strategy() -> impl Strategy<Value = MedicationRecord> {
    (
        prop::sample::select(vec![
            "Paracetamol",
            "paracetamol ",
            "Amoxicillin",
            "Metformin",
            "Iron",
            "abc",
        ]),
        prop::sample::select(vec!["500mg", "500MG", "250mg", "N/A"]),
    )
        .prop_map(|(generic, strength)| record(generic, strength))
}

proptest! {
    #[test]
    fn dedupe_is_idempotent(records in prop::collection::vec(record_strategy(), 0..40)) {
        let once = dedupe_records(records);
        let twice = dedupe_records(once.clone());
        prop_assert_eq!(once, twice);
    }
}
