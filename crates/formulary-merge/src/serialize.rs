//! Serialization of medication records as TypeScript object literals.
//!
//! The output mirrors the existing entries in the formulary service source
//! file: two-space indented object, `id` and `form` single-quoted, every
//! other string field JSON-escaped. Matching the established formatting is
//! what keeps the array-splice merge shallow and safe.

use formulary_model::MedicationRecord;

/// Synthetic identifier for an integrated entry: `med-2024-NNNN`,
/// zero-padded, 0-based sequence index.
pub fn entry_id(index: usize) -> String {
    format!("med-2024-{index:04}")
}

/// Render one record as a TypeScript object literal, without a trailing
/// comma or newline.
pub fn serialize_entry(record: &MedicationRecord, index: usize) -> String {
    let quote = |value: &str| serde_json::to_string(value).expect("string serializes");
    format!(
        "  {{\n    id: '{id}',\n    brandName: {brand},\n    genericName: {generic},\n    \
         category: {category},\n    strength: {strength},\n    form: '{form}',\n    \
         schedule: {schedule},\n    description: {description},\n    \
         commonDosage: {dosage},\n    commonFrequency: {frequency}\n  }}",
        id = entry_id(index),
        brand = quote(&record.brand_name),
        generic = quote(&record.generic_name),
        category = quote(record.category.as_str()),
        strength = quote(&record.strength),
        form = record.form.as_str(),
        schedule = quote(record.schedule.as_str()),
        description = quote(&record.description),
        dosage = quote(&record.common_dosage),
        frequency = quote(&record.common_frequency),
    )
}

/// Serialize a batch of records, numbering them from zero.
pub fn serialize_entries(records: &[MedicationRecord]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| serialize_entry(record, index))
        .collect()
}
