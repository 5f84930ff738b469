//! Data model for the formulary extraction toolkit.

pub mod error;
pub mod record;
pub mod taxonomy;

pub use error::TaxonomyParseError;
pub use record::{MedicationRecord, NAME_MAX_LENGTH, STRENGTH_UNKNOWN, clamp_name};
pub use taxonomy::{Category, DoseForm, Schedule};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_service_field_names() {
        let record = MedicationRecord {
            generic_name: "Amoxicillin".to_string(),
            brand_name: "Amoxil".to_string(),
            strength: "500mg".to_string(),
            form: DoseForm::Capsule,
            category: Category::Antibiotics,
            schedule: Schedule::S3,
            description: "Amoxicillin 500mg capsule".to_string(),
            common_dosage: "500mg".to_string(),
            common_frequency: "As prescribed".to_string(),
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["genericName"], "Amoxicillin");
        assert_eq!(json["brandName"], "Amoxil");
        assert_eq!(json["form"], "capsule");
        assert_eq!(json["category"], "Antibiotics");
        assert_eq!(json["schedule"], "Schedule 3");
        assert_eq!(json["commonDosage"], "500mg");
        assert_eq!(json["commonFrequency"], "As prescribed");

        let round: MedicationRecord =
            serde_json::from_value(json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
