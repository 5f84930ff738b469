//! Structured medication record derived from one formulary line.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{Category, DoseForm, Schedule};

/// Strength sentinel used when a line carries no dose token at all.
pub const STRENGTH_UNKNOWN: &str = "N/A";

/// Maximum stored length for name fields, matching the formulary service.
pub const NAME_MAX_LENGTH: usize = 50;

/// A medication entry extracted from one line of formulary text.
///
/// Records are built once by the parser and never mutated afterwards.
/// Identity for deduplication is the normalized `(generic_name, strength)`
/// pair; the remaining fields are display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    pub generic_name: String,
    pub brand_name: String,
    pub strength: String,
    pub form: DoseForm,
    pub category: Category,
    pub schedule: Schedule,
    pub description: String,
    pub common_dosage: String,
    pub common_frequency: String,
}

impl MedicationRecord {
    /// Normalized duplicate-detection key: `(lower(trim(generic)), lower(strength))`.
    pub fn dedupe_key(&self) -> (String, String) {
        (
            self.generic_name.trim().to_lowercase(),
            self.strength.to_lowercase(),
        )
    }

    /// Whether this record is clean enough to integrate into the formulary
    /// service. Extraction keeps noisy entries for review; integration
    /// drops names that are too short or are obviously leaked boilerplate
    /// (URLs, funder names).
    pub fn is_integratable(&self) -> bool {
        let generic = self.generic_name.trim();
        let lowered = generic.to_lowercase();
        generic.len() >= 3
            && !lowered.contains("http")
            && !lowered.contains("www.")
            && !lowered.contains("health.gov")
            && !lowered.starts_with("right to")
            && !lowered.starts_with("usaid")
    }
}

/// Truncate a name field to [`NAME_MAX_LENGTH`] characters.
///
/// Operates on characters, not bytes, so multi-byte input cannot split a
/// UTF-8 sequence.
pub fn clamp_name(value: &str) -> String {
    value.chars().take(NAME_MAX_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn dedupe_key_normalizes_case_and_whitespace() {
        let a = record("  Paracetamol ", "500MG");
        let b = record("paracetamol", "500mg");
        assert_eq!(a.dedupe_key(), b.dedupe_key());
    }

    #[test]
    fn integration_filter_rejects_boilerplate_names() {
        assert!(record("Paracetamol", "500mg").is_integratable());
        assert!(!record("ab", "500mg").is_integratable());
        assert!(!record("www.health.gov.za", "N/A").is_integratable());
        assert!(!record("USAID Programme", "N/A").is_integratable());
        assert!(!record("Right to Care", "N/A").is_integratable());
    }

    #[test]
    fn clamp_name_respects_char_boundaries() {
        let long = "é".repeat(60);
        assert_eq!(clamp_name(&long).chars().count(), NAME_MAX_LENGTH);
        assert_eq!(clamp_name("Amoxicillin"), "Amoxicillin");
    }
}
