//! Record parsing: turn an accepted line into a [`MedicationRecord`].
//!
//! Every field is extracted by an independent heuristic with a fixed
//! fallback chain, so a partial line still yields a usable record. Lines
//! that fail to parse are simply dropped; the extraction pass favors
//! throughput over per-line diagnostics.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use formulary_model::{DoseForm, MedicationRecord, STRENGTH_UNKNOWN, clamp_name};

use crate::category::resolve_category;
use crate::classifier::is_medication_line;
use crate::schedule::resolve_schedule;

/// Minimum trimmed line length worth parsing.
const MIN_LINE_LENGTH: usize = 10;

/// Numeric strength with unit, e.g. `500mg`, `2.5 ml`, `10 units`.
static STRENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(\.\d+)?\s*(mg|g|ml|mcg|%|units?)").expect("valid strength regex")
});

/// Any bare integer, used to synthesize a strength when no unit is present.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number regex"));

/// First capitalized word or run of capitalized words.
static CAPITALIZED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\b").expect("valid name regex")
});

/// Text inside the first parenthesis group, taken as a brand name.
static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid brand regex"));

/// Dose form keyword table, in priority order. First match wins.
const FORM_KEYWORDS: &[(DoseForm, &[&str])] = &[
    (DoseForm::Tablet, &["tablet", "tab", "tabs"]),
    (DoseForm::Capsule, &["capsule", "cap", "caps"]),
    (DoseForm::Syrup, &["syrup", "suspension", "oral liquid"]),
    (DoseForm::Injection, &["injection", "injectable", "iv", "im", "sc"]),
    (DoseForm::Cream, &["cream", "ointment", "gel", "topical"]),
    (DoseForm::Drops, &["drops", "eye drops", "ear drops"]),
    (DoseForm::Inhaler, &["inhaler", "inhalation", "puff"]),
    (DoseForm::Patch, &["patch", "transdermal"]),
];

/// Parse one line of formulary text into a medication record.
///
/// Returns `None` when the classifier rejects the line, the trimmed line is
/// shorter than [`MIN_LINE_LENGTH`] characters, or no generic name of at
/// least 3 characters can be derived.
pub fn parse_line(line: &str) -> Option<MedicationRecord> {
    if !is_medication_line(line) {
        return None;
    }

    let line = line.trim();
    if line.chars().count() < MIN_LINE_LENGTH {
        trace!(line, "line too short, skipping");
        return None;
    }

    let strength = extract_strength(line);
    let form = extract_form(line);

    let capitalized = CAPITALIZED_RE
        .captures(line)
        .map(|caps| caps[1].to_string());
    let brand_name = PAREN_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
        .or_else(|| capitalized.clone())
        .unwrap_or_else(|| "Generic".to_string());
    let generic_name = capitalized.unwrap_or_else(|| {
        let head: Vec<&str> = line.split_whitespace().take(3).collect();
        clamp_name(&head.join(" "))
    });

    if generic_name.chars().count() < 3 {
        trace!(line, "no usable generic name, skipping");
        return None;
    }

    let category = resolve_category(line);
    let schedule = resolve_schedule(line);
    let description = format!("{generic_name} {strength} {form}");

    Some(MedicationRecord {
        generic_name,
        brand_name: clamp_name(&brand_name),
        common_dosage: strength.clone(),
        strength,
        form,
        category,
        schedule,
        description,
        common_frequency: "As prescribed".to_string(),
    })
}

/// Canonical strength token: first unit-suffixed number, else first bare
/// integer defaulted to mg, else the `N/A` sentinel.
fn extract_strength(line: &str) -> String {
    if let Some(found) = STRENGTH_RE.find(line) {
        return found.as_str().to_string();
    }
    if let Some(number) = NUMBER_RE.find(line) {
        return format!("{}mg", number.as_str());
    }
    STRENGTH_UNKNOWN.to_string()
}

/// First dose form whose any keyword appears in the lowercased line.
fn extract_form(line: &str) -> DoseForm {
    let lowered = line.to_lowercase();
    for (form, keywords) in FORM_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *form;
        }
    }
    DoseForm::default()
}
