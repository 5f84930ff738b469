//! Line classification: is a raw text line plausibly a medication entry?
//!
//! The formulary text layer is noisy: page furniture, funder boilerplate,
//! URLs, and chapter headings far outnumber medication lines. The
//! classifier is a cheap substring/regex filter, tuned to err on the side
//! of acceptance; the deduplicator and the integration filter absorb the
//! residual noise downstream.

use std::sync::LazyLock;

use regex::Regex;

/// Structural lines that are never medication entries.
static SKIP_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^https?://",
        r"^www\.",
        r"^page \d+",
        r"^table of contents",
        r"^chapter \d+",
        r"^section \d+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid skip regex"))
    .collect()
});

/// Bare 2-5 letter acronym on a line of its own (USAID, EML, STG).
static ACRONYM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,5}$").expect("valid acronym regex"));

/// Numeric dose token, e.g. `500mg`, `2.5 ml`, `0.05%`.
static DOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+(\.\d+)?\s*(mg|g|ml|mcg|%)").expect("valid dose regex")
});

/// Document boilerplate that leaks into the text layer on most pages.
const BOILERPLATE: &[&str] = &[
    "health.gov.za",
    "right to care",
    "usaid",
    "universal health",
    "primary healthcare",
    "standard treatment",
    "essential medicines",
    "not for profit",
    "free of charge",
];

/// Unit and route/form indicators that mark a dosing line.
const DOSE_INDICATORS: &[&str] = &[
    "mg",
    "g",
    "ml",
    "mcg",
    "%",
    "tablet",
    "capsule",
    "syrup",
    "injection",
    "cream",
    "drops",
    "inhaler",
    "patch",
    "suspension",
    "oral",
    "topical",
    "iv",
    "im",
];

/// Generic names common in the SA Essential Medicines List. Used to rescue
/// lines that name a medication without a dose indicator (e.g. "insulin").
const KNOWN_MEDICATIONS: &[&str] = &[
    "paracetamol",
    "acetaminophen",
    "aspirin",
    "ibuprofen",
    "naproxen",
    "amoxicillin",
    "penicillin",
    "azithromycin",
    "erythromycin",
    "doxycycline",
    "ciprofloxacin",
    "metronidazole",
    "trimethoprim",
    "sulfamethoxazole",
    "metformin",
    "glibenclamide",
    "gliclazide",
    "insulin",
    "glimepiride",
    "enalapril",
    "captopril",
    "losartan",
    "atenolol",
    "amlodipine",
    "furosemide",
    "hydrochlorothiazide",
    "spironolactone",
    "salbutamol",
    "beclomethasone",
    "fluticasone",
    "ipratropium",
    "omeprazole",
    "ranitidine",
    "lansoprazole",
    "loperamide",
    "metoclopramide",
    "fluoxetine",
    "sertraline",
    "citalopram",
    "amitriptyline",
    "loratadine",
    "cetirizine",
    "chlorpheniramine",
    "fexofenadine",
    "prednisone",
    "prednisolone",
    "hydrocortisone",
    "diazepam",
    "lorazepam",
    "clobazam",
    "warfarin",
    "heparin",
    "ferrous",
    "folic acid",
    "calcium",
    "vitamin d",
    "morphine",
    "codeine",
    "tramadol",
    "oxycodone",
];

/// Decide whether a raw line is plausibly a medication entry.
///
/// Rejects structural headers, URLs, document boilerplate, and bare
/// acronyms. Otherwise accepts when the line carries a dose/form indicator,
/// or names a known medication together with a numeric strength token.
pub fn is_medication_line(line: &str) -> bool {
    let trimmed = line.trim();
    let lowered = trimmed.to_lowercase();

    if SKIP_RES.iter().any(|re| re.is_match(&lowered)) {
        return false;
    }
    if BOILERPLATE.iter().any(|token| lowered.contains(token)) {
        return false;
    }
    if ACRONYM_RE.is_match(trimmed) {
        return false;
    }

    let has_indicator = DOSE_INDICATORS.iter().any(|ind| lowered.contains(ind));
    let has_known_med = KNOWN_MEDICATIONS.iter().any(|med| lowered.contains(med));
    let has_dose_token = DOSE_RE.is_match(trimmed);

    has_indicator || (has_known_med && has_dose_token)
}
