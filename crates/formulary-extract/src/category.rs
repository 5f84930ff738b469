//! Therapeutic category resolution by keyword lookup.

use formulary_model::Category;

/// Category keyword table, in priority order.
///
/// The first category whose any keyword substring-matches the lowercased
/// line wins, so a line mentioning both an antibiotic and a vitamin
/// resolves to `Antibiotics`. The order is a deliberate, fixed list rather
/// than a map so the tie-break stays deterministic.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Analgesics,
        &[
            "paracetamol",
            "acetaminophen",
            "aspirin",
            "ibuprofen",
            "naproxen",
            "diclofenac",
            "codeine",
            "morphine",
            "tramadol",
            "oxycodone",
        ],
    ),
    (
        Category::Antibiotics,
        &[
            "amoxicillin",
            "penicillin",
            "azithromycin",
            "erythromycin",
            "doxycycline",
            "ciprofloxacin",
            "metronidazole",
            "trimethoprim",
            "sulfamethoxazole",
            "cephalexin",
            "clindamycin",
        ],
    ),
    (
        Category::Cardiovascular,
        &[
            "enalapril",
            "captopril",
            "losartan",
            "atenolol",
            "propranolol",
            "amlodipine",
            "nifedipine",
            "furosemide",
            "hydrochlorothiazide",
            "spironolactone",
            "digoxin",
        ],
    ),
    (
        Category::Diabetes,
        &[
            "metformin",
            "glibenclamide",
            "gliclazide",
            "glimepiride",
            "insulin",
            "pioglitazone",
        ],
    ),
    (
        Category::Respiratory,
        &[
            "salbutamol",
            "beclomethasone",
            "fluticasone",
            "budesonide",
            "ipratropium",
            "theophylline",
        ],
    ),
    (
        Category::Gastrointestinal,
        &[
            "omeprazole",
            "lansoprazole",
            "ranitidine",
            "loperamide",
            "metoclopramide",
            "domperidone",
        ],
    ),
    (
        Category::MentalHealth,
        &[
            "fluoxetine",
            "sertraline",
            "citalopram",
            "amitriptyline",
            "diazepam",
            "lorazepam",
            "clobazam",
        ],
    ),
    (
        Category::Allergy,
        &["loratadine", "cetirizine", "chlorpheniramine", "fexofenadine"],
    ),
    (
        Category::Dermatology,
        &[
            "betamethasone",
            "mometasone",
            "hydrocortisone",
            "clotrimazole",
        ],
    ),
    (
        Category::Vitamins,
        &[
            "ferrous",
            "folic acid",
            "calcium",
            "vitamin",
            "thiamine",
            "cyanocobalamin",
        ],
    ),
];

/// Resolve the therapeutic category for a line of formulary text.
///
/// Returns [`Category::Other`] when no keyword matches.
pub fn resolve_category(text: &str) -> Category {
    let lowered = text.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *category;
        }
    }
    Category::Other
}
