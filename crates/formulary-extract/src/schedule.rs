//! South African regulatory schedule resolution.

use formulary_model::Schedule;

/// Keyword tiers, evaluated strictest-first.
///
/// A line matching both a Schedule 5 and a Schedule 0 keyword resolves to
/// Schedule 5: when classification is ambiguous, the higher regulatory
/// tier wins.
const SCHEDULE_KEYWORDS: &[(Schedule, &[&str])] = &[
    (Schedule::S5, &["controlled substances", "diazepam"]),
    (
        Schedule::S4,
        &["prescription only", "hypertension", "diabetes", "metformin"],
    ),
    (Schedule::S3, &["antibiotic", "amoxicillin", "penicillin"]),
    (Schedule::S2, &["ibuprofen", "codeine combinations"]),
    (Schedule::S1, &["simple analgesics"]),
    // ibuprofen also appears in the S2 tier, which shadows it here; listed
    // to keep the low-dose analgesic set complete.
    (Schedule::S0, &["paracetamol", "ibuprofen", "aspirin"]),
];

/// Resolve the regulatory schedule for a line of formulary text.
///
/// Precedence: an explicit `schedule N` mention wins outright; otherwise
/// the keyword tiers are checked from Schedule 5 down; otherwise the
/// pharmacy-medicine default of Schedule 2 applies.
pub fn resolve_schedule(text: &str) -> Schedule {
    let lowered = text.to_lowercase();

    for schedule in Schedule::ALL {
        if lowered.contains(&format!("schedule {}", schedule.level())) {
            return schedule;
        }
    }

    for (schedule, keywords) in SCHEDULE_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *schedule;
        }
    }

    Schedule::S2
}
