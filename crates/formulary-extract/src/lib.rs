//! Extraction pipeline core: classify formulary text lines, parse them
//! into medication records, and deduplicate the results.
//!
//! The stages are deliberately small free functions so each heuristic
//! (line filter, name extraction, keyword tables) stays independently
//! testable rather than buried in one control flow.

pub mod category;
pub mod classifier;
pub mod dedupe;
pub mod parser;
pub mod schedule;

pub use category::{CATEGORY_KEYWORDS, resolve_category};
pub use classifier::is_medication_line;
pub use dedupe::dedupe_records;
pub use parser::parse_line;
pub use schedule::resolve_schedule;

use formulary_model::MedicationRecord;

/// Parse every line of a page's text blob, keeping the records that parse.
///
/// Per-line failures are absorbed silently: a line that cannot be
/// classified or parsed yields no record and processing continues.
pub fn parse_page(text: &str) -> Vec<MedicationRecord> {
    text.lines().filter_map(parse_line).collect()
}
