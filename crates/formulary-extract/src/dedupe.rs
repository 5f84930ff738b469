//! Order-preserving deduplication of extracted records.

use std::collections::HashSet;

use tracing::debug;

use formulary_model::MedicationRecord;

/// Collapse records sharing a normalized `(generic name, strength)` key.
///
/// Stable and single-pass: the first record seen for a key is kept, later
/// ones are dropped. Records whose generic name is 3 characters or shorter
/// are discarded outright; the parser only rejects names under 3
/// characters, so the tighter bound applies here.
pub fn dedupe_records(records: Vec<MedicationRecord>) -> Vec<MedicationRecord> {
    let total = records.len();
    let mut seen = HashSet::with_capacity(total);
    let mut unique = Vec::with_capacity(total);

    for record in records {
        if record.generic_name.chars().count() <= 3 {
            continue;
        }
        if seen.insert(record.dedupe_key()) {
            unique.push(record);
        }
    }

    debug!(total, unique = unique.len(), "deduplicated records");
    unique
}
