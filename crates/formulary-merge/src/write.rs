//! Crash-safe target file rewrite.

use std::path::Path;

use tracing::info;

use formulary_model::MedicationRecord;

use crate::error::{MergeError, Result};
use crate::serialize::serialize_entries;
use crate::splice::splice_entries;

/// Write `content` to `path` via a sibling temp file and an atomic rename,
/// so a crash mid-write leaves either the old file or the new one, never a
/// torn half-write.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = Path::new(&temp);

    std::fs::write(temp, content).map_err(|e| MergeError::io(temp, e))?;
    std::fs::rename(temp, path).map_err(|e| MergeError::io(path, e))
}

/// Merge records into the array identified by `marker` inside the file at
/// `path`.
///
/// The whole file is read, transformed in memory, and rewritten once. On
/// any error the original file is left untouched.
pub fn merge_into_file(
    path: &Path,
    marker: &str,
    records: &[MedicationRecord],
    section_comment: &str,
) -> Result<usize> {
    let content = std::fs::read_to_string(path).map_err(|e| MergeError::io(path, e))?;
    let entries = serialize_entries(records);
    let merged = splice_entries(&content, marker, &entries, section_comment)?;
    write_atomic(path, &merged)?;
    info!(
        path = %path.display(),
        marker,
        inserted = records.len(),
        "integrated records into target file"
    );
    Ok(records.len())
}
