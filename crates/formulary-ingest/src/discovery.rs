//! Source document discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Exact filename of the 8th edition formulary document.
pub const FORMULARY_FILENAME: &str = "Primary-Healthcare-Standard-Treatment-Guidelines-and-Essential-Medicines-List-8th-Edition-2024.pdf";

/// Filename fragments that identify a formulary PDF when the exact name is
/// absent (renamed downloads, future editions).
const NAME_HINTS: &[&str] = &["formulary", "2024", "primary", "healthcare", "essential"];

/// Locate the formulary document under `dir`.
///
/// Prefers the exact expected filename, then falls back to the first PDF
/// (sorted by filename) whose name contains one of the known hints.
///
/// # Errors
///
/// [`IngestError::InputNotFound`] when no candidate is present.
pub fn find_source_document(dir: &Path) -> Result<PathBuf> {
    let exact = dir.join(FORMULARY_FILENAME);
    if exact.is_file() {
        return Ok(exact);
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::io(dir, e))?;
    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let lowered = name.to_lowercase();
        if lowered.ends_with(".pdf") && NAME_HINTS.iter().any(|hint| lowered.contains(hint)) {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.into_iter().next() {
        Some(path) => {
            debug!(path = %path.display(), "discovered formulary document");
            Ok(path)
        }
        None => Err(IngestError::InputNotFound {
            path: dir.join(FORMULARY_FILENAME),
        }),
    }
}
