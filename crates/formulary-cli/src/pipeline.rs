//! Batch pipeline stages shared by the CLI commands.
//!
//! The pipeline runs in order:
//! 1. **Read**: document text, one blob per page (`formulary-ingest`)
//! 2. **Extract**: classify and parse lines into records (`formulary-extract`)
//! 3. **Dedupe**: collapse normalized (name, strength) duplicates
//! 4. **Persist**: write the JSON artifact
//! 5. **Integrate**: splice serialized entries into the service source
//!    (`formulary-merge`)
//!
//! Each stage is attempted exactly once; there is no retry logic.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use formulary_extract::parse_page;
use formulary_merge::{merge_into_file, serialize_entries, splice_entries};
use formulary_model::MedicationRecord;

/// Counters from the extraction stage.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageStats {
    pub pages: usize,
    pub lines: usize,
    pub parsed: usize,
}

/// Outcome of the integration stage.
#[derive(Debug, Clone, Copy)]
pub struct IntegrationOutcome {
    /// Records offered for integration.
    pub loaded: usize,
    /// Records that passed the validity filter.
    pub valid: usize,
    /// Entries actually written to the target file (0 on dry run).
    pub inserted: usize,
}

/// Parse every line of every page, invoking `on_page` after each page for
/// progress reporting. Per-line failures yield no record and are not
/// surfaced.
pub fn extract_pages(
    pages: &[String],
    mut on_page: impl FnMut(usize),
) -> (Vec<MedicationRecord>, PageStats) {
    let mut stats = PageStats {
        pages: pages.len(),
        ..PageStats::default()
    };
    let mut records = Vec::new();
    for (index, page) in pages.iter().enumerate() {
        stats.lines += page.lines().count();
        let mut page_records = parse_page(page);
        stats.parsed += page_records.len();
        records.append(&mut page_records);
        on_page(index + 1);
    }
    debug!(
        pages = stats.pages,
        lines = stats.lines,
        parsed = stats.parsed,
        "extraction pass complete"
    );
    (records, stats)
}

/// Write the extracted records as a pretty-printed JSON array.
pub fn persist_records(path: &Path, records: &[MedicationRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("serialize records")?;
    std::fs::write(path, json)
        .with_context(|| format!("write extracted records to {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), "wrote extracted records");
    Ok(())
}

/// Load a previously extracted JSON artifact.
pub fn load_records(path: &Path) -> Result<Vec<MedicationRecord>> {
    if !path.is_file() {
        bail!(
            "extracted medications file not found: {} (run `formulary extract` first)",
            path.display()
        );
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read extracted records from {}", path.display()))?;
    let records: Vec<MedicationRecord> =
        serde_json::from_str(&json).context("parse extracted records")?;
    Ok(records)
}

/// Filter records through the validity check and splice them into the
/// array identified by `marker` inside `target`.
///
/// On a dry run the splice is still performed in memory, so a missing
/// marker fails the same way, but the target file is never written.
pub fn integrate_records(
    target: &Path,
    marker: &str,
    records: &[MedicationRecord],
    section_comment: &str,
    dry_run: bool,
) -> Result<IntegrationOutcome> {
    let valid: Vec<MedicationRecord> = records
        .iter()
        .filter(|record| record.is_integratable())
        .cloned()
        .collect();
    info!(loaded = records.len(), valid = valid.len(), "filtered records for integration");

    let inserted = if dry_run {
        let content = std::fs::read_to_string(target)
            .with_context(|| format!("read target file {}", target.display()))?;
        let entries = serialize_entries(&valid);
        splice_entries(&content, marker, &entries, section_comment)
            .with_context(|| format!("locate merge target in {}", target.display()))?;
        0
    } else {
        merge_into_file(target, marker, &valid, section_comment)
            .with_context(|| format!("integrate records into {}", target.display()))?
    };

    Ok(IntegrationOutcome {
        loaded: records.len(),
        valid: valid.len(),
        inserted,
    })
}
