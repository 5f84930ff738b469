//! Array-literal location and splicing.
//!
//! The merge does not parse TypeScript. It finds the target array by a
//! marker substring and walks line-by-line bracket depth to its closing
//! `];`, then inserts serialized entries immediately before that boundary.
//! This is only sound because the target file is machine-formatted with one
//! consistently indented entry block per element; it is a documented
//! assumption, not a general-purpose parser.

use tracing::debug;

use crate::error::{MergeError, Result};

/// Token that closes the array declaration statement.
const CLOSING_TOKEN: &str = "];";

/// Located span of the target array: index of the boundary line holding
/// the closing delimiter. Transient per merge invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArraySite {
    pub end_index: usize,
}

/// Locate the closing boundary of the array declared on the line containing
/// `marker`.
///
/// Bracket depth is tracked from the marker line onward as
/// `count('[') - count(']')` per line; the first line where the running
/// depth returns to zero and which contains [`CLOSING_TOKEN`] is the
/// boundary.
pub fn locate_array(lines: &[&str], marker: &str) -> Option<ArraySite> {
    let mut in_array = false;
    let mut depth: i64 = 0;
    for (index, line) in lines.iter().enumerate() {
        if !in_array && line.contains(marker) {
            in_array = true;
        }
        if in_array {
            depth += line.matches('[').count() as i64;
            depth -= line.matches(']').count() as i64;
            if depth == 0 && line.contains(CLOSING_TOKEN) {
                return Some(ArraySite { end_index: index });
            }
        }
    }
    None
}

/// Splice serialized entries into the array identified by `marker`.
///
/// The output keeps every line before the boundary, adds a blank separator
/// and a section comment, then the entries (comma-terminated except the
/// last), and resumes with the boundary line onward. Returns the input
/// unchanged when there is nothing to insert.
///
/// # Errors
///
/// [`MergeError::ArrayNotFound`] when the marker is absent or its bracket
/// depth never returns to zero.
pub fn splice_entries(
    content: &str,
    marker: &str,
    entries: &[String],
    section_comment: &str,
) -> Result<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    let site = locate_array(&lines, marker).ok_or_else(|| MergeError::ArrayNotFound {
        marker: marker.to_string(),
    })?;
    if entries.is_empty() {
        return Ok(content.to_string());
    }

    let mut merged: Vec<String> = lines[..site.end_index]
        .iter()
        .map(|line| (*line).to_string())
        .collect();
    merged.push(String::new());
    merged.push(format!("  // {section_comment}"));
    if let Some((last, rest)) = entries.split_last() {
        for entry in rest {
            merged.push(format!("{entry},"));
        }
        merged.push(last.clone());
    }
    merged.extend(lines[site.end_index..].iter().map(|line| (*line).to_string()));

    debug!(
        marker,
        boundary = site.end_index,
        inserted = entries.len(),
        "spliced entries into array literal"
    );
    Ok(merged.join("\n"))
}
