//! Document text readers.
//!
//! The extraction pipeline only needs a sequence of per-page text blobs;
//! everything about how those blobs are produced sits behind
//! [`DocumentReader`]. The PDF backend reads the embedded text layer with
//! `pdf_extract` and makes no attempt to reconstruct tabular layout.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Page separator emitted by text-layer extraction.
const PAGE_BREAK: char = '\u{c}';

/// A source of per-page text blobs.
pub trait DocumentReader: std::fmt::Debug {
    /// Human-readable backend name for progress reporting.
    fn name(&self) -> &'static str;

    /// Read the whole document, returning one text blob per page.
    fn read_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Reads the text layer of a PDF via [`pdf_extract`].
#[derive(Debug, Default)]
pub struct PdfTextReader;

impl DocumentReader for PdfTextReader {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn read_pages(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = std::fs::read(path).map_err(|e| IngestError::io(path, e))?;
        let text =
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| IngestError::Extraction {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let pages = split_pages(&text);
        debug!(path = %path.display(), pages = pages.len(), "extracted pdf text layer");
        Ok(pages)
    }
}

/// Reads a plain-text document, honoring form-feed page breaks.
///
/// Mainly a test and debugging seam: a `.txt` dump of a formulary section
/// flows through the same pipeline as the PDF text layer.
#[derive(Debug, Default)]
pub struct PlainTextReader;

impl DocumentReader for PlainTextReader {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn read_pages(&self, path: &Path) -> Result<Vec<String>> {
        let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
        Ok(split_pages(&text))
    }
}

/// Split extracted text into pages on form feeds, falling back to a single
/// page when the backend emitted none.
fn split_pages(text: &str) -> Vec<String> {
    if text.contains(PAGE_BREAK) {
        text.split(PAGE_BREAK).map(str::to_string).collect()
    } else {
        vec![text.to_string()]
    }
}

/// Select a reader backend for the given path by extension.
///
/// # Errors
///
/// [`IngestError::InputNotFound`] when the file does not exist,
/// [`IngestError::MissingBackend`] when no backend handles its extension.
pub fn reader_for(path: &Path) -> Result<Box<dyn DocumentReader>> {
    if !path.is_file() {
        return Err(IngestError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    match extension.as_deref() {
        Some("pdf") => Ok(Box::new(PdfTextReader)),
        Some("txt") | Some("text") => Ok(Box::new(PlainTextReader)),
        _ => Err(IngestError::MissingBackend {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_form_feed() {
        let pages = split_pages("page one\u{c}page two\u{c}");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0], "page one");
        assert_eq!(pages[1], "page two");
    }

    #[test]
    fn whole_text_is_one_page_without_form_feeds() {
        let pages = split_pages("line a\nline b\n");
        assert_eq!(pages.len(), 1);
    }
}
