//! Document ingestion: reader backends and source discovery.

pub mod discovery;
pub mod error;
pub mod reader;

pub use discovery::{FORMULARY_FILENAME, find_source_document};
pub use error::{IngestError, Result};
pub use reader::{DocumentReader, PdfTextReader, PlainTextReader, reader_for};
