//! Merge extracted medication records into the formulary service source.

pub mod error;
pub mod serialize;
pub mod splice;
pub mod write;

pub use error::{MergeError, Result};
pub use serialize::{entry_id, serialize_entries, serialize_entry};
pub use splice::{ArraySite, locate_array, splice_entries};
pub use write::{merge_into_file, write_atomic};

/// Default marker identifying the medication array in the service source.
pub const DEFAULT_ARRAY_MARKER: &str = "export const SA_MEDICATIONS";

/// Default section comment placed above newly integrated entries.
pub const DEFAULT_SECTION_COMMENT: &str = "2024 Formulary Medications";
