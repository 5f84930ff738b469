use thiserror::Error;

/// Failure to parse a value into one of the closed taxonomies.
#[derive(Debug, Error)]
pub enum TaxonomyParseError {
    #[error("unknown dose form: {0:?}")]
    Form(String),
    #[error("unknown category: {0:?}")]
    Category(String),
    #[error("unknown schedule: {0:?}")]
    Schedule(String),
}

impl TaxonomyParseError {
    pub(crate) fn form(value: &str) -> Self {
        Self::Form(value.to_string())
    }

    pub(crate) fn category(value: &str) -> Self {
        Self::Category(value.to_string())
    }

    pub(crate) fn schedule(value: &str) -> Self {
        Self::Schedule(value.to_string())
    }
}
