//! CLI library components for the formulary toolkit.

pub mod logging;
pub mod pipeline;
