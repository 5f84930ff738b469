use std::path::PathBuf;

use formulary_model::MedicationRecord;

use formulary_cli::pipeline::{IntegrationOutcome, PageStats};

#[derive(Debug)]
pub struct ExtractResult {
    pub document: PathBuf,
    pub backend: &'static str,
    pub output: PathBuf,
    pub stats: PageStats,
    pub unique: usize,
    pub sample: Vec<MedicationRecord>,
}

#[derive(Debug)]
pub struct IntegrateResult {
    pub target: PathBuf,
    pub outcome: IntegrationOutcome,
    pub dry_run: bool,
}
