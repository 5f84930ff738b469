use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use formulary_cli::pipeline::{extract_pages, integrate_records, load_records, persist_records};
use formulary_extract::dedupe_records;
use formulary_ingest::{find_source_document, reader_for};
use formulary_merge::DEFAULT_SECTION_COMMENT;

use crate::cli::{ExtractArgs, IntegrateArgs};
use crate::types::{ExtractResult, IntegrateResult};

/// Default filename of the extracted-records JSON artifact.
const EXTRACTED_JSON: &str = "extracted-medications-2024.json";

/// Number of records shown in the console sample.
const SAMPLE_SIZE: usize = 10;

pub fn run_extract(args: &ExtractArgs) -> Result<ExtractResult> {
    let document = if args.source.is_dir() {
        find_source_document(&args.source)?
    } else {
        args.source.clone()
    };
    let span = info_span!("extract", document = %document.display());
    let _guard = span.enter();

    let reader = reader_for(&document)?;
    info!(backend = reader.name(), "reading document text");
    let pages = reader.read_pages(&document)?;

    let bar = page_progress_bar(pages.len() as u64);
    let (records, stats) = extract_pages(&pages, |_| bar.inc(1));
    bar.finish_and_clear();

    let unique = dedupe_records(records);
    info!(
        pages = stats.pages,
        parsed = stats.parsed,
        unique = unique.len(),
        "extraction complete"
    );

    let output = match &args.output {
        Some(path) => path.clone(),
        None => document
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(EXTRACTED_JSON),
    };
    persist_records(&output, &unique)?;

    let sample = unique.iter().take(SAMPLE_SIZE).cloned().collect();
    Ok(ExtractResult {
        document,
        backend: reader.name(),
        output,
        stats,
        unique: unique.len(),
        sample,
    })
}

pub fn run_integrate(args: &IntegrateArgs) -> Result<IntegrateResult> {
    let span = info_span!("integrate", target = %args.target.display());
    let _guard = span.enter();

    let records = load_records(&args.input)?;
    if !args.target.is_file() {
        bail!("target file not found: {}", args.target.display());
    }
    let outcome = integrate_records(
        &args.target,
        &args.marker,
        &records,
        DEFAULT_SECTION_COMMENT,
        args.dry_run,
    )
    .context("integrate records")?;

    Ok(IntegrateResult {
        target: args.target.clone(),
        outcome,
        dry_run: args.dry_run,
    })
}

fn page_progress_bar(pages: u64) -> ProgressBar {
    let bar = ProgressBar::new(pages);
    bar.set_style(
        ProgressStyle::with_template("  pages {wide_bar:.cyan/dim} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    bar
}
