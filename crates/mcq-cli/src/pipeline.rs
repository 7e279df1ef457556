//! File-level processing: ingest a CSV, run the scoring stages, render JSON.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use mcq_ingest::{read_dataset, read_dataset_from_bytes};
use mcq_model::{Dataset, ProcessingOptions};
use mcq_transform::{ProcessingReport, process_dataset};

use crate::logging::{log_data_enabled, redact_value};

/// Read `path` and run the full pipeline over it.
pub fn process_file(path: &Path, options: &ProcessingOptions) -> Result<ProcessingReport> {
    let span = info_span!("file", source = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let dataset = read_dataset(path)?;
    info!(
        row_count = dataset.len(),
        column_count = dataset.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    let report = process_dataset(dataset, options)
        .with_context(|| format!("process {}", path.display()))?;
    trace_rows(&report.dataset);
    Ok(report)
}

/// Run the full pipeline over CSV content already in memory.
pub fn process_csv_bytes(bytes: &[u8], options: &ProcessingOptions) -> Result<ProcessingReport> {
    let dataset = read_dataset_from_bytes(bytes).context("read csv")?;
    let report = process_dataset(dataset, options).context("process csv")?;
    trace_rows(&report.dataset);
    Ok(report)
}

/// Pretty-print the dataset as a JSON array with two-space indentation.
pub fn render_json(dataset: &Dataset) -> Result<String> {
    serde_json::to_string_pretty(dataset).context("serialize dataset")
}

fn trace_rows(dataset: &Dataset) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    for (index, row) in dataset.rows.iter().enumerate() {
        let values = if log_data_enabled() {
            row.cells
                .iter()
                .map(|(field, value)| format!("{field}={value}"))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            String::new()
        };
        trace!(row = index, values = %redact_value(&values), "output row");
    }
}
