//! MCQ processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Score**: attach `SmlSeq`, `MedSeq`, `LrgSeq` to every row
//! 2. **Filter**: keep rows whose completeness counters all reach the threshold
//! 3. **Composite**: attach `k_geo` and `log10_k_geo` to the kept rows
//!
//! Each stage mutates the dataset in place.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span};

use mcq_model::{Dataset, ProcessingOptions, Result};

use crate::composite::{CompositeOutcome, composite_dataset};
use crate::filter::{FilterOutcome, filter_dataset};
use crate::scoring::score_dataset;

/// Processed dataset plus per-stage counts.
#[derive(Debug, Clone)]
pub struct ProcessingReport {
    pub dataset: Dataset,
    pub summary: ProcessingSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingSummary {
    pub input_rows: usize,
    pub scored_rows: usize,
    pub filter: FilterOutcome,
    pub composite: CompositeOutcome,
}

impl ProcessingSummary {
    pub fn output_rows(&self) -> usize {
        self.composite.decorated
    }
}

/// Run scoring, filtering and composite scoring over `dataset`.
///
/// # Errors
///
/// Fails only when the composite stage rejects a magnitude.
pub fn process_dataset(
    mut dataset: Dataset,
    options: &ProcessingOptions,
) -> Result<ProcessingReport> {
    let span = info_span!("process", rows = dataset.len());
    let _guard = span.enter();
    let start = Instant::now();
    let input_rows = dataset.len();

    let scored_rows = score_dataset(&mut dataset, options);
    info!(scored_rows, "sequence scoring complete");

    let filter = filter_dataset(&mut dataset, options);
    info!(
        retained = filter.retained,
        excluded = filter.excluded,
        threshold = options.completeness_threshold,
        "completeness filter complete"
    );

    let composite = composite_dataset(&mut dataset, options)?;
    info!(
        decorated = composite.decorated,
        non_finite = composite.non_finite,
        duration_ms = start.elapsed().as_millis(),
        "composite scoring complete"
    );

    Ok(ProcessingReport {
        dataset,
        summary: ProcessingSummary {
            input_rows,
            scored_rows,
            filter,
            composite,
        },
    })
}
