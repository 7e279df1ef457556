//! Completeness filter.

use serde::Serialize;
use tracing::debug;

use mcq_model::{Dataset, ProcessingOptions, Row, Subscale, numeric_value};

/// Why a counter failed its condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFailure {
    BelowThreshold,
    NotNumeric,
}

/// Counts from one filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    pub retained: usize,
    pub excluded: usize,
    /// Per subscale: rows whose counter was numeric but too low.
    pub below_threshold: [usize; 3],
    /// Per subscale: rows whose counter was missing or not a number.
    pub not_numeric: [usize; 3],
}

/// Evaluates every counter of `row`, without short-circuiting.
pub fn counter_failures(row: &Row, threshold: f64) -> [Option<CounterFailure>; 3] {
    Subscale::ALL.map(|subscale| match numeric_value(row, subscale.completeness_field()) {
        Some(value) if value >= threshold => None,
        Some(_) => Some(CounterFailure::BelowThreshold),
        None => Some(CounterFailure::NotNumeric),
    })
}

/// True when all three counters reach `threshold`.
pub fn passes_completeness(row: &Row, threshold: f64) -> bool {
    counter_failures(row, threshold).iter().all(Option::is_none)
}

/// Keeps only rows whose three completeness counters reach the threshold.
///
/// Relative order of the kept rows is preserved and their contents are
/// left untouched.
pub fn filter_dataset(dataset: &mut Dataset, options: &ProcessingOptions) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    let threshold = options.completeness_threshold;
    let mut index = 0usize;
    dataset.rows.retain(|row| {
        let failures = counter_failures(row, threshold);
        let mut keep = true;
        for (slot, failure) in failures.iter().enumerate() {
            match failure {
                Some(CounterFailure::BelowThreshold) => outcome.below_threshold[slot] += 1,
                Some(CounterFailure::NotNumeric) => outcome.not_numeric[slot] += 1,
                None => continue,
            }
            keep = false;
        }
        if keep {
            outcome.retained += 1;
        } else {
            outcome.excluded += 1;
            debug!(row = index, failures = ?failures, "row excluded by completeness filter");
        }
        index += 1;
        keep
    });
    outcome
}
