//! MCQ scoring transformations.
//!
//! - **sequence**: weighted sums over a subscale's items
//! - **scoring**: sequence scores for every row
//! - **filter**: completeness thresholds
//! - **composite**: geometric mean of the magnitudes and its log10
//! - **pipeline**: the three stages in order

pub mod composite;
pub mod filter;
pub mod pipeline;
pub mod scoring;
pub mod sequence;

pub use composite::{CompositeOutcome, composite_dataset, geometric_mean};
pub use filter::{
    CounterFailure, FilterOutcome, counter_failures, filter_dataset, passes_completeness,
};
pub use pipeline::{ProcessingReport, ProcessingSummary, process_dataset};
pub use scoring::score_dataset;
pub use sequence::{calculate_sequence, calculate_sequence_with_weights};
