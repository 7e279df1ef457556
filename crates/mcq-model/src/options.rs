//! Configuration options for MCQ processing.

use serde::{Deserialize, Serialize};

use crate::subscale::SEQUENCE_OFFSET;

/// Default minimum value every completeness counter must reach.
pub const DEFAULT_COMPLETENESS_THRESHOLD: f64 = 75.0;

/// Handling of zero, negative or non-numeric magnitude fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MagnitudePolicy {
    /// Compute anyway; the composite becomes NaN or -inf and is emitted as null.
    #[default]
    Propagate,
    /// Abort processing on the first invalid magnitude.
    Reject,
}

/// Options controlling MCQ processing behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingOptions {
    /// Rows survive only when all three counters are at least this value.
    pub completeness_threshold: f64,

    /// Constant subtracted from each weighted item sum.
    pub sequence_offset: i64,

    /// What to do with magnitudes that have no real geometric mean.
    pub magnitude_policy: MagnitudePolicy,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            completeness_threshold: DEFAULT_COMPLETENESS_THRESHOLD,
            sequence_offset: SEQUENCE_OFFSET,
            magnitude_policy: MagnitudePolicy::Propagate,
        }
    }
}

impl ProcessingOptions {
    /// Options that refuse magnitudes without a finite logarithm.
    pub fn strict() -> Self {
        Self {
            magnitude_policy: MagnitudePolicy::Reject,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_completeness_threshold(mut self, threshold: f64) -> Self {
        self.completeness_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_magnitude_policy(mut self, policy: MagnitudePolicy) -> Self {
        self.magnitude_policy = policy;
        self
    }
}
