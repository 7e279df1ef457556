//! CLI library components for the MCQ scorer.

pub mod logging;
pub mod pipeline;
