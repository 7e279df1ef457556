use std::path::PathBuf;

use mcq_transform::ProcessingSummary;

#[derive(Debug)]
pub struct ProcessResult {
    pub source: PathBuf,
    /// Pretty-printed JSON of the scored dataset.
    pub output: String,
    pub summary: ProcessingSummary,
}
