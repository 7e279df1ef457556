use mcq_model::{CellValue, Dataset, ProcessingOptions, Subscale};

use crate::sequence::calculate_sequence;

/// Writes `SmlSeq`, `MedSeq` and `LrgSeq` on every row.
///
/// Existing values in those columns are overwritten. Returns the number of
/// rows scored.
pub fn score_dataset(dataset: &mut Dataset, options: &ProcessingOptions) -> usize {
    for subscale in Subscale::ALL {
        dataset.ensure_column(subscale.sequence_field());
    }
    for row in &mut dataset.rows {
        for subscale in Subscale::ALL {
            let score = calculate_sequence(row, subscale.items(), options.sequence_offset);
            row.insert(subscale.sequence_field(), CellValue::Integer(score));
        }
    }
    dataset.len()
}
