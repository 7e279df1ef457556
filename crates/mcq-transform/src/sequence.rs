//! Weighted item sums.

use mcq_model::{ItemWeight, McqError, Result, Row, item_value_or_zero};

/// Sums `value * weight` pairs, saturating instead of overflowing.
fn weighted_sum(terms: impl Iterator<Item = (i64, i64)>, offset: i64) -> i64 {
    terms
        .fold(0i64, |sum, (value, weight)| {
            sum.saturating_add(value.saturating_mul(weight))
        })
        .saturating_sub(offset)
}

/// Weighted sum of `items` read from `row`, minus `offset`.
///
/// Missing or malformed items contribute zero.
pub fn calculate_sequence(row: &Row, items: &[ItemWeight], offset: i64) -> i64 {
    weighted_sum(
        items
            .iter()
            .map(|item| (item_value_or_zero(row, item.field), item.weight)),
        offset,
    )
}

/// Same as [`calculate_sequence`] for separately held field and weight lists.
///
/// # Errors
///
/// Returns [`McqError::WeightMismatch`] when the lists differ in length.
pub fn calculate_sequence_with_weights(
    row: &Row,
    fields: &[&str],
    weights: &[i64],
    offset: i64,
) -> Result<i64> {
    if fields.len() != weights.len() {
        return Err(McqError::WeightMismatch {
            fields: fields.len(),
            weights: weights.len(),
        });
    }
    Ok(weighted_sum(
        fields
            .iter()
            .zip(weights)
            .map(|(field, weight)| (item_value_or_zero(row, field), *weight)),
        offset,
    ))
}

#[cfg(test)]
mod tests {
    use mcq_model::{SEQUENCE_OFFSET, SEQUENCE_WEIGHTS, Subscale};

    use super::*;

    #[test]
    fn single_low_bit() {
        let row: Row = [("MCQ13", "1"), ("MCQ20", "0")].into_iter().collect();
        assert_eq!(
            calculate_sequence(&row, Subscale::Small.items(), SEQUENCE_OFFSET),
            -509
        );
    }

    #[test]
    fn all_bits_set() {
        let row: Row = Subscale::Large
            .items()
            .iter()
            .map(|item| (item.field, "1"))
            .collect();
        assert_eq!(
            calculate_sequence(&row, Subscale::Large.items(), SEQUENCE_OFFSET),
            1
        );
    }

    #[test]
    fn empty_row_is_negative_offset() {
        let row = Row::new();
        assert_eq!(calculate_sequence(&row, Subscale::Medium.items(), 510), -510);
    }

    #[test]
    fn paired_lists_match_item_form() {
        let row: Row = [("MCQ1", "1"), ("MCQ24", "1"), ("MCQ27", "1")]
            .into_iter()
            .collect();
        let fields: Vec<&str> = Subscale::Medium.items().iter().map(|i| i.field).collect();
        let paired =
            calculate_sequence_with_weights(&row, &fields, &SEQUENCE_WEIGHTS, SEQUENCE_OFFSET)
                .unwrap();
        assert_eq!(paired, 1 + 4 + 256 - 510);
        assert_eq!(
            paired,
            calculate_sequence(&row, Subscale::Medium.items(), SEQUENCE_OFFSET)
        );
    }

    #[test]
    fn oversized_item_counts_as_zero() {
        let row: Row = [("MCQ13", "1"), ("MCQ11", "99999999999999999")]
            .into_iter()
            .collect();
        assert_eq!(
            calculate_sequence(&row, Subscale::Small.items(), SEQUENCE_OFFSET),
            -509
        );
    }

    #[test]
    fn huge_weights_saturate() {
        let row: Row = [("MCQ1", "2"), ("MCQ2", "2")].into_iter().collect();
        let score =
            calculate_sequence_with_weights(&row, &["MCQ1", "MCQ2"], &[i64::MAX, i64::MAX], 0)
                .unwrap();
        assert_eq!(score, i64::MAX);
    }

    #[test]
    fn paired_lists_must_align() {
        let row = Row::new();
        let err = calculate_sequence_with_weights(&row, &["MCQ1", "MCQ2"], &[1], 0).unwrap_err();
        assert!(matches!(
            err,
            McqError::WeightMismatch {
                fields: 2,
                weights: 1
            }
        ));
    }
}
