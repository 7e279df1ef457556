//! Geometric-mean composite of the three magnitude fields.

use serde::Serialize;
use tracing::warn;

use mcq_model::{
    CellValue, Dataset, K_GEO_FIELD, LOG10_K_GEO_FIELD, MagnitudePolicy, McqError,
    ProcessingOptions, Result, Row, Subscale, numeric_value,
};

/// Counts from one composite pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompositeOutcome {
    pub decorated: usize,
    /// Rows whose `k_geo` or `log10_k_geo` is NaN or infinite.
    pub non_finite: usize,
}

/// Cube root of the product of the three values, as a real power.
///
/// A negative product yields NaN and a zero product yields 0.
pub fn geometric_mean(values: [f64; 3]) -> f64 {
    let product: f64 = values.iter().product();
    product.powf(1.0 / 3.0)
}

fn magnitudes(row: &Row, index: usize, policy: MagnitudePolicy) -> Result<[f64; 3]> {
    let mut values = [f64::NAN; 3];
    for (slot, subscale) in Subscale::ALL.iter().enumerate() {
        let field = subscale.magnitude_field();
        // An empty cell multiplies as zero; an absent column has no value.
        let value = match row.get(field) {
            Some(CellValue::Missing) => Some(0.0),
            _ => numeric_value(row, field),
        };
        if policy == MagnitudePolicy::Reject && !value.is_some_and(|v| v.is_finite() && v > 0.0) {
            return Err(McqError::InvalidMagnitude {
                row: index,
                field: field.to_string(),
                value: row.get(field).map(ToString::to_string).unwrap_or_default(),
            });
        }
        values[slot] = value.unwrap_or(f64::NAN);
    }
    Ok(values)
}

/// Writes `k_geo` and `log10_k_geo` on every row of `dataset`.
///
/// Run this on the filtered dataset only; excluded rows never get the
/// composite columns.
///
/// # Errors
///
/// Under [`MagnitudePolicy::Reject`], returns [`McqError::InvalidMagnitude`]
/// for the first magnitude that is missing, non-numeric, zero or negative.
/// No row is modified in that case.
pub fn composite_dataset(
    dataset: &mut Dataset,
    options: &ProcessingOptions,
) -> Result<CompositeOutcome> {
    let inputs = dataset
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| magnitudes(row, index, options.magnitude_policy))
        .collect::<Result<Vec<_>>>()?;

    dataset.ensure_column(K_GEO_FIELD);
    dataset.ensure_column(LOG10_K_GEO_FIELD);
    let mut outcome = CompositeOutcome::default();
    for (index, (row, values)) in dataset.rows.iter_mut().zip(inputs).enumerate() {
        let k_geo = geometric_mean(values);
        let log10_k_geo = k_geo.log10();
        if !log10_k_geo.is_finite() {
            outcome.non_finite += 1;
            warn!(row = index, k_geo, "composite score is not finite");
        }
        row.insert(K_GEO_FIELD, CellValue::Real(k_geo));
        row.insert(LOG10_K_GEO_FIELD, CellValue::Real(log10_k_geo));
        outcome.decorated += 1;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sml: &str, med: &str, lrg: &str) -> Row {
        [("SmlK", sml), ("MedK", med), ("LrgK", lrg)]
            .into_iter()
            .collect()
    }

    fn real(row: &Row, field: &str) -> f64 {
        match row.get(field) {
            Some(CellValue::Real(value)) => *value,
            other => panic!("expected real in {field}, got {other:?}"),
        }
    }

    #[test]
    fn equal_magnitudes_give_that_magnitude() {
        assert!((geometric_mean([8.0, 8.0, 8.0]) - 8.0).abs() < 1e-12);
        assert!((geometric_mean([1.0, 10.0, 100.0]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_and_negative_products_propagate() {
        let mut dataset = Dataset::new(vec![]);
        dataset.push_row(row("0", "5", "5"));
        dataset.push_row(row("-1", "5", "5"));
        dataset.push_row(row("abc", "5", "5"));

        let outcome = composite_dataset(&mut dataset, &ProcessingOptions::default()).unwrap();

        assert_eq!(outcome.decorated, 3);
        assert_eq!(outcome.non_finite, 3);
        assert_eq!(real(&dataset.rows[0], K_GEO_FIELD), 0.0);
        assert_eq!(real(&dataset.rows[0], LOG10_K_GEO_FIELD), f64::NEG_INFINITY);
        assert!(real(&dataset.rows[1], K_GEO_FIELD).is_nan());
        assert!(real(&dataset.rows[2], LOG10_K_GEO_FIELD).is_nan());
    }

    #[test]
    fn empty_magnitude_multiplies_as_zero() {
        let mut dataset = Dataset::new(vec![]);
        dataset.push_row(row("", "5", "5"));

        composite_dataset(&mut dataset, &ProcessingOptions::default()).unwrap();

        assert_eq!(real(&dataset.rows[0], K_GEO_FIELD), 0.0);
        assert_eq!(real(&dataset.rows[0], LOG10_K_GEO_FIELD), f64::NEG_INFINITY);
    }

    #[test]
    fn absent_magnitude_column_propagates_nan() {
        let mut dataset = Dataset::new(vec![]);
        dataset.push_row([("SmlK", "2"), ("MedK", "2")].into_iter().collect());

        let outcome = composite_dataset(&mut dataset, &ProcessingOptions::default()).unwrap();

        assert_eq!(outcome.non_finite, 1);
        assert!(real(&dataset.rows[0], K_GEO_FIELD).is_nan());
        assert!(real(&dataset.rows[0], LOG10_K_GEO_FIELD).is_nan());
    }

    fn rejected_field(magnitudes: Row) -> (String, String) {
        let mut dataset = Dataset::new(vec![]);
        dataset.push_row(magnitudes);
        match composite_dataset(&mut dataset, &ProcessingOptions::strict()).unwrap_err() {
            McqError::InvalidMagnitude { field, value, .. } => (field, value),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reject_policy_refuses_negative_magnitude() {
        assert_eq!(
            rejected_field(row("2", "2", "-3")),
            ("LrgK".to_string(), "-3".to_string())
        );
    }

    #[test]
    fn reject_policy_refuses_non_numeric_magnitude() {
        assert_eq!(
            rejected_field(row("big", "2", "2")),
            ("SmlK".to_string(), "big".to_string())
        );
        assert_eq!(
            rejected_field(row("2", "inf", "2")),
            ("MedK".to_string(), "inf".to_string())
        );
    }

    #[test]
    fn reject_policy_refuses_missing_magnitude() {
        assert_eq!(
            rejected_field(row("2", "", "2")),
            ("MedK".to_string(), String::new())
        );
        let absent: Row = [("SmlK", "2"), ("MedK", "2")].into_iter().collect();
        assert_eq!(rejected_field(absent), ("LrgK".to_string(), String::new()));
    }

    #[test]
    fn reject_policy_accepts_positive_magnitudes() {
        let mut dataset = Dataset::new(vec![]);
        dataset.push_row(row("1", "10", "100"));

        let outcome = composite_dataset(&mut dataset, &ProcessingOptions::strict()).unwrap();

        assert_eq!(outcome.non_finite, 0);
        assert!((real(&dataset.rows[0], K_GEO_FIELD) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn reject_policy_stops_before_mutating() {
        let mut dataset = Dataset::new(vec![]);
        dataset.push_row(row("2", "2", "2"));
        dataset.push_row(row("2", "0", "2"));

        let err = composite_dataset(&mut dataset, &ProcessingOptions::strict()).unwrap_err();

        match err {
            McqError::InvalidMagnitude { row, field, value } => {
                assert_eq!(row, 1);
                assert_eq!(field, "MedK");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dataset.rows[0].contains(K_GEO_FIELD));
    }
}
