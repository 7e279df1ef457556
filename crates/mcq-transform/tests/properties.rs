//! Property tests for sequence scoring and the completeness filter.

use proptest::prelude::*;

use mcq_model::{CellValue, Dataset, ProcessingOptions, Row, SEQUENCE_OFFSET, Subscale};
use mcq_transform::{calculate_sequence, filter_dataset, passes_completeness};

fn item_cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("x".to_string())),
        (0i64..=1).prop_map(|v| Some(v.to_string())),
    ]
}

proptest! {
    #[test]
    fn sequence_matches_weighted_sum(cells in prop::collection::vec(item_cell(), 9)) {
        let items = Subscale::Small.items();
        let mut row = Row::new();
        let mut expected = 0i64;
        for (item, cell) in items.iter().zip(&cells) {
            if let Some(text) = cell {
                row.insert(item.field, CellValue::text(text.clone()));
                expected += text.parse::<i64>().unwrap_or(0) * item.weight;
            }
        }
        prop_assert_eq!(calculate_sequence(&row, items, SEQUENCE_OFFSET), expected - SEQUENCE_OFFSET);
    }

    #[test]
    fn sequence_ignores_item_order(bits in prop::collection::vec(0i64..=1, 9), seed in any::<u64>()) {
        let items = Subscale::Large.items();
        let row: Row = items
            .iter()
            .zip(&bits)
            .map(|(item, bit)| (item.field, bit.to_string()))
            .collect();
        let mut shuffled = items.to_vec();
        let len = shuffled.len();
        shuffled.rotate_left((seed % len as u64) as usize);
        shuffled.reverse();
        let score = calculate_sequence(&row, items, SEQUENCE_OFFSET);
        prop_assert_eq!(score, calculate_sequence(&row, &shuffled, SEQUENCE_OFFSET));
        prop_assert!((-510..=1).contains(&score));
    }

    #[test]
    fn filter_keeps_exactly_passing_rows(counters in prop::collection::vec((60u32..90, 60u32..90, 60u32..90), 0..20)) {
        let mut dataset = Dataset::new(vec![]);
        for (index, (sml, med, lrg)) in counters.iter().enumerate() {
            dataset.push_row(
                [
                    ("id", index.to_string()),
                    ("SmlCon", sml.to_string()),
                    ("MedCon", med.to_string()),
                    ("LrgCon", lrg.to_string()),
                ]
                .into_iter()
                .collect(),
            );
        }
        let expected: Vec<Row> = dataset
            .rows
            .iter()
            .filter(|row| passes_completeness(row, 75.0))
            .cloned()
            .collect();

        let outcome = filter_dataset(&mut dataset, &ProcessingOptions::default());

        prop_assert_eq!(&dataset.rows, &expected);
        prop_assert_eq!(outcome.retained + outcome.excluded, counters.len());
        let direct = counters.iter().filter(|(s, m, l)| *s >= 75 && *m >= 75 && *l >= 75).count();
        prop_assert_eq!(outcome.retained, direct);
    }
}
