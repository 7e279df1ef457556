use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use mcq_model::{CellValue, Dataset, Row};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a header-keyed CSV file into a dataset.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let file =
        std::fs::File::open(path).with_context(|| format!("read csv: {}", path.display()))?;
    read_dataset_from_reader(file).with_context(|| format!("read csv: {}", path.display()))
}

/// Read CSV content already held in memory.
pub fn read_dataset_from_bytes(bytes: &[u8]) -> Result<Dataset> {
    read_dataset_from_reader(bytes)
}

/// Read CSV content from any reader. The first record is the header row.
pub fn read_dataset_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .context("read header row")?
        .iter()
        .map(normalize_header)
        .collect();

    let mut dataset = Dataset::new(Vec::new());
    for header in headers.iter().filter(|header| !header.is_empty()) {
        dataset.ensure_column(header);
    }
    let mut skipped = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read record {}", idx + 1))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        let mut row = Row::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            // The first column of a repeated header keeps the value.
            if header.is_empty() || row.contains(header) {
                continue;
            }
            row.insert(header.clone(), CellValue::text(normalize_cell(value)));
        }
        dataset.push_row(row);
    }
    debug!(
        column_count = dataset.columns.len(),
        row_count = dataset.len(),
        skipped_blank = skipped,
        "csv read"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_spaces() {
        assert_eq!(normalize_header("\u{feff}MCQ1"), "MCQ1");
        assert_eq!(normalize_header("  Sml   Con "), "Sml Con");
        assert_eq!(normalize_cell(" 75 "), "75");
    }

    #[test]
    fn short_records_only_carry_present_fields() {
        let dataset = read_dataset_from_bytes(b"A,B,C\n1,2\n").unwrap();
        assert_eq!(dataset.columns, vec!["A", "B", "C"]);
        let row = &dataset.rows[0];
        assert_eq!(row.get("A"), Some(&CellValue::Text("1".to_string())));
        assert!(!row.contains("C"));
    }

    #[test]
    fn repeated_headers_keep_first_column() {
        let dataset = read_dataset_from_bytes(b"id,MCQ1,MCQ1,\nr1,1,0,x\n").unwrap();
        assert_eq!(dataset.columns, vec!["id", "MCQ1"]);
        assert_eq!(
            dataset.rows[0].get("MCQ1"),
            Some(&CellValue::Text("1".to_string()))
        );
    }
}
