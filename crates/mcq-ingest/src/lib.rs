//! CSV ingestion for MCQ survey exports.
//!
//! Every record becomes a header-keyed [`mcq_model::Row`]; empty cells are
//! stored as [`mcq_model::CellValue::Missing`].

pub mod csv_table;

pub use csv_table::{read_dataset, read_dataset_from_bytes, read_dataset_from_reader};
