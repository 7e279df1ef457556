pub mod error;
pub mod numeric;
pub mod options;
pub mod subscale;
pub mod table;

pub use error::{McqError, Result};
pub use numeric::{item_value_or_zero, numeric_value, parse_f64, parse_integer_prefix};
pub use options::{DEFAULT_COMPLETENESS_THRESHOLD, MagnitudePolicy, ProcessingOptions};
pub use subscale::{
    ItemWeight, K_GEO_FIELD, LOG10_K_GEO_FIELD, SEQUENCE_OFFSET, SEQUENCE_WEIGHTS, Subscale,
};
pub use table::{CellValue, Dataset, Row};
