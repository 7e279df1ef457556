use thiserror::Error;

#[derive(Debug, Error)]
pub enum McqError {
    /// No input file was provided to the processing command.
    #[error("Por favor, selecciona un archivo.")]
    MissingInput,
    #[error("field list has {fields} entries but weight list has {weights}")]
    WeightMismatch { fields: usize, weights: usize },
    #[error("row {row}: invalid magnitude {field}={value:?}")]
    InvalidMagnitude {
        row: usize,
        field: String,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, McqError>;
