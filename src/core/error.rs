//! Error types for the digit classification pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("failed to decode image '{source_name}': {cause}")]
    Decode {
        source_name: String,
        #[source]
        cause: image::ImageError,
    },

    #[error("model source '{source_name}' is empty")]
    EmptyModelSource { source_name: String },

    #[error("invalid numeric token '{token}' at line {line}, position {position} in '{source_name}'")]
    InvalidToken {
        source_name: String,
        token: String,
        position: usize,
        line: usize,
    },

    #[error("'{source_name}' has {actual} coefficients for {expected} support vectors")]
    CoefficientCountMismatch {
        source_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("support vector row {row} in '{source_name}' has {actual} values, expected {expected}")]
    RaggedSupportVectors {
        source_name: String,
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
