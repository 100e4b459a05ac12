/// Error types for the COVID dataset library
use thiserror::Error;

/// Main error type for dataset operations
#[derive(Error, Debug)]
pub enum CovidDataError {
    /// Failed to read the dataset file
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is absent from the CSV header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A row has an empty location cell
    #[error("Missing location on line {line}")]
    MissingLocation { line: u64 },

    /// Date parsing failed
    #[error("Failed to parse date on line {line}: {value:?}")]
    DateParse { line: u64, value: String },

    /// A case-count cell is neither empty nor numeric
    #[error("Failed to parse {column} on line {line}: {value:?}")]
    NumberParse {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// The dataset contains no observation rows
    #[error("Dataset contains no observations")]
    Empty,

    /// Location not found
    #[error("Location not found: {0}")]
    InvalidSelection(String),
}

/// Type alias for Results using CovidDataError
pub type Result<T> = std::result::Result<T, CovidDataError>;
