use thiserror::Error;

/// Failure taxonomy for the projection-error pipeline.
///
/// Malformed input (unparseable CSV, missing columns, bad dates or amounts)
/// is fatal and surfaces immediately. Missing join partners and undefined
/// numeric results are *not* errors; those propagate as dropped rows or
/// `None` cells per the merge and error-calculation rules.
#[derive(Debug, Error)]
pub enum Error {
    // IO-related.
    #[error("error reading file '{path}'")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("error writing file '{path}'")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Parsing-related.
    #[error("invalid CSV format")]
    InvalidCsv(#[from] csv::Error),
    #[error("invalid CSV content: {details}")]
    InvalidCsvContent { details: String },
    #[error("invalid ISO date: {date}")]
    InvalidIsoDate { date: String },
    #[error("invalid fiscal amount: '{value}'")]
    InvalidFiscalAmount { value: String },
    #[error("invalid season flag: '{value}' (expected True/False)")]
    InvalidSeasonFlag { value: String },

    // Domain-related.
    #[error("invalid component: '{name}' (expected outlay, revenue, deficit, or debt)")]
    InvalidComponent { name: String },
    #[error("invalid change category: '{value}' (expected Legislative, Economic, or Technical)")]
    InvalidChangeCategory { value: String },

    // Rendering-related.
    #[error("error rendering output table '{table}'")]
    RenderError {
        table: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
