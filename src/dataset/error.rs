use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// A required raw column is absent from the input. Fatal at load.
    #[error("required column '{column}' not found in input data")]
    MissingColumn { column: String },

    /// A timestamp value could not be parsed. Fatal for the whole pipeline;
    /// there is no row-level recovery because every calendar field derives
    /// from the timestamp.
    #[error("failed to parse the timestamp column")]
    TimestampParse(#[source] PolarsError),

    #[error("I/O error reading input file '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to read CSV data from '{path}'")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("unexpected enriched frame state: {0}")]
    UnexpectedState(String),

    #[error("failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
