use crate::stats::StatsError;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed computing report aggregation: {0}")]
    Aggregation(#[from] PolarsError),

    #[error(transparent)]
    Stats(#[from] StatsError),
}
