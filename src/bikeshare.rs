//! The main entry point for working with the bike-sharing dataset.

use crate::dataset::enrich::enrich;
use crate::dataset::enriched_frame::EnrichedFrame;
use crate::dataset::loader::load_csv;
use crate::error::BikeShareError;
use crate::reports::{run_report, ReportOutput};
use crate::types::report::Report;
use bon::bon;
use log::info;
use polars::prelude::DataFrame;
use std::path::PathBuf;

/// A loaded, enriched bike-sharing dataset.
///
/// The feature pipeline runs exactly once, at construction; the enriched
/// table is held immutably for the lifetime of the value and every report is
/// computed from it on demand. Recomputing a report never re-reads the file
/// or re-runs the pipeline.
///
/// # Example
///
/// ```no_run
/// use bikeshare_insights::{BikeShare, Report};
///
/// # fn main() -> Result<(), bikeshare_insights::BikeShareError> {
/// let study = BikeShare::load().path("london_bikes.csv").call()?;
///
/// let statistics = study.report(Report::Statistics)?;
/// for hypothesis in statistics.hypotheses() {
///     println!("{}: {}", hypothesis.name, hypothesis.conclusion);
/// }
/// # Ok(())
/// # }
/// ```
pub struct BikeShare {
    frame: EnrichedFrame,
}

#[bon]
impl BikeShare {
    /// Loads the dataset from a CSV file and runs the feature pipeline.
    ///
    /// # Errors
    ///
    /// Returns a schema error if a required raw column is missing, a parse
    /// error if any timestamp does not parse, or an I/O error if the file
    /// cannot be read. All three abort the load; there is no partial dataset.
    #[builder]
    pub fn load(#[builder(into)] path: PathBuf) -> Result<Self, BikeShareError> {
        let raw = load_csv(&path)?;
        Self::from_dataframe(raw)
    }

    /// Builds the dataset from an in-memory raw frame with the required
    /// columns. Useful for synthetic data and tests.
    pub fn from_dataframe(raw: DataFrame) -> Result<Self, BikeShareError> {
        let frame = enrich(raw)?;
        info!("bike-share study ready: {} observations", frame.height());
        Ok(Self { frame })
    }

    /// The enriched table all reports read from.
    pub fn frame(&self) -> &EnrichedFrame {
        &self.frame
    }

    /// Computes one of the nine reports.
    pub fn report(&self, report: Report) -> Result<ReportOutput, BikeShareError> {
        Ok(run_report(&self.frame, report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_raw_frame;

    #[test]
    fn reports_are_served_from_the_memoized_frame() -> Result<(), Box<dyn std::error::Error>> {
        let study = BikeShare::from_dataframe(sample_raw_frame())?;
        let first = study.report(Report::DayType)?;
        let second = study.report(Report::DayType)?;
        assert_eq!(first.blocks.len(), second.blocks.len());
        assert_eq!(study.frame().height(), 10);
        Ok(())
    }
}
