//! Report computation: a pure function from the enriched table and a report
//! identifier to the report's output blocks.

mod ab_compare;
mod commute;
mod correlation;
mod day_type;
pub mod error;
mod narrative;
pub mod output;
mod seasonal;
mod statistics;
mod trends;

use crate::dataset::enriched_frame::EnrichedFrame;
use crate::types::report::Report;
pub use error::ReportError;
pub use output::{HypothesisReport, ReportBlock, ReportOutput};

/// Computes one report over the enriched table.
///
/// Stateless: no report's output depends on a previously selected report,
/// and the frame is never mutated. An aggregation key with no rows yields an
/// empty table inside the output, not an error; the one failure mode beyond
/// engine errors is a hypothesis test over an empty partition.
pub fn run_report(frame: &EnrichedFrame, report: Report) -> Result<ReportOutput, ReportError> {
    match report {
        Report::Introduction => Ok(narrative::introduction()),
        Report::Correlation => correlation::build(frame),
        Report::Trends => trends::build(frame),
        Report::DayType => day_type::build(frame),
        Report::Commute => commute::build(frame),
        Report::SeasonalWeather => seasonal::build(frame),
        Report::Statistics => statistics::build(frame),
        Report::AbComparisons => ab_compare::build(frame),
        Report::Conclusion => Ok(narrative::conclusion()),
    }
}
