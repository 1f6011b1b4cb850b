mod bikeshare;
mod dataset;
mod error;
mod reports;
mod stats;
mod types;

pub use bikeshare::BikeShare;
pub use error::BikeShareError;

pub use dataset::enriched_frame::EnrichedFrame;
pub use dataset::error::DatasetError;
pub use dataset::schema;

pub use types::chart::{ChartKind, ChartSpec};
pub use types::day_type::DayType;
pub use types::observation::Observation;
pub use types::palette;
pub use types::report::Report;
pub use types::season::Season;
pub use types::weather_code::WeatherCode;

pub use reports::error::ReportError;
pub use reports::output::{HypothesisReport, ReportBlock, ReportOutput};

pub use stats::error::StatsError;
pub use stats::{Significance, TestOutcome, SIGNIFICANCE_LEVEL};
