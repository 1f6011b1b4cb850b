//! Column-name constants for the raw and enriched schemas.
//!
//! Every module refers to columns through these constants; string literals for
//! column names appear nowhere else in the crate.

use crate::dataset::error::DatasetError;
use polars::prelude::DataFrame;

/// Timestamp format of the source dataset (`2015-01-04 08:00:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Raw columns, as found in the CSV header.
pub const TIMESTAMP: &str = "timestamp";
pub const RAW_COUNT: &str = "cnt";
pub const RAW_REAL_TEMPERATURE: &str = "t1";
pub const RAW_FEELS_LIKE_TEMPERATURE: &str = "t2";
pub const RAW_HUMIDITY: &str = "hum";
pub const WIND_SPEED: &str = "wind_speed";
pub const WEATHER_CODE: &str = "weather_code";
pub const IS_HOLIDAY: &str = "is_holiday";
pub const IS_WEEKEND: &str = "is_weekend";
pub const SEASON: &str = "season";

/// Columns that must be present in the input file. A missing one aborts the
/// load before any compute happens.
pub const REQUIRED_RAW_COLUMNS: [&str; 10] = [
    TIMESTAMP,
    RAW_COUNT,
    RAW_REAL_TEMPERATURE,
    RAW_FEELS_LIKE_TEMPERATURE,
    RAW_HUMIDITY,
    WIND_SPEED,
    WEATHER_CODE,
    IS_HOLIDAY,
    IS_WEEKEND,
    SEASON,
];

// Descriptive names applied by the feature pipeline.
pub const COUNT: &str = "count_of_new_bike_shares";
pub const REAL_TEMPERATURE_C: &str = "real_temperature_C";
pub const FEELS_LIKE_TEMPERATURE_C: &str = "feels_like_temperature_C";
pub const HUMIDITY_PERCENTAGE: &str = "humidity_percentage";

pub const RENAMED_FROM: [&str; 4] = [
    RAW_COUNT,
    RAW_REAL_TEMPERATURE,
    RAW_FEELS_LIKE_TEMPERATURE,
    RAW_HUMIDITY,
];
pub const RENAMED_TO: [&str; 4] = [
    COUNT,
    REAL_TEMPERATURE_C,
    FEELS_LIKE_TEMPERATURE_C,
    HUMIDITY_PERCENTAGE,
];

// Derived columns.
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const DAY_OF_WEEK_NAME: &str = "day_of_week_name";
pub const MONTH: &str = "month";
pub const MONTH_NAME: &str = "month_name";
pub const YEAR: &str = "year";
pub const HOUR: &str = "hour";
pub const SEASON_NAME: &str = "season_name";
pub const WEATHER_DESCRIPTION: &str = "weather_description";
pub const DAY_TYPE: &str = "day_type";
pub const COMFORT_INDEX: &str = "comfort_index";
pub const WEATHER_SEVERITY: &str = "weather_severity";
pub const COMMUTE_HOURS: &str = "commute_hours";

/// Checks that every required raw column is present, returning
/// [`DatasetError::MissingColumn`] for the first one that is not.
pub fn validate_required_columns(frame: &DataFrame) -> Result<(), DatasetError> {
    let names = frame.get_column_names();
    for required in REQUIRED_RAW_COLUMNS {
        if !names.iter().any(|name| name.as_str() == required) {
            return Err(DatasetError::MissingColumn {
                column: required.to_string(),
            });
        }
    }
    Ok(())
}
