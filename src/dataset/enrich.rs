//! The feature pipeline: one pure pass from the raw table to the enriched
//! table every report reads.
//!
//! Order matters: calendar fields come from the parsed timestamp, the label
//! lookups come from the calendar fields and raw codes, `day_type` comes from
//! the raw flags, `comfort_index` from the renamed physical columns, and the
//! severity flag from the weather description. Nothing here mutates the input
//! and nothing downstream mutates the output.

use crate::dataset::enriched_frame::EnrichedFrame;
use crate::dataset::error::DatasetError;
use crate::dataset::schema::{self, *};
use crate::types::calendar;
use crate::types::day_type::DayType;
use crate::types::season::Season;
use crate::types::weather_code::WeatherCode;
use log::info;
use polars::prelude::*;

// Comfort-index weights, preserved literally from the study. They sum to 1.2,
// so the achievable range is [0, 1.2] even though each input is normalized
// to [0, 1].
pub const TEMPERATURE_WEIGHT: f64 = 0.8;
pub const HUMIDITY_WEIGHT: f64 = 0.3;
pub const WIND_WEIGHT: f64 = 0.1;

/// Runs the full feature pipeline over a raw frame.
///
/// Fails with [`DatasetError::MissingColumn`] if a required raw column is
/// absent and with [`DatasetError::TimestampParse`] if any timestamp value
/// does not parse; there is no partial success. An unmapped `weather_code`
/// is not an error — it yields a null `weather_description` for that row.
pub fn enrich(raw: DataFrame) -> Result<EnrichedFrame, DatasetError> {
    schema::validate_required_columns(&raw)?;
    let row_count = raw.height();

    // Strict parse first, so a bad timestamp surfaces as a ParseError rather
    // than a generic compute failure later in the pipeline.
    let parsed = raw
        .lazy()
        .with_column(col(TIMESTAMP).str().to_datetime(
            Some(TimeUnit::Milliseconds),
            None,
            StrptimeOptions {
                format: Some(TIMESTAMP_FORMAT.into()),
                strict: true,
                exact: true,
                cache: true,
            },
            lit("raise"),
        ))
        .collect()
        .map_err(DatasetError::TimestampParse)?;

    let enriched = parsed
        .lazy()
        .with_columns([
            col(RAW_COUNT).cast(DataType::Int64),
            col(RAW_REAL_TEMPERATURE).cast(DataType::Float64),
            col(RAW_FEELS_LIKE_TEMPERATURE).cast(DataType::Float64),
            col(RAW_HUMIDITY).cast(DataType::Float64),
            col(WIND_SPEED).cast(DataType::Float64),
            col(WEATHER_CODE).cast(DataType::Int32),
            col(IS_HOLIDAY).cast(DataType::Int32),
            col(IS_WEEKEND).cast(DataType::Int32),
            col(SEASON).cast(DataType::Int32),
        ])
        .with_columns([
            col(TIMESTAMP)
                .dt()
                .weekday()
                .cast(DataType::Int32)
                .alias(DAY_OF_WEEK),
            col(TIMESTAMP)
                .dt()
                .month()
                .cast(DataType::Int32)
                .alias(MONTH),
            col(TIMESTAMP).dt().year().cast(DataType::Int32).alias(YEAR),
            col(TIMESTAMP).dt().hour().cast(DataType::Int32).alias(HOUR),
        ])
        .with_columns([
            label_lookup(col(DAY_OF_WEEK), &calendar::DAY_NAMES).alias(DAY_OF_WEEK_NAME),
            label_lookup(col(MONTH), &calendar::MONTH_NAMES).alias(MONTH_NAME),
            label_lookup(col(SEASON), &Season::label_pairs()).alias(SEASON_NAME),
            label_lookup(col(WEATHER_CODE), &WeatherCode::description_pairs())
                .alias(WEATHER_DESCRIPTION),
        ])
        .rename(RENAMED_FROM, RENAMED_TO, true)
        .with_column(day_type_expr())
        .with_column(comfort_index_expr())
        .with_columns([weather_severity_expr(), commute_hours_expr()])
        .collect()?;

    info!(
        "enriched {} observations into {} columns",
        row_count,
        enriched.width()
    );
    Ok(EnrichedFrame::new(enriched))
}

/// Maps an integer code column to string labels via a fixed table; codes
/// outside the table become null.
fn label_lookup(code: Expr, table: &[(i64, &str)]) -> Expr {
    let mut mapped = lit(NULL).cast(DataType::String);
    for (code_value, label) in table.iter().rev() {
        mapped = when(code.clone().eq(lit(*code_value)))
            .then(lit(*label))
            .otherwise(mapped);
    }
    mapped
}

/// Holiday wins over Weekend, which wins over Working Day.
fn day_type_expr() -> Expr {
    when(col(IS_HOLIDAY).eq(lit(1)))
        .then(lit(DayType::Holiday.label()))
        .when(col(IS_WEEKEND).eq(lit(1)))
        .then(lit(DayType::Weekend.label()))
        .otherwise(lit(DayType::WorkingDay.label()))
        .alias(DAY_TYPE)
}

/// Whole-column min-max normalization. A zero-width range normalizes to 0 by
/// definition rather than dividing by zero.
fn min_max_normalized(column: &str) -> Expr {
    let range = col(column).max() - col(column).min();
    when(range.clone().eq(lit(0.0)))
        .then(lit(0.0))
        .otherwise((col(column) - col(column).min()) / range)
}

fn comfort_index_expr() -> Expr {
    (lit(TEMPERATURE_WEIGHT) * min_max_normalized(FEELS_LIKE_TEMPERATURE_C)
        + lit(HUMIDITY_WEIGHT) * (col(HUMIDITY_PERCENTAGE) / lit(100.0))
        + lit(WIND_WEIGHT) * min_max_normalized(WIND_SPEED))
    .alias(COMFORT_INDEX)
}

/// 1 iff the description is in the fixed severe set; a null description
/// (unmapped code) is never severe.
fn weather_severity_expr() -> Expr {
    let mut severe = lit(false);
    for description in WeatherCode::SEVERE_DESCRIPTIONS {
        severe = severe.or(col(WEATHER_DESCRIPTION).eq(lit(description)));
    }
    severe
        .fill_null(lit(false))
        .cast(DataType::Int32)
        .alias(WEATHER_SEVERITY)
}

/// 1 iff the hour falls in one of the six commute windows.
fn commute_hours_expr() -> Expr {
    let mut in_window = lit(false);
    for hour in calendar::COMMUTE_HOURS {
        in_window = in_window.or(col(HOUR).eq(lit(hour)));
    }
    in_window.cast(DataType::Int32).alias(COMMUTE_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sample_raw_frame;

    #[test]
    fn scenario_row_derives_known_calendar_facts() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let frame = enriched.frame();

        // 2015-01-04 08:00:00 was a Sunday; its raw flags say working day.
        assert_eq!(frame.column(DAY_OF_WEEK)?.i32()?.get(0), Some(7));
        assert_eq!(frame.column(DAY_OF_WEEK_NAME)?.str()?.get(0), Some("Sunday"));
        assert_eq!(frame.column(MONTH_NAME)?.str()?.get(0), Some("January"));
        assert_eq!(frame.column(YEAR)?.i32()?.get(0), Some(2015));
        assert_eq!(frame.column(HOUR)?.i32()?.get(0), Some(8));
        assert_eq!(frame.column(SEASON_NAME)?.str()?.get(0), Some("winter"));
        assert_eq!(frame.column(WEATHER_DESCRIPTION)?.str()?.get(0), Some("Clear"));
        assert_eq!(frame.column(DAY_TYPE)?.str()?.get(0), Some("Working Day"));
        assert_eq!(frame.column(COUNT)?.i64()?.get(0), Some(182));
        assert_eq!(frame.column(COMMUTE_HOURS)?.i32()?.get(0), Some(1));
        assert_eq!(frame.column(WEATHER_SEVERITY)?.i32()?.get(0), Some(0));
        Ok(())
    }

    #[test]
    fn day_type_is_total_and_holiday_takes_precedence() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let frame = enriched.frame();
        let day_types = frame.column(DAY_TYPE)?.str()?;
        let holidays = frame.column(IS_HOLIDAY)?.i32()?;
        let weekends = frame.column(IS_WEEKEND)?.i32()?;

        for index in 0..frame.height() {
            let label = day_types.get(index).expect("day_type must never be null");
            assert!(
                DayType::from_label(label).is_some(),
                "unknown day_type label '{label}'"
            );
            if holidays.get(index) == Some(1) {
                assert_eq!(label, "Holiday", "holiday must win regardless of weekend flag");
            } else if weekends.get(index) == Some(1) {
                assert_eq!(label, "Weekend");
            } else {
                assert_eq!(label, "Working Day");
            }
        }
        Ok(())
    }

    #[test]
    fn comfort_index_stays_within_achievable_bound() -> Result<(), Box<dyn std::error::Error>> {
        // The weights sum to 1.2, so the real bound is [0, 1.2] and not the
        // narrative's [0, 1].
        let enriched = enrich(sample_raw_frame())?;
        let comfort = enriched.frame().column(COMFORT_INDEX)?.f64()?;
        for value in comfort.into_iter().flatten() {
            assert!(
                (0.0..=TEMPERATURE_WEIGHT + HUMIDITY_WEIGHT + WIND_WEIGHT).contains(&value),
                "comfort_index {value} outside [0, 1.2]"
            );
        }
        Ok(())
    }

    #[test]
    fn weather_severity_matches_the_severe_set() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let frame = enriched.frame();
        let descriptions = frame.column(WEATHER_DESCRIPTION)?.str()?;
        let severities = frame.column(WEATHER_SEVERITY)?.i32()?;

        for index in 0..frame.height() {
            let expected = match descriptions.get(index) {
                Some(description) => WeatherCode::SEVERE_DESCRIPTIONS.contains(&description),
                // Unmapped code: null description, never severe.
                None => false,
            };
            assert_eq!(severities.get(index), Some(expected as i32));
        }
        // The fixture contains all three severe conditions and one unmapped code.
        assert_eq!(severities.sum(), Some(3));
        assert_eq!(descriptions.null_count(), 1);
        Ok(())
    }

    #[test]
    fn single_row_input_hits_the_degenerate_range_fallback(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let raw = polars::df!(
            TIMESTAMP => ["2015-01-04 08:00:00"],
            RAW_COUNT => [182i64],
            RAW_REAL_TEMPERATURE => [3.0],
            RAW_FEELS_LIKE_TEMPERATURE => [2.0],
            RAW_HUMIDITY => [93.0],
            WIND_SPEED => [6.0],
            WEATHER_CODE => [1i64],
            IS_HOLIDAY => [0i64],
            IS_WEEKEND => [0i64],
            SEASON => [3i64],
        )?;

        let enriched = enrich(raw)?;
        let comfort = enriched
            .frame()
            .column(COMFORT_INDEX)?
            .f64()?
            .get(0)
            .expect("comfort_index must be defined for a single row");
        // Both min-max components are zero-width, so only humidity contributes.
        assert!((comfort - HUMIDITY_WEIGHT * 0.93).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn enrichment_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let first = enrich(sample_raw_frame())?;
        let second = enrich(sample_raw_frame())?;
        assert!(first.frame().equals_missing(second.frame()));
        Ok(())
    }

    #[test]
    fn unparseable_timestamp_fails_the_whole_pipeline() -> Result<(), Box<dyn std::error::Error>> {
        let raw = polars::df!(
            TIMESTAMP => ["2015-01-04 08:00:00", "not a timestamp"],
            RAW_COUNT => [182i64, 10],
            RAW_REAL_TEMPERATURE => [3.0, 4.0],
            RAW_FEELS_LIKE_TEMPERATURE => [2.0, 3.0],
            RAW_HUMIDITY => [93.0, 90.0],
            WIND_SPEED => [6.0, 7.0],
            WEATHER_CODE => [1i64, 2],
            IS_HOLIDAY => [0i64, 0],
            IS_WEEKEND => [0i64, 0],
            SEASON => [3i64, 3],
        )?;

        assert!(matches!(
            enrich(raw),
            Err(DatasetError::TimestampParse(_))
        ));
        Ok(())
    }

    #[test]
    fn missing_raw_column_fails_before_compute() -> Result<(), Box<dyn std::error::Error>> {
        let raw = sample_raw_frame().drop(WIND_SPEED)?;
        match enrich(raw) {
            Err(DatasetError::MissingColumn { column }) => assert_eq!(column, WIND_SPEED),
            other => panic!("expected MissingColumn, got {:?}", other.is_ok()),
        }
        Ok(())
    }
}
