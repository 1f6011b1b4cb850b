use crate::dataset::error::DatasetError;
use crate::dataset::schema::*;
use crate::types::day_type::DayType;
use crate::types::observation::Observation;
use crate::types::season::Season;
use crate::types::weather_code::WeatherCode;
use polars::prelude::*;

/// The immutable enriched table produced by the feature pipeline.
///
/// Reports read it through lazy queries or the typed accessors below; nothing
/// mutates it after construction. Cloning is cheap enough for the table sizes
/// involved, and every derived query starts from a fresh `LazyFrame` so the
/// wrapped frame is never observed mid-computation.
#[derive(Debug, Clone)]
pub struct EnrichedFrame {
    frame: DataFrame,
}

impl EnrichedFrame {
    pub(crate) fn new(frame: DataFrame) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Starts a lazy query over the enriched table.
    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    /// Row-level projection of the given columns, in the given order.
    pub fn select(&self, columns: &[&str]) -> PolarsResult<DataFrame> {
        self.frame.select(columns.iter().copied())
    }

    /// Row-level projection after a filter.
    pub fn filtered_select(&self, predicate: Expr, columns: &[&str]) -> PolarsResult<DataFrame> {
        let projection: Vec<Expr> = columns.iter().map(|column| col(*column)).collect();
        self.lazy().filter(predicate).select(projection).collect()
    }

    /// A column's values as `f64`, nulls preserved. Used for the pairwise
    /// correlation matrix.
    pub fn column_values(&self, column: &str) -> PolarsResult<Vec<Option<f64>>> {
        Ok(self
            .frame
            .column(column)?
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .collect())
    }

    /// The non-null `f64` values of a column for rows matching a predicate.
    /// Used to build hypothesis-test partitions.
    pub fn values_where(&self, column: &str, predicate: Expr) -> PolarsResult<Vec<f64>> {
        let selected = self
            .lazy()
            .filter(predicate)
            .select([col(column).cast(DataType::Float64)])
            .collect()?;
        Ok(selected.column(column)?.f64()?.into_iter().flatten().collect())
    }

    /// The ungrouped total of `count_of_new_bike_shares`.
    pub fn total_count(&self) -> PolarsResult<i64> {
        Ok(self.frame.column(COUNT)?.i64()?.sum().unwrap_or(0))
    }

    /// Materializes every row as a typed [`Observation`].
    ///
    /// This is the row-wise view of the table for consumers that prefer
    /// compile-time-checked field access over column names.
    pub fn observations(&self) -> Result<Vec<Observation>, DatasetError> {
        let frame = &self.frame;
        let timestamps = frame.column(TIMESTAMP)?.datetime()?;
        let counts = frame.column(COUNT)?.i64()?;
        let real_temperatures = frame.column(REAL_TEMPERATURE_C)?.f64()?;
        let feels_like = frame.column(FEELS_LIKE_TEMPERATURE_C)?.f64()?;
        let humidities = frame.column(HUMIDITY_PERCENTAGE)?.f64()?;
        let wind_speeds = frame.column(WIND_SPEED)?.f64()?;
        let weather_codes = frame.column(WEATHER_CODE)?.i32()?;
        let holidays = frame.column(IS_HOLIDAY)?.i32()?;
        let weekends = frame.column(IS_WEEKEND)?.i32()?;
        let seasons = frame.column(SEASON)?.i32()?;
        let days_of_week = frame.column(DAY_OF_WEEK)?.i32()?;
        let months = frame.column(MONTH)?.i32()?;
        let years = frame.column(YEAR)?.i32()?;
        let hours = frame.column(HOUR)?.i32()?;
        let day_types = frame.column(DAY_TYPE)?.str()?;
        let comfort_indices = frame.column(COMFORT_INDEX)?.f64()?;
        let severities = frame.column(WEATHER_SEVERITY)?.i32()?;
        let commute_flags = frame.column(COMMUTE_HOURS)?.i32()?;

        let missing = |column: &str, index: usize| {
            DatasetError::UnexpectedState(format!("null {column} at row {index}"))
        };

        let mut observations = Vec::with_capacity(frame.height());
        for index in 0..frame.height() {
            let millis = timestamps
                .get(index)
                .ok_or_else(|| missing(TIMESTAMP, index))?;
            let timestamp = chrono::DateTime::from_timestamp_millis(millis)
                .ok_or_else(|| missing(TIMESTAMP, index))?
                .naive_utc();
            let season_code = seasons.get(index).ok_or_else(|| missing(SEASON, index))? as i64;
            let day_type_label = day_types.get(index).ok_or_else(|| missing(DAY_TYPE, index))?;

            observations.push(Observation {
                timestamp,
                count_of_new_bike_shares: counts
                    .get(index)
                    .ok_or_else(|| missing(COUNT, index))?,
                real_temperature_c: real_temperatures
                    .get(index)
                    .ok_or_else(|| missing(REAL_TEMPERATURE_C, index))?,
                feels_like_temperature_c: feels_like
                    .get(index)
                    .ok_or_else(|| missing(FEELS_LIKE_TEMPERATURE_C, index))?,
                humidity_percentage: humidities
                    .get(index)
                    .ok_or_else(|| missing(HUMIDITY_PERCENTAGE, index))?,
                wind_speed: wind_speeds
                    .get(index)
                    .ok_or_else(|| missing(WIND_SPEED, index))?,
                weather_code: weather_codes
                    .get(index)
                    .and_then(|code| WeatherCode::from_i64(code as i64)),
                is_holiday: holidays.get(index) == Some(1),
                is_weekend: weekends.get(index) == Some(1),
                season: Season::from_i64(season_code).ok_or_else(|| {
                    DatasetError::UnexpectedState(format!(
                        "season code {season_code} outside 0..=3 at row {index}"
                    ))
                })?,
                day_of_week: days_of_week
                    .get(index)
                    .ok_or_else(|| missing(DAY_OF_WEEK, index))?,
                month: months.get(index).ok_or_else(|| missing(MONTH, index))?,
                year: years.get(index).ok_or_else(|| missing(YEAR, index))?,
                hour: hours.get(index).ok_or_else(|| missing(HOUR, index))?,
                day_type: DayType::from_label(day_type_label).ok_or_else(|| {
                    DatasetError::UnexpectedState(format!(
                        "unknown day_type label '{day_type_label}' at row {index}"
                    ))
                })?,
                comfort_index: comfort_indices
                    .get(index)
                    .ok_or_else(|| missing(COMFORT_INDEX, index))?,
                weather_severity: severities.get(index) == Some(1),
                commute_hours: commute_flags.get(index) == Some(1),
            });
        }
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::enrich::enrich;
    use crate::dataset::sample_raw_frame;

    #[test]
    fn observations_expose_typed_rows() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let observations = enriched.observations()?;
        assert_eq!(observations.len(), enriched.height());

        let first = &observations[0];
        assert_eq!(first.count_of_new_bike_shares, 182);
        assert_eq!(first.season, Season::Winter);
        assert_eq!(first.day_type, DayType::WorkingDay);
        assert_eq!(first.weather_code, Some(WeatherCode::Clear));
        assert_eq!(first.weather_description(), Some("Clear"));
        assert!(first.commute_hours);

        // The fixture's unmapped weather code surfaces as None, not an error.
        assert!(observations.iter().any(|o| o.weather_code.is_none()));
        Ok(())
    }

    #[test]
    fn values_where_partitions_on_flags() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let holiday = enriched.values_where(COUNT, col(IS_HOLIDAY).eq(lit(1)))?;
        let non_holiday = enriched.values_where(COUNT, col(IS_HOLIDAY).eq(lit(0)))?;
        assert_eq!(holiday.len() + non_holiday.len(), enriched.height());
        assert!(!holiday.is_empty());
        Ok(())
    }

    #[test]
    fn total_count_sums_the_dependent_variable() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        assert_eq!(enriched.total_count()?, 1922);
        Ok(())
    }
}
