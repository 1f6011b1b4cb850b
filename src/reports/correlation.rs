//! Report 2: the pairwise correlation matrix and the feature-vs-count
//! relationship charts.

use crate::dataset::enriched_frame::EnrichedFrame;
use crate::dataset::schema::*;
use crate::reports::error::ReportError;
use crate::reports::output::ReportOutput;
use crate::stats;
use crate::types::chart::{ChartKind, ChartSpec};
use crate::types::report::Report;
use polars::prelude::*;

/// The numeric columns entering the matrix, in stable presentation order.
const NUMERIC_COLUMNS: [&str; 11] = [
    COUNT,
    REAL_TEMPERATURE_C,
    FEELS_LIKE_TEMPERATURE_C,
    HUMIDITY_PERCENTAGE,
    WIND_SPEED,
    WEATHER_CODE,
    IS_HOLIDAY,
    IS_WEEKEND,
    SEASON,
    HOUR,
    COMFORT_INDEX,
];

pub(crate) fn build(frame: &EnrichedFrame) -> Result<ReportOutput, ReportError> {
    let mut output = ReportOutput::new(Report::Correlation);

    let matrix = correlation_matrix(frame)?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Heatmap)
            .title("Heatmap for Correlation Between Numerical Variables")
            .x("feature")
            .y("feature")
            .build(),
        matrix.clone(),
    );
    output.push_table("Pearson correlation matrix (pairwise complete)", matrix);
    output.push_narrative(
        "**Correlation Analysis:** the real temperature has a significant positive correlation \
         with the number of bike shares: as the temperature becomes more comfortable, bike \
         shares tend to increase. Humidity and wind speed also show some degree of correlation \
         with bike shares, but not as pronounced as the temperature.",
    );

    for (feature, title, commentary) in [
        (
            REAL_TEMPERATURE_C,
            "Relation with the Temperature and Number of Bicycle",
            "Comfortable temperatures draw more riders; extremes at either end deter them, \
             suggesting a sweet spot of outdoor temperatures where bike sharing peaks.",
        ),
        (
            HUMIDITY_PERCENTAGE,
            "Relation with the Humidity and Number of Bicycle",
            "High humidity is uncomfortable for outdoor activity and corresponds to fewer \
             shares; extremely dry conditions are also unpopular, leaving a comfortable middle \
             range where bike sharing is most common.",
        ),
        (
            WIND_SPEED,
            "Relation with the Wind Speed and Number of Bicycle",
            "Bike shares stay roughly consistent up to about 30-35 units of wind speed and \
             decrease beyond that point, where observations also become sparse.",
        ),
    ] {
        let pairs = frame.select(&[feature, COUNT])?;
        output.push_chart(
            ChartSpec::builder()
                .kind(ChartKind::Line)
                .title(title)
                .x(feature)
                .y(COUNT)
                .build(),
            pairs,
        );
        output.push_narrative(commentary);
    }

    // The wind-speed relationship is additionally shown point by point.
    let wind_pairs = frame.select(&[WIND_SPEED, COUNT])?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Scatter)
            .title("Wind Speed vs. Count of New Bike Shares")
            .x(WIND_SPEED)
            .y(COUNT)
            .color(WIND_SPEED)
            .build(),
        wind_pairs,
    );

    Ok(output)
}

/// Builds the full pairwise-complete Pearson matrix as a table whose first
/// column names the feature and whose remaining columns mirror
/// [`NUMERIC_COLUMNS`]. Undefined cells (constant column) are null.
fn correlation_matrix(frame: &EnrichedFrame) -> Result<DataFrame, ReportError> {
    let mut column_values = Vec::with_capacity(NUMERIC_COLUMNS.len());
    for column in NUMERIC_COLUMNS {
        column_values.push(frame.column_values(column)?);
    }

    let feature_names: Vec<&str> = NUMERIC_COLUMNS.to_vec();
    let mut columns: Vec<Column> = Vec::with_capacity(NUMERIC_COLUMNS.len() + 1);
    columns.push(Column::new("feature".into(), feature_names));

    for (column_index, column) in NUMERIC_COLUMNS.iter().enumerate() {
        let correlations: Vec<Option<f64>> = column_values
            .iter()
            .map(|other| stats::pearson_pairwise(other, &column_values[column_index]))
            .collect();
        columns.push(Column::new((*column).into(), correlations));
    }

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::enrich::enrich;
    use crate::dataset::sample_raw_frame;

    #[test]
    fn matrix_is_square_with_unit_diagonal() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let matrix = correlation_matrix(&enriched)?;

        assert_eq!(matrix.height(), NUMERIC_COLUMNS.len());
        assert_eq!(matrix.width(), NUMERIC_COLUMNS.len() + 1);

        for (row, column) in NUMERIC_COLUMNS.iter().enumerate() {
            let value = matrix.column(column)?.f64()?.get(row);
            let diagonal = value.expect("diagonal must be defined for non-constant columns");
            assert!(
                (diagonal - 1.0).abs() < 1e-9,
                "diagonal of {column} is {diagonal}"
            );
        }
        Ok(())
    }

    #[test]
    fn matrix_is_symmetric() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let matrix = correlation_matrix(&enriched)?;

        for (row_index, row_name) in NUMERIC_COLUMNS.iter().enumerate() {
            for (column_index, column_name) in NUMERIC_COLUMNS.iter().enumerate() {
                let a = matrix.column(column_name)?.f64()?.get(row_index);
                let b = matrix.column(row_name)?.f64()?.get(column_index);
                match (a, b) {
                    (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9),
                    (None, None) => {}
                    other => panic!("asymmetric nullity at ({row_name}, {column_name}): {other:?}"),
                }
            }
        }
        Ok(())
    }
}
