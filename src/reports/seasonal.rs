//! Report 6: seasonal and weather-severity analysis.

use crate::dataset::enriched_frame::EnrichedFrame;
use crate::dataset::schema::*;
use crate::reports::error::ReportError;
use crate::reports::output::ReportOutput;
use crate::types::calendar;
use crate::types::chart::{ChartKind, ChartSpec};
use crate::types::palette;
use crate::types::report::Report;
use polars::prelude::*;

pub(crate) fn build(frame: &EnrichedFrame) -> Result<ReportOutput, ReportError> {
    let mut output = ReportOutput::new(Report::SeasonalWeather);

    let monthly_comfort = frame
        .lazy()
        .group_by([col(MONTH), col(MONTH_NAME)])
        .agg([col(COMFORT_INDEX).mean(), col(COUNT).sum()])
        .sort([MONTH], SortMultipleOptions::default())
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Bar)
            .title("Monthly Bike Consumption vs. Comfort Index")
            .x(MONTH_NAME)
            .y(COUNT)
            .color(COUNT)
            .category_order(calendar::month_order())
            .build(),
        monthly_comfort,
    );
    output.push_narrative(
        "If months with a higher comfort index also show higher bike shares, users prefer to \
         rent bikes when environmental conditions are favorable; months with high shares despite \
         a low comfort index point at other drivers (holidays, events, promotions). This view \
         links environmental comfort to bike-sharing behaviour for infrastructure and promotion \
         decisions.",
    );

    let comfort_scatter = frame.select(&[COMFORT_INDEX, COUNT, SEASON_NAME])?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Scatter)
            .title("Scatter Plot: Comfort Index vs. Count of New Bike Shares")
            .x(COMFORT_INDEX)
            .y(COUNT)
            .color(SEASON_NAME)
            .color_map(palette::season_color_map())
            .build(),
        comfort_scatter,
    );
    output.push_narrative(
        "As the comfort index increases, the number of bike shares rises: people ride more when \
         the weather is comfortable. A high comfort index signals optimal temperature and \
         humidity and a surge in rentals; a low one reduces demand, making the index useful for \
         forecasting, inventory planning and promotional timing.",
    );

    let by_season_day_type = frame
        .lazy()
        .group_by([col(SEASON_NAME), col(DAY_TYPE)])
        .agg([col(COUNT).sum()])
        .sort(
            [COUNT],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Bar)
            .title("Bike Shares by Day Type in Each Season")
            .x(SEASON_NAME)
            .y(COUNT)
            .color(DAY_TYPE)
            .build(),
        by_season_day_type.clone(),
    );

    let shares = share_of_overall_total(&by_season_day_type, frame.total_count()?)?;
    output.push_table("Bike shares by season and day type, share of overall total", shares);
    output.push_narrative(
        "Across all seasons, working days consistently have the highest bike shares: a \
         significant portion of London's bike users rely on bikes for daily commutes. Weekends \
         trail working days noticeably, and holidays have the least shares.",
    );

    let season_distribution = frame.select(&[SEASON_NAME, COUNT])?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Box)
            .title("Distribution of Bike Shares by Season")
            .x(SEASON_NAME)
            .y(COUNT)
            .color(SEASON_NAME)
            .color_map(palette::season_color_map())
            .build(),
        season_distribution.clone(),
    );
    output.push_narrative(
        "Spring sees a moderate number of shares; summer exhibits the highest demand with the \
         highest median and a wide interquartile range; Autumn sits slightly below summer with a \
         compressed range; winter has the lowest median, reflecting colder temperatures and \
         adverse conditions.",
    );

    let by_season = frame
        .lazy()
        .group_by([col(SEASON_NAME)])
        .agg([col(COUNT).sum()])
        .sort(
            [COUNT],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Pie)
            .title("Bike Shares based on Seasons")
            .x(SEASON_NAME)
            .y(COUNT)
            .color(SEASON_NAME)
            .color_map(palette::season_color_map())
            .build(),
        by_season.clone(),
    );
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Histogram)
            .title("Distribution of Bike Shares by Season")
            .x(SEASON_NAME)
            .y(COUNT)
            .color(SEASON_NAME)
            .color_map(palette::season_color_map())
            .build(),
        by_season,
    );
    output.push_narrative(
        "Summer is the predominant season for bike sharing, followed by spring, then autumn and \
         winter.",
    );

    let severity_distribution = frame.select(&[WEATHER_SEVERITY, COUNT])?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Box)
            .title("Weather Severity vs. Count of New Bike Shares")
            .x(WEATHER_SEVERITY)
            .y(COUNT)
            .color(WEATHER_SEVERITY)
            .category_order(vec!["Non Severe".to_string(), "Severe".to_string()])
            .build(),
        severity_distribution,
    );

    let weather_frequency = frame
        .lazy()
        .group_by([col(WEATHER_DESCRIPTION)])
        .agg([len().alias("observations")])
        .sort(
            ["observations"],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Histogram)
            .title("Frequency of Weather Conditions")
            .x(WEATHER_DESCRIPTION)
            .y("observations")
            .color(WEATHER_DESCRIPTION)
            .color_map(palette::weather_color_map())
            .build(),
        weather_frequency,
    );

    let weather_distribution = frame.select(&[WEATHER_DESCRIPTION, COUNT])?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Box)
            .title("Bike Shares Distribution by Weather Condition")
            .x(WEATHER_DESCRIPTION)
            .y(COUNT)
            .color(WEATHER_DESCRIPTION)
            .color_map(palette::weather_color_map())
            .build(),
        weather_distribution,
    );
    output.push_narrative(
        "Clear skies and few clouds show healthy demand with high medians; broken clouds and \
         cloudy conditions barely dent it. Light rain still draws many riders, though with a \
         broader spread. Thunderstorms drop demand markedly, and snowfall reduces shares too, \
         though its median stays above thunderstorms.",
    );

    let by_weather = frame
        .lazy()
        .group_by([col(WEATHER_DESCRIPTION)])
        .agg([col(COUNT).sum()])
        .sort(
            [COUNT],
            SortMultipleOptions::default().with_order_descending(true),
        )
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Pie)
            .title("Bike Shares based on Weather Description")
            .x(WEATHER_DESCRIPTION)
            .y(COUNT)
            .color(WEATHER_DESCRIPTION)
            .color_map(palette::weather_color_map())
            .build(),
        by_weather,
    );

    output.push_narrative(
        "**Conclusion:** bike shares vary significantly with the seasons — summer and spring \
         well above autumn and winter — and are highest on clear days, dropping sharply during \
         snowfall and freezing fog. Preparing for these fluctuations by adjusting the number of \
         available bikes or promoting usage during less popular times pays off.",
    );

    Ok(output)
}

/// Builds the presentation table of season × day-type totals where each
/// cell's percentage is taken against the overall total count, not the
/// per-group total. Counts are thousands-separated and percentages carry one
/// decimal, sorted descending.
fn share_of_overall_total(
    by_season_day_type: &DataFrame,
    overall_total: i64,
) -> Result<DataFrame, ReportError> {
    let seasons = by_season_day_type.column(SEASON_NAME)?.str()?;
    let day_types = by_season_day_type.column(DAY_TYPE)?.str()?;
    let counts = by_season_day_type.column(COUNT)?.i64()?;

    let mut season_labels = Vec::with_capacity(by_season_day_type.height());
    let mut day_type_labels = Vec::with_capacity(by_season_day_type.height());
    let mut formatted_counts = Vec::with_capacity(by_season_day_type.height());
    let mut percentages = Vec::with_capacity(by_season_day_type.height());

    for index in 0..by_season_day_type.height() {
        let count = counts.get(index).unwrap_or(0);
        let percentage = if overall_total > 0 {
            count as f64 / overall_total as f64 * 100.0
        } else {
            0.0
        };
        season_labels.push(seasons.get(index).unwrap_or_default().to_string());
        day_type_labels.push(day_types.get(index).unwrap_or_default().to_string());
        formatted_counts.push(format_thousands(count));
        percentages.push(format!("{percentage:.1}%"));
    }

    Ok(polars::df!(
        SEASON_NAME => season_labels,
        DAY_TYPE => day_type_labels,
        COUNT => formatted_counts,
        "percentage" => percentages,
    )?)
}

fn format_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::enrich::enrich;
    use crate::dataset::sample_raw_frame;

    #[test]
    fn thousands_formatting_groups_digits() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-54321), "-54,321");
    }

    #[test]
    fn share_table_percentages_are_against_the_overall_total(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let grouped = enriched
            .lazy()
            .group_by([col(SEASON_NAME), col(DAY_TYPE)])
            .agg([col(COUNT).sum()])
            .sort(
                [COUNT],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .collect()?;

        let table = share_of_overall_total(&grouped, enriched.total_count()?)?;
        let percentages = table.column("percentage")?.str()?;
        let total: f64 = (0..table.height())
            .filter_map(|index| percentages.get(index))
            .filter_map(|formatted| formatted.strip_suffix('%'))
            .filter_map(|number| number.parse::<f64>().ok())
            .sum();

        // One-decimal rounding may drift slightly off 100.
        assert!((total - 100.0).abs() < 0.5, "percentages sum to {total}");
        Ok(())
    }

    #[test]
    fn empty_input_yields_an_empty_share_table() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let empty = enriched
            .lazy()
            .filter(col(SEASON_NAME).eq(lit("no such season")))
            .group_by([col(SEASON_NAME), col(DAY_TYPE)])
            .agg([col(COUNT).sum()])
            .collect()?;

        let table = share_of_overall_total(&empty, enriched.total_count()?)?;
        assert_eq!(table.height(), 0);
        Ok(())
    }
}
