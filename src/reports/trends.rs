//! Report 3: yearly, monthly, daily and hourly bike-sharing trends.

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
    let mut output = ReportOutput::new(Report::Trends);

    let yearly = frame
        .lazy()
        .group_by([col(YEAR)])
        .agg([col(COUNT).mean()])
        .sort([YEAR], SortMultipleOptions::default())
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Bar)
            .title("Yearly Bike Average Consumption")
            .x(YEAR)
            .y(COUNT)
            .color(COUNT)
            .build(),
        yearly,
    );

    let monthly = frame
        .lazy()
        .group_by([col(MONTH), col(MONTH_NAME)])
        .agg([col(COUNT).sum()])
        .sort([MONTH], SortMultipleOptions::default())
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Bar)
            .title("Monthly Bike Consumption")
            .x(MONTH_NAME)
            .y(COUNT)
            .category_order(calendar::month_order())
            .build(),
        monthly,
    );
    output.push_narrative(
        "January and February have roughly similar bike shares, indicating steady demand at the \
         start of the year. From March there is an upward trend peaking in July, as the weather \
         improves from spring to summer. Post-July there is a decline, with December seeing the \
         lowest shares after January and February.",
    );

    let hourly_by_day = frame
        .lazy()
        .group_by([col(HOUR), col(DAY_OF_WEEK), col(DAY_OF_WEEK_NAME)])
        .agg([col(COUNT).mean()])
        .sort([HOUR, DAY_OF_WEEK], SortMultipleOptions::default())
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Heatmap)
            .title("Average Bike Shares by Hour and Day of the Week")
            .x(DAY_OF_WEEK_NAME)
            .y(HOUR)
            .category_order(calendar::day_order())
            .build(),
        hourly_by_day,
    );
    output.push_narrative(
        "Weekdays (Monday to Friday) show two prominent peaks: one in the morning around 8 AM \
         and another in the evening around 5-6 PM, corresponding to commute hours. Weekends do \
         not have these pronounced peaks; usage is spread through the day, peaking in the early \
         afternoon.",
    );

    let by_day_of_week = frame
        .lazy()
        .group_by([col(DAY_OF_WEEK), col(DAY_OF_WEEK_NAME)])
        .agg([col(COUNT).sum()])
        .sort([DAY_OF_WEEK], SortMultipleOptions::default())
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Bar)
            .title("Average Bike Shares by Day of the Week")
            .x(DAY_OF_WEEK_NAME)
            .y(COUNT)
            .color(COUNT)
            .category_order(calendar::day_order())
            .build(),
        by_day_of_week,
    );
    output.push_narrative(
        "Bike shares are highest on weekdays, peaking around Wednesday and Thursday, suggesting \
         frequent use for weekday commutes. There is a noticeable drop on Saturday and Sunday.",
    );

    let hourly_by_season = frame
        .lazy()
        .group_by([col(HOUR), col(SEASON_NAME)])
        .agg([col(COUNT).mean()])
        .sort([HOUR, SEASON_NAME], SortMultipleOptions::default())
        .collect()?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Line)
            .title("Average Bike Shares per Hour by Season")
            .x(HOUR)
            .y(COUNT)
            .color(SEASON_NAME)
            .color_map(palette::season_color_map())
            .build(),
        hourly_by_season,
    );
    output.push_narrative(
        "Two clear peaks appear in every season, one around 8 AM and one around 5-6 PM. Summer, \
         spring and Autumn run well above winter, likely due to favorable weather.",
    );

    // Hour by day type is shown point by point rather than aggregated.
    let hour_by_day_type = frame.select(&[HOUR, COUNT, DAY_TYPE])?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Scatter)
            .title("Average Bike Shares per Hour by Day Type")
            .x(HOUR)
            .y(COUNT)
            .color(DAY_TYPE)
            .build(),
        hour_by_day_type,
    );

    for (flag, title) in [
        (IS_WEEKEND, "Hourly Bike Shares: 1= Weekends vs. 0= Weekdays"),
        (IS_HOLIDAY, "Hourly Bike Shares: 1= Holidays vs. 0= Non-Holidays"),
    ] {
        let hourly_by_flag = frame
            .lazy()
            .group_by([col(HOUR), col(flag)])
            .agg([col(COUNT).mean()])
            .sort([HOUR, flag], SortMultipleOptions::default())
            .collect()?;
        output.push_chart(
            ChartSpec::builder()
                .kind(ChartKind::Line)
                .title(title)
                .x(HOUR)
                .y(COUNT)
                .color(flag)
                .build(),
            hourly_by_flag,
        );
    }

    output.push_narrative(
        "**Bike Sharing Trends:** there is a yearly rise in bike consumption, higher shares \
         during summer months and lower during winter, and an hourly pattern that mirrors \
         commute behaviour with morning and evening rush peaks. Recognizing these patterns \
         helps in optimizing resources and services.",
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::enrich::enrich;
    use crate::dataset::sample_raw_frame;
    use crate::reports::output::ReportBlock;

    #[test]
    fn yearly_aggregation_covers_both_years() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let report = build(&enriched)?;

        let yearly = report
            .blocks
            .iter()
            .find_map(|block| match block {
                ReportBlock::Chart { spec, data }
                    if spec.title == "Yearly Bike Average Consumption" =>
                {
                    Some(data)
                }
                _ => None,
            })
            .expect("yearly chart must exist");

        assert_eq!(yearly.height(), 2);
        assert_eq!(yearly.column(YEAR)?.i32()?.get(0), Some(2015));
        assert_eq!(yearly.column(YEAR)?.i32()?.get(1), Some(2016));
        Ok(())
    }

    #[test]
    fn day_of_week_axis_is_pinned_monday_first() -> Result<(), Box<dyn std::error::Error>> {
        let enriched = enrich(sample_raw_frame())?;
        let report = build(&enriched)?;

        let spec = report
            .blocks
            .iter()
            .find_map(|block| match block {
                ReportBlock::Chart { spec, .. }
                    if spec.title == "Average Bike Shares by Day of the Week" =>
                {
                    Some(spec)
                }
                _ => None,
            })
            .expect("day-of-week chart must exist");

        let order = spec.category_order.as_ref().expect("ordering must be pinned");
        assert_eq!(order.first().map(String::as_str), Some("Monday"));
        assert_eq!(order.last().map(String::as_str), Some("Sunday"));
        Ok(())
    }
}
