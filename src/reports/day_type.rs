//! Report 4: bike shares based on day type.

use crate::dataset::enriched_frame::EnrichedFrame;
use crate::dataset::schema::*;
use crate::reports::error::ReportError;
use crate::reports::output::ReportOutput;
use crate::types::chart::{ChartKind, ChartSpec};
use crate::types::report::Report;
use polars::prelude::*;

pub(crate) fn build(frame: &EnrichedFrame) -> Result<ReportOutput, ReportError> {
    let mut output = ReportOutput::new(Report::DayType);

    let by_day_type = sum_by_day_type(frame)?;
    output.push_chart(
        ChartSpec::builder()
            .kind(ChartKind::Pie)
            .title("Bike Shares based on Holidays, Weekends, and Working Days")
            .x(DAY_TYPE)
            .y(COUNT)
            .build(),
        by_day_type,
    );
    output.push_narrative(
        "If working days occupy a significant portion of the pie, bikes are primarily used for \
         daily commuting; a small slice for holidays indicates reduced biking in favour of \
         leisure activities or other transport for longer trips.",
    );

    for (flag, box_title, bar_title, ticks, commentary) in [
        (
            IS_HOLIDAY,
            "Box Plot: Is Holiday vs. Count of New Bike Shares",
            "Total Bike Shares: Non-Holidays vs. Holidays",
            ["Non-Holiday", "Holiday"],
            "A noticeable dip in bike shares on holidays would mean that people either do not \
             commute or use bikes for different purposes on those days.",
        ),
        (
            IS_WEEKEND,
            "Box Plot: Is Weekend vs. Count of New Bike Shares",
            "Total Bike Shares: Weekdays vs. Weekends",
            ["Non-Weekend", "Weekend"],
            "Higher counts on weekends would suggest recreational use, while higher counts on \
             weekdays indicate commuting.",
        ),
    ] {
        // Row-level distribution for the box plot.
        let distribution = frame.select(&[flag, COUNT])?;
        output.push_chart(
            ChartSpec::builder()
                .kind(ChartKind::Box)
                .title(box_title)
                .x(flag)
                .y(COUNT)
                .color(flag)
                .category_order(ticks.iter().map(|t| t.to_string()).collect())
                .build(),
            distribution,
        );

        let totals = frame
            .lazy()
            .group_by([col(flag)])
            .agg([col(COUNT).sum()])
            .sort([flag], SortMultipleOptions::default())
            .collect()?;
        output.push_chart(
            ChartSpec::builder()
                .kind(ChartKind::Bar)
                .title(bar_title)
                .x(flag)
                .y(COUNT)
                .color(flag)
                .category_order(ticks.iter().map(|t| t.to_string()).collect())
                .build(),
            totals,
        );
        output.push_narrative(commentary);
    }

    output.push_narrative(
        "**Bike Shares Based on Day Type:** shares are typically lower on holidays and weekends \
         than on regular weekdays. Understanding these variations helps in making informed \
         decisions about bike placements and offers to boost usage on quiet days.",
    );

    Ok(output)
}

pub(crate) fn sum_by_day_type(frame: &EnrichedFrame) -> Result<DataFrame, ReportError> {
    Ok(frame
        .lazy()
        .group_by([col(DAY_TYPE)])
        .agg([col(COUNT).sum()])
        .sort([DAY_TYPE], SortMultipleOptions::default())
        .collect()?)
}
