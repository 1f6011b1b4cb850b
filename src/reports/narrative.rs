//! The two text-only reports, plus their static copy.

use crate::reports::output::ReportOutput;
use crate::types::report::Report;

pub(crate) fn introduction() -> ReportOutput {
    let mut output = ReportOutput::new(Report::Introduction);
    output.push_narrative(
        "## Introduction\n\
         ### Context\n\
         The rise of bike-sharing systems has revolutionized urban mobility, providing a \
         sustainable and eco-friendly transportation alternative. London has embraced this mode \
         of transportation, with numerous bike-sharing hubs dotting its landscape. For such \
         systems to thrive, it is essential to understand the dynamics of usage patterns: not \
         just the volume of users but the external factors that influence their choices.\n\n\
         This market research study delves into London's bike-sharing patterns, exploring how \
         time, weather, day types and other factors interplay in determining bike-sharing \
         trends, to give stakeholders a holistic understanding of the system's utilization.",
    );
    output.push_narrative(
        "### Columns Description\n\
         - **timestamp** - timestamp field for grouping the data\n\
         - **cnt** - the count of new bike shares\n\
         - **t1** - real temperature in C\n\
         - **t2** - temperature in C \"feels like\"\n\
         - **hum** - humidity in percentage\n\
         - **wind_speed** - wind speed in km/h\n\
         - **weather_code** - category of the weather\n\
         - **is_holiday** - boolean field - 1 holiday / 0 non holiday\n\
         - **is_weekend** - boolean field - 1 if the day is weekend\n\
         - **season** - meteorological seasons: 0-spring; 1-summer; 2-fall; 3-winter\n\n\
         **weather_code categories:** 1 = Clear; 2 = scattered/few clouds; 3 = broken clouds; \
         4 = cloudy; 7 = rain/light rain shower; 10 = rain with thunderstorm; 26 = snowfall; \
         94 = freezing fog.",
    );
    output.push_narrative(
        "### Questions Addressed Through Our Analysis\n\
         - **Correlation Analysis** - How do different features correlate with bike-sharing \
         patterns?\n\
         - **Bike Sharing Trends** - How do bike-sharing habits change yearly, monthly, daily \
         and hourly?\n\
         - **Day Type Influence** - Does the day type (holidays, weekends, working days) impact \
         bike-sharing trends?\n\
         - **Seasonal Impact** - How do the four seasons affect bike-sharing habits?\n\
         - **Weather's Role** - What role does weather severity play in influencing bike-sharing \
         decisions?\n\
         - **Commute vs. Leisure** - How does bike usage vary during typical commute hours \
         versus non-commute hours?\n\
         - **Statistical Validity** - What can statistical tests reveal about the significance \
         of our observations?",
    );
    output
}

pub(crate) fn conclusion() -> ReportOutput {
    let mut output = ReportOutput::new(Report::Conclusion);
    output.push_narrative(
        "# Business Insight for Developing the Bike Sharing System\n\n\
         The bike-sharing system in London has revealed discernible patterns influenced by \
         time, seasonality, environmental factors and specific calendar events:\n\n\
         1. **Daily Commuting and Usage Patterns:** Bike shares peak during commute hours \
         (7-9 AM and 5-7 PM) on working days, indicating a strong reliance on bikes for daily \
         commuting. Central areas of employment and residential zones are key focus areas for \
         station placements.\n\
         2. **Seasonal Variations:** Summer and spring see higher bike shares than autumn and \
         winter, so availability and promotions matter most in warmer months; incentives or \
         weather-protected bikes could boost usage in colder ones.\n\
         3. **Weather's Role:** Clear conditions lead to higher usage; severe conditions, \
         especially snowfall and freezing fog, see a decline.\n\
         4. **Holidays and Weekends:** Usage is lower than on working days; promotions, guided \
         tours or family packages could lift it.\n\
         5. **Comfort Index:** Derived from temperature, humidity and wind speed, the comfort \
         index tracks demand closely and can support forecasting, inventory planning and \
         promotional timing.\n\
         6. **Statistical Backing:** ANOVA, t-tests and Pearson's correlation validate the \
         observed patterns.",
    );
    output.push_narrative(
        "**Recommendations:**\n\
         - **Infrastructure & Availability:** Ensure bikes are available during peak commute \
         hours, especially in central business districts and major residential areas.\n\
         - **Seasonal Adjustments:** Increase availability during summer and spring; consider \
         incentives in colder months.\n\
         - **Weather Adaptations:** Consider weather-protected bikes and dynamic pricing based \
         on conditions.\n\
         - **Promotions:** Launch special offers during weekends and holidays.\n\
         - **User Experience:** Maintain bikes regularly and act on user feedback.",
    );
    output
}
