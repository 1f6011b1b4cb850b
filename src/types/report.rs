use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine reports of the study, in menu order.
///
/// Report selection dispatches exhaustively on this enum; there is no string
/// comparison anywhere, so a new report cannot be added without the compiler
/// pointing at every match that must handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Report {
    Introduction,
    Correlation,
    Trends,
    DayType,
    Commute,
    SeasonalWeather,
    Statistics,
    AbComparisons,
    Conclusion,
}

impl Report {
    /// All reports in menu order.
    pub const ALL: [Report; 9] = [
        Report::Introduction,
        Report::Correlation,
        Report::Trends,
        Report::DayType,
        Report::Commute,
        Report::SeasonalWeather,
        Report::Statistics,
        Report::AbComparisons,
        Report::Conclusion,
    ];

    /// The 1-based menu number.
    pub fn number(&self) -> usize {
        match self {
            Report::Introduction => 1,
            Report::Correlation => 2,
            Report::Trends => 3,
            Report::DayType => 4,
            Report::Commute => 5,
            Report::SeasonalWeather => 6,
            Report::Statistics => 7,
            Report::AbComparisons => 8,
            Report::Conclusion => 9,
        }
    }

    /// The label shown in the selection menu, verbatim from the study.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Report::Introduction => "1. Introduction",
            Report::Correlation => "2. Correlation Analysis",
            Report::Trends => "3. Bike Sharing Trends: Yearly, Monthly, Daily, and Hourly",
            Report::DayType => "4. Bike Shares Based on Day Type",
            Report::Commute => "5. Commute hours and Bike Sharing Distribution",
            Report::SeasonalWeather => "6. Seasonal and Weather Severity Analysis",
            Report::Statistics => {
                "7. Statistical Analysis: ANOVA test, T-test and Pearson's Correlation"
            }
            Report::AbComparisons => "8. A/B Testing Visualizations",
            Report::Conclusion => "9. Conclusion",
        }
    }

    /// A short title for the report output.
    pub fn title(&self) -> &'static str {
        match self {
            Report::Introduction => "Introduction",
            Report::Correlation => "Correlation Analysis",
            Report::Trends => "Bike Sharing Trends",
            Report::DayType => "Bike Shares Based on Day Type",
            Report::Commute => "Commute Hours and Bike Sharing Distribution",
            Report::SeasonalWeather => "Seasonal and Weather Severity Analysis",
            Report::Statistics => "Statistical Analysis",
            Report::AbComparisons => "A/B Testing Visualizations",
            Report::Conclusion => "Conclusion",
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.menu_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_labels_are_numbered_in_order() {
        for (index, report) in Report::ALL.iter().enumerate() {
            let expected_prefix = format!("{}. ", index + 1);
            assert_eq!(report.number(), index + 1);
            assert!(
                report.menu_label().starts_with(&expected_prefix),
                "label '{}' does not start with '{}'",
                report.menu_label(),
                expected_prefix
            );
        }
    }
}
