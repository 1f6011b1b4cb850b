//! Hypothesis tests over materialized columns.
//!
//! The three tests here mirror the ones the study runs: Pearson's correlation
//! with a two-sided t-based p-value, the pooled (equal-variance) two-sample
//! t-test, and one-way ANOVA. p-values come from the Student-t and
//! Fisher–Snedecor CDFs of the statistics library; nothing numerical is
//! hand-rolled beyond sums of squares.

pub mod error;

pub use error::StatsError;

use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};
use std::fmt;

/// The fixed significance level of the study. Reject the null hypothesis iff
/// `p <= 0.05`.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// The decision at the fixed significance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    Reject,
    FailToReject,
}

impl Significance {
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value <= SIGNIFICANCE_LEVEL {
            Significance::Reject
        } else {
            Significance::FailToReject
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::Reject => f.write_str("Reject NULL HYPOTHESIS"),
            Significance::FailToReject => f.write_str("Fail to Reject NULL HYPOTHESIS"),
        }
    }
}

/// A test statistic with its two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

impl TestOutcome {
    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value)
    }

    /// The p-value as a percentage to two decimals, the study's report format.
    pub fn p_value_percent(&self) -> String {
        format!("{:.2}%", self.p_value * 100.0)
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sum_of_squared_deviations(values: &[f64], center: f64) -> f64 {
    values.iter().map(|v| (v - center) * (v - center)).sum()
}

fn two_sided_t_p_value(t: f64, freedom: f64) -> Result<f64, StatsError> {
    let distribution = StudentsT::new(0.0, 1.0, freedom)
        .map_err(|e| StatsError::Degenerate(e.to_string()))?;
    Ok(2.0 * (1.0 - distribution.cdf(t.abs())))
}

/// Pearson's correlation coefficient with a two-sided p-value.
///
/// Inputs must be equal-length complete cases; see [`pearson_pairwise`] for
/// the null-tolerant variant used by the correlation matrix.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<TestOutcome, StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    let n = x.len();
    if n < 3 {
        return Err(StatsError::InsufficientData { needed: 3, got: n });
    }

    let r = pearson_r(x, y).ok_or_else(|| {
        StatsError::Degenerate("correlation undefined for a zero-variance sample".to_string())
    })?;

    let one_minus_r_squared = 1.0 - r * r;
    let freedom = (n - 2) as f64;
    if one_minus_r_squared <= f64::EPSILON {
        // Perfectly collinear sample.
        return Ok(TestOutcome {
            statistic: r,
            p_value: 0.0,
        });
    }
    let t = r * (freedom / one_minus_r_squared).sqrt();
    Ok(TestOutcome {
        statistic: r,
        p_value: two_sided_t_p_value(t, freedom)?,
    })
}

/// Pearson's `r` over pairwise-complete observations, or `None` when fewer
/// than two complete pairs exist or either side has zero variance.
pub fn pearson_pairwise(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .unzip();
    if pairs.0.len() < 2 {
        return None;
    }
    pearson_r(&pairs.0, &pairs.1)
}

fn pearson_r(x: &[f64], y: &[f64]) -> Option<f64> {
    let mean_x = mean(x);
    let mean_y = mean(y);
    let covariance: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    let denominator =
        (sum_of_squared_deviations(x, mean_x) * sum_of_squared_deviations(y, mean_y)).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some((covariance / denominator).clamp(-1.0, 1.0))
}

/// Pooled (equal-variance) independent two-sample t-test, two-sided.
pub fn t_test_ind(a: &[f64], b: &[f64]) -> Result<TestOutcome, StatsError> {
    let (n_a, n_b) = (a.len(), b.len());
    if n_a < 2 || n_b < 2 {
        return Err(StatsError::InsufficientData {
            needed: 2,
            got: n_a.min(n_b),
        });
    }
    let freedom = (n_a + n_b - 2) as f64;
    let (mean_a, mean_b) = (mean(a), mean(b));
    let pooled_variance = (sum_of_squared_deviations(a, mean_a)
        + sum_of_squared_deviations(b, mean_b))
        / freedom;
    let standard_error = (pooled_variance * (1.0 / n_a as f64 + 1.0 / n_b as f64)).sqrt();

    if standard_error == 0.0 {
        // Both samples are constant. Identical means cannot be told apart;
        // different means are trivially distinguishable.
        let identical = mean_a == mean_b;
        return Ok(TestOutcome {
            statistic: if identical { 0.0 } else { f64::INFINITY },
            p_value: if identical { 1.0 } else { 0.0 },
        });
    }

    let t = (mean_a - mean_b) / standard_error;
    Ok(TestOutcome {
        statistic: t,
        p_value: two_sided_t_p_value(t, freedom)?,
    })
}

/// One-way ANOVA over labelled groups.
///
/// An empty group is a defined error ([`StatsError::EmptyGroup`]) rather than
/// being silently excluded: dropping the group would change the degrees of
/// freedom without telling the reader.
pub fn one_way_anova(groups: &[(&str, Vec<f64>)]) -> Result<TestOutcome, StatsError> {
    if groups.len() < 2 {
        return Err(StatsError::InsufficientData {
            needed: 2,
            got: groups.len(),
        });
    }
    for (label, values) in groups {
        if values.is_empty() {
            return Err(StatsError::EmptyGroup {
                group: label.to_string(),
            });
        }
    }

    let total: usize = groups.iter().map(|(_, values)| values.len()).sum();
    let group_count = groups.len();
    if total <= group_count {
        return Err(StatsError::InsufficientData {
            needed: group_count + 1,
            got: total,
        });
    }

    let grand_total: f64 = groups
        .iter()
        .map(|(_, values)| values.iter().sum::<f64>())
        .sum();
    let grand_mean = grand_total / total as f64;

    let mut between = 0.0;
    let mut within = 0.0;
    for (_, values) in groups {
        let group_mean = mean(values);
        between += values.len() as f64 * (group_mean - grand_mean) * (group_mean - grand_mean);
        within += sum_of_squared_deviations(values, group_mean);
    }

    let freedom_between = (group_count - 1) as f64;
    let freedom_within = (total - group_count) as f64;

    if within == 0.0 {
        let no_spread = between == 0.0;
        return Ok(TestOutcome {
            statistic: if no_spread { 0.0 } else { f64::INFINITY },
            p_value: if no_spread { 1.0 } else { 0.0 },
        });
    }

    let f = (between / freedom_between) / (within / freedom_within);
    let distribution = FisherSnedecor::new(freedom_between, freedom_within)
        .map_err(|e| StatsError::Degenerate(e.to_string()))?;
    Ok(TestOutcome {
        statistic: f,
        p_value: 1.0 - distribution.cdf(f),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pearson_detects_a_perfect_linear_relationship() -> Result<(), StatsError> {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        let outcome = pearson(&x, &y)?;
        assert!((outcome.statistic - 1.0).abs() < 1e-12);
        assert_eq!(outcome.p_value, 0.0);
        assert_eq!(outcome.significance(), Significance::Reject);
        Ok(())
    }

    #[test]
    fn pearson_pairwise_skips_incomplete_pairs() {
        let x = [Some(1.0), None, Some(3.0), Some(4.0)];
        let y = [Some(2.0), Some(9.0), Some(6.0), None];
        // Complete pairs: (1,2) and (3,6) — perfectly correlated.
        let r = pearson_pairwise(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        // A constant side has no defined correlation.
        assert_eq!(
            pearson_pairwise(&[Some(1.0), Some(1.0)], &[Some(2.0), Some(3.0)]),
            None
        );
    }

    #[test]
    fn t_test_on_identical_samples_fails_to_reject() -> Result<(), StatsError> {
        let a = [10.0, 12.0, 14.0];
        let outcome = t_test_ind(&a, &a)?;
        assert!(outcome.statistic.abs() < 1e-12);
        assert!((outcome.p_value - 1.0).abs() < 1e-9);
        assert_eq!(outcome.significance(), Significance::FailToReject);
        Ok(())
    }

    #[test]
    fn t_test_separates_distant_samples() -> Result<(), StatsError> {
        let a = [1.0, 1.1, 0.9, 1.05, 0.95];
        let b = [10.0, 10.1, 9.9, 10.05, 9.95];
        let outcome = t_test_ind(&a, &b)?;
        assert!(outcome.p_value < 1e-6);
        assert_eq!(outcome.significance(), Significance::Reject);
        Ok(())
    }

    #[test]
    fn anova_with_equal_group_means_fails_to_reject() -> Result<(), StatsError> {
        let groups = [
            ("a", vec![1.0, 2.0, 3.0]),
            ("b", vec![1.0, 2.0, 3.0]),
            ("c", vec![1.0, 2.0, 3.0]),
        ];
        let outcome = one_way_anova(&groups)?;
        assert!(outcome.statistic.abs() < 1e-12);
        assert_eq!(outcome.significance(), Significance::FailToReject);
        Ok(())
    }

    #[test]
    fn anova_separates_distant_groups() -> Result<(), StatsError> {
        let groups = [
            ("low", vec![1.0, 1.2, 0.8, 1.1]),
            ("mid", vec![5.0, 5.2, 4.8, 5.1]),
            ("high", vec![9.0, 9.2, 8.8, 9.1]),
        ];
        let outcome = one_way_anova(&groups)?;
        assert!(outcome.p_value < 1e-6);
        assert_eq!(outcome.significance(), Significance::Reject);
        Ok(())
    }

    #[test]
    fn anova_reports_the_empty_group_by_name() {
        let groups = [
            ("spring", vec![1.0, 2.0]),
            ("summer", Vec::new()),
            ("winter", vec![3.0, 4.0]),
        ];
        match one_way_anova(&groups) {
            Err(StatsError::EmptyGroup { group }) => assert_eq!(group, "summer"),
            other => panic!("expected EmptyGroup, got {other:?}"),
        }
    }

    #[test]
    fn significance_threshold_is_inclusive() {
        assert_eq!(Significance::from_p_value(0.05), Significance::Reject);
        assert_eq!(
            Significance::from_p_value(0.050001),
            Significance::FailToReject
        );
        assert_eq!(
            Significance::Reject.to_string(),
            "Reject NULL HYPOTHESIS"
        );
    }

    #[test]
    fn p_values_format_as_percentages_to_two_decimals() {
        let outcome = TestOutcome {
            statistic: 1.0,
            p_value: 0.034567,
        };
        assert_eq!(outcome.p_value_percent(), "3.46%");
        let tiny = TestOutcome {
            statistic: 1.0,
            p_value: 0.00001,
        };
        assert_eq!(tiny.p_value_percent(), "0.00%");
    }
}
