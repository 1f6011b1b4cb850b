use crate::stats::TestOutcome;
use crate::types::chart::ChartSpec;
use crate::types::report::Report;
use polars::prelude::DataFrame;
use serde::Serialize;

/// The complete output of one report: an ordered sequence of blocks the
/// rendering collaborator walks top to bottom.
#[derive(Debug, Clone)]
pub struct ReportOutput {
    pub report: Report,
    pub title: String,
    pub blocks: Vec<ReportBlock>,
}

impl ReportOutput {
    pub fn new(report: Report) -> Self {
        Self {
            report,
            title: report.title().to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn push_narrative(&mut self, text: impl Into<String>) {
        self.blocks.push(ReportBlock::Narrative(text.into()));
    }

    pub fn push_table(&mut self, title: impl Into<String>, table: DataFrame) {
        self.blocks.push(ReportBlock::Table {
            title: title.into(),
            table,
        });
    }

    pub fn push_chart(&mut self, spec: ChartSpec, data: DataFrame) {
        self.blocks.push(ReportBlock::Chart { spec, data });
    }

    pub fn push_hypothesis(&mut self, hypothesis: HypothesisReport) {
        self.blocks.push(ReportBlock::Hypothesis(hypothesis));
    }

    /// The hypothesis-test blocks, in report order.
    pub fn hypotheses(&self) -> Vec<&HypothesisReport> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                ReportBlock::Hypothesis(hypothesis) => Some(hypothesis),
                _ => None,
            })
            .collect()
    }
}

/// One renderable unit of a report.
#[derive(Debug, Clone)]
pub enum ReportBlock {
    /// Markdown-ish narrative text.
    Narrative(String),
    /// A prepared summary table, columns already in presentation order.
    Table { title: String, table: DataFrame },
    /// A chart specification plus the table backing it. Row-level
    /// distributional charts (box plots, scatters) carry unaggregated rows.
    Chart { spec: ChartSpec, data: DataFrame },
    /// One hypothesis-test result.
    Hypothesis(HypothesisReport),
}

/// A formatted hypothesis-test result, preserving the study's report format:
/// the p-value as a percentage to two decimals, and the verdict wording.
#[derive(Debug, Clone, Serialize)]
pub struct HypothesisReport {
    pub name: String,
    pub null_hypothesis: String,
    pub alternative_hypothesis: String,
    pub statistic: f64,
    pub p_value: f64,
    pub p_value_percent: String,
    pub conclusion: String,
}

impl HypothesisReport {
    pub fn new(
        name: &str,
        null_hypothesis: &str,
        alternative_hypothesis: &str,
        outcome: TestOutcome,
    ) -> Self {
        Self {
            name: name.to_string(),
            null_hypothesis: null_hypothesis.to_string(),
            alternative_hypothesis: alternative_hypothesis.to_string(),
            statistic: outcome.statistic,
            p_value: outcome.p_value,
            p_value_percent: outcome.p_value_percent(),
            conclusion: outcome.significance().to_string(),
        }
    }
}
