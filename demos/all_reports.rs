//! Walks the whole report menu over one dataset, printing a summary line per
//! block, and the full verdicts for the hypothesis tests.
//!
//! Usage: `cargo run --example all_reports -- london_merged.csv`

use bikeshare_insights::{BikeShare, Report, ReportBlock};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "london_merged.csv".to_string());
    let study = BikeShare::load().path(path).call()?;

    for report in Report::ALL {
        let output = study.report(report)?;
        println!("{}", report.menu_label());
        for block in &output.blocks {
            match block {
                ReportBlock::Narrative(text) => {
                    let first_line = text.lines().next().unwrap_or("");
                    println!("  narrative: {first_line}");
                }
                ReportBlock::Table { title, table } => {
                    println!("  table: {title} ({} rows)", table.height());
                }
                ReportBlock::Chart { spec, data } => {
                    println!(
                        "  chart: {:?} \"{}\" ({} rows)",
                        spec.kind,
                        spec.title,
                        data.height()
                    );
                }
                ReportBlock::Hypothesis(hypothesis) => {
                    println!(
                        "  test: {} -> p = {} -> {}",
                        hypothesis.name, hypothesis.p_value_percent, hypothesis.conclusion
                    );
                }
            }
        }
    }

    Ok(())
}
