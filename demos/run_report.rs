//! Loads the dataset and prints a single report chosen by its menu number.
//!
//! Usage: `cargo run --example run_report -- london_merged.csv 7`

use bikeshare_insights::{BikeShare, Report, ReportBlock};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    configure_polars_display();
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "london_merged.csv".to_string());
    let number: usize = args.next().as_deref().unwrap_or("1").parse()?;

    let report = *Report::ALL
        .iter()
        .find(|report| report.number() == number)
        .ok_or("report number must be between 1 and 9")?;

    let study = BikeShare::load().path(path).call()?;
    let output = study.report(report)?;

    println!("=== {} ===", output.title);
    for block in &output.blocks {
        match block {
            ReportBlock::Narrative(text) => println!("\n{text}"),
            ReportBlock::Table { title, table } => println!("\n{title}\n{table}"),
            ReportBlock::Chart { spec, data } => {
                println!("\n[{:?} chart] {}\n{data}", spec.kind, spec.title)
            }
            ReportBlock::Hypothesis(hypothesis) => {
                println!("\n{}", hypothesis.name);
                println!("  H0: {}", hypothesis.null_hypothesis);
                println!("  H1: {}", hypothesis.alternative_hypothesis);
                println!(
                    "  statistic = {:.4}, p = {}",
                    hypothesis.statistic, hypothesis.p_value_percent
                );
                println!("  {}", hypothesis.conclusion);
            }
        }
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
