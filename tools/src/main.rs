//! churn-runner: headless churn analysis over a revenue table.
//!
//! Usage:
//!   churn-runner --input revenue.csv --churn-period 3
//!   churn-runner --input revenue.csv --config analysis.json --json

use anyhow::{bail, Context, Result};
use churn_core::{AnalysisConfig, ChurnAnalysis, ChurnReport};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let json_mode = has_flag(&args, "--json");
    let input = parse_str(&args, "--input").context("missing required --input <file>")?;

    let mut config = match parse_str(&args, "--config") {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(churn_period) = parse_opt::<u32>(&args, "--churn-period")? {
        config.churn_period = churn_period;
    }
    if has_flag(&args, "--headers") {
        config.has_headers = true;
    }

    if !json_mode {
        println!("churn-runner");
        println!("  input:         {input}");
        println!("  churn period:  {}", config.churn_period);
        println!("  headers:       {}", config.has_headers);
        println!();
    }

    let analysis = ChurnAnalysis::from_path_with_config(input, &config)
        .with_context(|| format!("analysis of {input} failed"))?;
    let report = ChurnReport::from_analysis(&analysis);

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &ChurnReport) {
    println!("=== RUN SUMMARY ===");
    println!("  customers:          {}", report.customers.len());
    println!("  started:            {}", report.started_count());
    println!("  churned (absolute): {}", report.absolute_churned_count());
    println!("  churned (relative): {}", report.relative_churned_count());

    println!();
    println!("=== CUSTOMERS ===");
    if report.customers.is_empty() {
        println!("  (No customers in input)");
        return;
    }
    for c in &report.customers {
        println!(
            "  {:<24} | {:<13} | periods: {:>3} | absolute: {:>4} | relative: {:>4}",
            c.customer_id,
            c.status.label(),
            c.periods_observed,
            fmt_period(c.absolute_churn),
            fmt_period(c.relative_churn),
        );
    }
}

fn fmt_period(period: Option<usize>) -> String {
    period.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_str<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// `Ok(None)` when the flag is absent; an error when its value does not parse.
fn parse_opt<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>> {
    let Some(raw) = parse_str(args, flag) else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => bail!("invalid {flag} value: {raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn unparseable_churn_period_is_an_error() {
        let argv = args(&["churn-runner", "--input", "t.csv", "--churn-period", "abc"]);
        assert!(parse_opt::<u32>(&argv, "--churn-period").is_err());
    }

    #[test]
    fn absent_or_valid_churn_period_parses() {
        let argv = args(&["churn-runner", "--churn-period", "3"]);
        assert_eq!(parse_opt::<u32>(&argv, "--churn-period").unwrap(), Some(3));
        assert_eq!(parse_opt::<u32>(&argv, "--config").unwrap(), None::<u32>);
    }
}
