//! Interest Compare CLI
//!
//! Compares compound interest scenarios given on the command line, on stdin or in
//! input files, one scenario per line.

use anyhow::{Context, Result};
use clap::Parser;
use interest_compare::input::{read_lines_from_path, read_lines_until_stop, STOP_LINE};
use interest_compare::line::{Flag, ScenarioLine};
use interest_compare::output::{chart_series, render_table, write_delimited_file};
use interest_compare::scenario::sort_results;
use interest_compare::{
    evaluate_line, CompareConfig, Period, ScenarioResult, ScenarioRunner, SortKey,
};
use log::{info, warn};
use std::io;
use std::path::PathBuf;

/// Analyze and compare compound interest scenarios.
///
/// Example: interest_compare --rate 0.02:Y --deposits 10000:fill --time 2:Y
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Interest rate as rate:Period or rate:Period:Period.
    ///
    /// `0.02:Y:T` is 2% annually credited every trimester (0.02 * 90 / 365 per
    /// trimester). When the second period is longer than the first the rate
    /// compounds: (1 + rate)^(second / first) - 1.
    /// Periods: D, M, B, T, Q, S, Y, Z, their long names or their length in days.
    #[arg(short, long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Deposits as deposit1:deposit2:...[:fill] or balance%rate%deposits.
    ///
    /// `12000:1000:fill` starts with 12k followed by 1k every period; `fill` repeats
    /// the last deposit, otherwise missing deposits are zero.
    /// `12000%0.02:Y:T%1000:fill` starts with 12k and adds, every period of the main
    /// account, whatever a 2% trimester sub-account fed with 1k per trimester holds.
    #[arg(short, long, allow_hyphen_values = true)]
    deposits: Option<String>,

    /// Time scope of the analysis as count:Period, e.g. `14:Y`
    #[arg(short, long)]
    time: Option<String>,

    /// Name of the analysis (default: Period-rate%)
    #[arg(short, long)]
    name: Option<String>,

    /// Read scenarios from files, one per line. Without files, scenarios are read
    /// from stdin until a line containing only `s`.
    #[arg(short, long, num_args = 0.., value_name = "FILE")]
    input: Option<Vec<PathBuf>>,

    /// Sort results descending: R (% returned), U (utility), T (total), N (net investment)
    #[arg(short, long, value_name = "KEY")]
    sort: Option<SortKey>,

    /// Write `|`-delimited results to a file instead of the console
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print trajectories as JSON chart series with the x axis in the given period
    #[arg(short, long, value_name = "PERIOD")]
    graph: Option<Period>,
}

impl Cli {
    fn scenario_line(&self) -> ScenarioLine {
        ScenarioLine {
            rate: self.rate.clone(),
            deposits: self.deposits.clone(),
            time: self.time.clone(),
            name: self.name.clone(),
        }
    }

    fn input_files(&self) -> &[PathBuf] {
        self.input.as_deref().unwrap_or_default()
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::new(CompareConfig::from_env());

    let mut results = if cli.input_files().is_empty() {
        run_interactive(&cli, &runner)?
    } else {
        run_files(cli.input_files(), &runner)?
    };

    if let Some(key) = cli.sort {
        sort_results(&mut results, key);
    }

    match &cli.output {
        Some(path) => {
            write_delimited_file(path, &results)
                .with_context(|| format!("Could not write file: {}", path.display()))?;
            info!("Wrote {} results to {}", results.len(), path.display());
        }
        None if !results.is_empty() => print!("{}", render_table(&results)),
        None => {}
    }

    if let Some(base) = cli.graph {
        if !results.is_empty() {
            let series = chart_series(&results, base);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
    }

    Ok(())
}

/// Scenarios typed on stdin, followed by the one given on the command line
fn run_interactive(cli: &Cli, runner: &ScenarioRunner) -> Result<Vec<ScenarioResult>> {
    let line = cli.scenario_line();
    for flag in [Flag::Rate, Flag::Deposits, Flag::Time] {
        line.require(flag)?;
    }

    eprintln!("Enter '{}' to stop adding analysis", STOP_LINE);
    let typed = read_lines_until_stop(io::stdin().lock())?;
    let mut results = runner.run_batch(&typed);

    match evaluate_line(&line, runner.config()) {
        Ok(result) => results.push(result),
        Err(e) => warn!("Skipping command line scenario: {}", e),
    }

    Ok(results)
}

fn run_files(files: &[PathBuf], runner: &ScenarioRunner) -> Result<Vec<ScenarioResult>> {
    let mut lines = Vec::new();
    for path in files {
        let read = read_lines_from_path(path)
            .with_context(|| format!("{} is not a readable file", path.display()))?;
        lines.extend(read);
    }

    Ok(runner.run_batch(&lines))
}
