//! Rendering of compared scenarios: console table, delimited file and chart series

use crate::error::CalcResult;
use crate::period::Period;
use crate::scenario::ScenarioResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column headers, in output order
pub const COLUMNS: [&str; 6] = [
    "ID",
    "Name",
    "% Returned",
    "Utility",
    "Total",
    "Net Investment",
];

/// One output row: index, name, percent returned * 100, utility, final balance, net investment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow<'a> {
    pub id: usize,
    pub name: &'a str,
    pub percent_returned: f64,
    pub utility: f64,
    pub total: f64,
    pub net_investment: f64,
}

impl<'a> ResultRow<'a> {
    pub fn new(id: usize, result: &'a ScenarioResult) -> Self {
        Self {
            id,
            name: &result.name,
            percent_returned: result.percent_returned * 100.0,
            utility: result.utility,
            total: result.final_balance(),
            net_investment: result.net_investment,
        }
    }
}

/// Render results as a fixed-width console table
pub fn render_table(results: &[ScenarioResult]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(0)
        .max(COLUMNS[1].len());

    let mut table = format!(
        "{:>4}  {:<nw$}  {:>12}  {:>16}  {:>16}  {:>16}\n",
        COLUMNS[0],
        COLUMNS[1],
        COLUMNS[2],
        COLUMNS[3],
        COLUMNS[4],
        COLUMNS[5],
        nw = name_width
    );
    table.push_str(&"-".repeat(4 + name_width + 12 + 16 * 3 + 10));
    table.push('\n');

    for (i, result) in results.iter().enumerate() {
        let row = ResultRow::new(i, result);
        table.push_str(&format!(
            "{:>4}  {:<nw$}  {:>12.4}  {:>16.2}  {:>16.2}  {:>16.2}\n",
            row.id,
            row.name,
            row.percent_returned,
            row.utility,
            row.total,
            row.net_investment,
            nw = name_width
        ));
    }

    table
}

/// Write one `|`-delimited row per result, without a header
pub fn write_delimited<W: Write>(writer: W, results: &[ScenarioResult]) -> CalcResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .from_writer(writer);

    for (i, result) in results.iter().enumerate() {
        csv_writer.serialize(ResultRow::new(i, result))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write delimited results to `path`, replacing any existing file
pub fn write_delimited_file<P: AsRef<Path>>(path: P, results: &[ScenarioResult]) -> CalcResult<()> {
    let file = File::create(path)?;
    write_delimited(file, results)
}

/// Trajectory of one result, ready to plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,

    /// `(time in base periods, balance)` pairs
    pub points: Vec<(f64, f64)>,
}

/// Build chart series with the x axis expressed in `base` periods
pub fn chart_series(results: &[ScenarioResult], base: Period) -> Vec<ChartSeries> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let scale = result.effective_period.days() as f64 / base.days() as f64;
            ChartSeries {
                label: format!("Results: {}", i),
                points: result
                    .trajectory
                    .iter()
                    .enumerate()
                    .map(|(step, &balance)| (step as f64 * scale, balance))
                    .collect(),
            }
        })
        .collect()
}
