//! Scenario evaluation and batch comparison
//!
//! Each scenario line is evaluated independently; a line that fails to parse or
//! describes an impossible configuration is logged and dropped from the batch.

use crate::config::CompareConfig;
use crate::deposits::{expand_flat, expand_nested, parse_deposits, DepositSpec};
use crate::error::{CalcError, CalcResult};
use crate::line::{parse_line, parse_time, Flag, ScenarioLine};
use crate::period::Period;
use crate::projection::{compound, compute_stats};
use crate::rate::{compute_effective_rate, parse_rate};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Utility over net investment (0.1 = 10%)
    pub percent_returned: f64,
    pub utility: f64,
    pub net_investment: f64,

    /// Balance at the end of every effective period, index 0 is the initial balance
    pub trajectory: Vec<f64>,

    /// Principal contributed; sums to `net_investment`
    pub effective_schedule: Vec<f64>,

    pub effective_period: Period,
    pub effective_rate: f64,
    pub name: String,
}

impl ScenarioResult {
    pub fn final_balance(&self) -> f64 {
        self.trajectory.last().copied().unwrap_or(0.0)
    }
}

/// Evaluate a whitespace-tokenized scenario line
pub fn evaluate_scenario<S: AsRef<str>>(
    tokens: &[S],
    config: &CompareConfig,
) -> CalcResult<ScenarioResult> {
    let line = parse_line(tokens)?;
    evaluate_line(&line, config)
}

/// Evaluate a scenario whose expressions have already been grouped by flag
pub fn evaluate_line(line: &ScenarioLine, config: &CompareConfig) -> CalcResult<ScenarioResult> {
    let rate_spec = parse_rate(line.require(Flag::Rate)?)?;
    let deposit_spec = parse_deposits(line.require(Flag::Deposits)?, config)?;
    let horizon = parse_time(line.require(Flag::Time)?)?;

    let effective = compute_effective_rate(&rate_spec);

    // Leftover days shorter than one effective period are dropped
    let periods = horizon.total_days() / effective.period.days() as u64;
    if periods == 0 {
        return Err(CalcError::InvalidConfig(format!(
            "horizon of {} {} is shorter than one {} period",
            horizon.units, horizon.period, effective.period
        )));
    }
    if periods > config.max_periods as u64 {
        return Err(CalcError::InvalidConfig(format!(
            "horizon of {} {} spans {} {} periods, more than the limit of {}",
            horizon.units, horizon.period, periods, effective.period, config.max_periods
        )));
    }
    let period_count = periods as usize;

    debug!(
        "Effective rate {:.8} per {} over {} periods",
        effective.rate, effective.period, period_count
    );

    let (schedule, net_deposits) = match &deposit_spec {
        DepositSpec::Flat(flat) => {
            let schedule = expand_flat(&flat.values, flat.fill_with_last, period_count);
            (schedule.clone(), schedule)
        }
        DepositSpec::Nested(nested) => {
            let expanded =
                expand_nested(nested, effective.period, period_count, config.max_periods)?;
            (expanded.schedule, expanded.net_deposits)
        }
    };

    let trajectory = compound(&schedule, effective.rate);
    let stats = compute_stats(&trajectory, &net_deposits)?;

    // `{:?}` keeps the decimal point on whole rates: `Y-1.0%`
    let name = match &line.name {
        Some(name) => name.clone(),
        None => format!("{}-{:?}%", effective.period.short_code(), rate_spec.nominal_rate),
    };

    Ok(ScenarioResult {
        percent_returned: stats.percent_returned,
        utility: stats.utility,
        net_investment: stats.net_investment,
        trajectory,
        effective_schedule: net_deposits,
        effective_period: effective.period,
        effective_rate: effective.rate,
        name,
    })
}

/// Field used to rank results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PercentReturned,
    Utility,
    FinalBalance,
    NetInvestment,
}

impl SortKey {
    fn value(&self, result: &ScenarioResult) -> f64 {
        match self {
            SortKey::PercentReturned => result.percent_returned,
            SortKey::Utility => result.utility,
            SortKey::FinalBalance => result.final_balance(),
            SortKey::NetInvestment => result.net_investment,
        }
    }
}

impl FromStr for SortKey {
    type Err = CalcError;

    /// `R` percent returned, `U` utility, `T` total (final balance), `N` net investment
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(SortKey::PercentReturned),
            "U" => Ok(SortKey::Utility),
            "T" => Ok(SortKey::FinalBalance),
            "N" => Ok(SortKey::NetInvestment),
            other => Err(CalcError::parse(format!(
                "invalid argument for sorting {:?}, expected one of R, U, T, N",
                other
            ))),
        }
    }
}

/// Sort results by `key`, largest first
pub fn sort_results(results: &mut [ScenarioResult], key: SortKey) {
    results.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
}

/// Evaluates batches of scenario lines with a shared configuration
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: CompareConfig,
}

impl ScenarioRunner {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Evaluate a single raw line
    pub fn run_line(&self, line: &str) -> CalcResult<ScenarioResult> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        evaluate_scenario(&tokens, &self.config)
    }

    /// Evaluate every non-blank line, keeping input order and dropping failed lines
    pub fn run_batch<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<ScenarioResult> {
        let results: Vec<ScenarioResult> = lines
            .par_iter()
            .map(|line| line.as_ref())
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match self.run_line(line) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Skipping scenario {:?}: {}", line.trim(), e);
                    None
                }
            })
            .collect();

        info!("Evaluated {} of {} scenario lines", results.len(), lines.len());
        results
    }
}
