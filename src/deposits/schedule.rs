//! Expansion of deposit descriptions into horizon-length schedules

use super::NestedDeposits;
use crate::error::{CalcError, CalcResult};
use crate::period::Period;
use crate::projection::compound;
use crate::rate::compute_effective_rate;
use log::debug;

/// Schedule produced by a nested deposit expression
#[derive(Debug, Clone, PartialEq)]
pub struct NestedSchedule {
    /// Amounts fed to the main account: initial balance, then one sweep per period
    pub schedule: Vec<f64>,

    /// Principal actually contributed, sub-account deposits taken at face value
    pub net_deposits: Vec<f64>,
}

/// Fit a list of deposits to `period_count` entries.
///
/// Extra deposits are dropped. Missing ones are zero, or the last value when
/// `fill_with_last` is set.
pub fn expand_flat(values: &[f64], fill_with_last: bool, period_count: usize) -> Vec<f64> {
    if values.len() >= period_count {
        return values[..period_count].to_vec();
    }

    let filler = match values.last() {
        Some(&last) if fill_with_last => last,
        _ => 0.0,
    };

    let mut schedule = values.to_vec();
    schedule.resize(period_count, filler);
    schedule
}

/// Build the main account schedule of a nested deposit expression.
///
/// The sub-account compounds at its own effective period for as many whole periods
/// as fit in one `outer_period`, then its final balance is swept into the main
/// account. The sub-account starts empty after each sweep.
///
/// Fails with `InvalidConfig` when the contributed deposits would exceed
/// `max_entries` entries.
pub fn expand_nested(
    nested: &NestedDeposits,
    outer_period: Period,
    period_count: usize,
    max_entries: usize,
) -> CalcResult<NestedSchedule> {
    let sub = compute_effective_rate(&nested.sub_rate);
    let sub_periods_per_outer = (outer_period.days() / sub.period.days()) as usize;
    if sub_periods_per_outer == 0 {
        return Err(CalcError::InvalidConfig(format!(
            "no interest will be generated for the deposits since {} > {}",
            sub.period, outer_period
        )));
    }

    let sweeps = period_count.saturating_sub(1);
    let net_entries = sweeps
        .checked_mul(sub_periods_per_outer)
        .and_then(|n| n.checked_add(1))
        .filter(|&n| n <= max_entries)
        .ok_or_else(|| {
            CalcError::InvalidConfig(format!(
                "{} sweeps of {} {} periods exceed the limit of {} entries",
                sweeps, sub_periods_per_outer, sub.period, max_entries
            ))
        })?;

    let sub_schedule = expand_flat(
        &nested.sub_deposits.values,
        nested.sub_deposits.fill_with_last,
        sub_periods_per_outer,
    );
    let swept = compound(&sub_schedule, sub.rate).last().copied().unwrap_or(0.0);

    debug!(
        "Sub-account: {} periods of {} per sweep at {:.6}, sweeping {:.2}",
        sub_periods_per_outer, sub.period, sub.rate, swept
    );

    let mut schedule = Vec::with_capacity(sweeps + 1);
    schedule.push(nested.initial_balance);
    schedule.resize(sweeps + 1, swept);

    let mut net_deposits = Vec::with_capacity(net_entries);
    net_deposits.push(nested.initial_balance);
    for _ in 0..sweeps {
        net_deposits.extend_from_slice(&sub_schedule);
    }

    Ok(NestedSchedule {
        schedule,
        net_deposits,
    })
}
