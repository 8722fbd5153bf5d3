//! Deposit expressions and their expansion into horizon-length schedules
//!
//! Two forms are supported:
//! - Flat: `12000:1000:fill`, an initial balance followed by periodic deposits
//! - Nested: `12000%0.02:Y:T%1000:fill`, an initial balance plus whatever a faster
//!   compounding sub-account accumulates between two periods of the main account

mod parse;
mod schedule;

pub use parse::{parse_deposits, parse_flat};
pub use schedule::{expand_flat, expand_nested, NestedSchedule};

use crate::rate::RateSpec;
use serde::{Deserialize, Serialize};

/// Plain list of deposits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatDeposits {
    pub values: Vec<f64>,

    /// Repeat the last value instead of padding with zeros
    pub fill_with_last: bool,
}

/// Main account fed by a sub-account that is swept every main period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedDeposits {
    /// Starting balance of the main account
    pub initial_balance: f64,

    /// Rate earned by the sub-account
    pub sub_rate: RateSpec,

    /// Deposits made into the sub-account between sweeps
    pub sub_deposits: FlatDeposits,
}

/// How a schedule is described before expansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DepositSpec {
    Flat(FlatDeposits),
    Nested(NestedDeposits),
}
