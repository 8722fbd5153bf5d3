//! Interest Compare - compound interest scenario calculator
//!
//! This library provides:
//! - A mini-language for rates (`0.02:Y:T`), deposits (`12000:1000:fill`,
//!   `12000%0.02:Y:T%1000:fill`) and horizons (`14:Y`)
//! - Normalization of nominal rates to effective per-period rates
//! - Deposit schedule expansion, including sub-accounts swept into a main account
//! - Compound interest trajectories and summary statistics
//! - Batch comparison, sorting and rendering of scenarios

pub mod config;
pub mod deposits;
pub mod error;
pub mod input;
pub mod line;
pub mod output;
pub mod period;
pub mod projection;
pub mod rate;
pub mod scenario;

// Re-export commonly used types
pub use config::CompareConfig;
pub use deposits::{DepositSpec, FlatDeposits, NestedDeposits};
pub use error::{CalcError, CalcResult};
pub use period::{resolve_period, Period};
pub use rate::{compute_effective_rate, parse_rate, EffectiveRate, RateSpec};
pub use scenario::{evaluate_line, evaluate_scenario, ScenarioResult, ScenarioRunner, SortKey};
