//! Summary metrics derived from a balance trajectory

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Summary metrics for a single scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Principal actually contributed, excluding interest
    pub net_investment: f64,

    /// Final balance minus net investment
    pub utility: f64,

    /// Utility as a fraction of net investment (0.1 = 10%)
    pub percent_returned: f64,
}

/// Compute net investment, utility and percent returned
pub fn compute_stats(trajectory: &[f64], net_deposits: &[f64]) -> CalcResult<Statistics> {
    let final_balance = trajectory
        .last()
        .copied()
        .ok_or_else(|| CalcError::InvalidConfig("trajectory is empty".to_string()))?;

    let net_investment: f64 = net_deposits.iter().sum();
    let utility = final_balance - net_investment;

    if net_investment == 0.0 {
        return Err(CalcError::Division(
            "percent returned is undefined for zero net investment".to_string(),
        ));
    }

    Ok(Statistics {
        net_investment,
        utility,
        percent_returned: utility / net_investment,
    })
}
