//! Rate expressions and their normalization to an effective per-period rate
//!
//! A rate expression is `rate:basis[:compounding]`, e.g. `0.02:Y:T` is a 2% annual
//! rate compounded every trimester.

use crate::error::{CalcError, CalcResult};
use crate::period::{resolve_period, Period};
use serde::{Deserialize, Serialize};

/// Parsed rate expression
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSpec {
    /// Nominal rate over the basis period (0.02 = 2%)
    pub nominal_rate: f64,

    /// Period the nominal rate is stated over
    pub basis: Period,

    /// Period interest is actually credited over, if different from the basis
    pub compounding: Option<Period>,
}

/// Rate applied once per effective period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveRate {
    pub rate: f64,
    pub period: Period,
}

/// Parse `rate:basis[:compounding]`
pub fn parse_rate(expr: &str) -> CalcResult<RateSpec> {
    let tokens: Vec<&str> = expr.split(':').collect();
    if tokens.len() > 3 {
        return Err(CalcError::parse(format!(
            "rate must be rate:Period or rate:Period:Period, got {:?}",
            expr
        )));
    }

    let nominal_rate: f64 = tokens[0]
        .parse()
        .map_err(|_| CalcError::parse(format!("rate must be a real number, got {:?}", tokens[0])))?;

    let basis = match tokens.get(1) {
        Some(token) => resolve_period(token)?,
        None => {
            return Err(CalcError::parse(format!(
                "rate {:?} is missing the period it is stated over",
                expr
            )))
        }
    };
    let compounding = tokens.get(2).map(|token| resolve_period(token)).transpose()?;

    Ok(RateSpec {
        nominal_rate,
        basis,
        compounding,
    })
}

/// Normalize a rate to the period it is credited over.
///
/// Scaling to a longer period compounds: `(1 + r)^(c/b) - 1`.
/// Scaling to an equal or shorter period prorates linearly: `r * c / b`.
/// The asymmetry is intentional; a shorter compounding period is treated as a
/// simple fraction of the stated rate.
pub fn compute_effective_rate(spec: &RateSpec) -> EffectiveRate {
    let Some(compounding) = spec.compounding else {
        return EffectiveRate {
            rate: spec.nominal_rate,
            period: spec.basis,
        };
    };

    let ratio = compounding.days() as f64 / spec.basis.days() as f64;
    let rate = if compounding.days() > spec.basis.days() {
        (1.0 + spec.nominal_rate).powf(ratio) - 1.0
    } else {
        spec.nominal_rate * ratio
    };

    EffectiveRate {
        rate,
        period: compounding,
    }
}
