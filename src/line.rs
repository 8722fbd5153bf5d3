//! Tokenized scenario lines
//!
//! A scenario line is a sequence of `flag value` pairs, e.g.
//! `-r 0.02:Y:T -d 30000:fill -t 14:Y -n savings`. Flags come from a closed table;
//! batch-level flags may appear on a line but only matter on the process command line.

use crate::error::{CalcError, CalcResult};
use crate::period::{resolve_period, Period};
use log::debug;
use serde::{Deserialize, Serialize};

/// Every flag understood by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Rate,
    Deposits,
    Time,
    Name,
    Input,
    Sort,
    Output,
    Graph,
    Help,
}

impl Flag {
    pub const ALL: [Flag; 9] = [
        Flag::Rate,
        Flag::Deposits,
        Flag::Time,
        Flag::Name,
        Flag::Input,
        Flag::Sort,
        Flag::Output,
        Flag::Graph,
        Flag::Help,
    ];

    pub fn short(&self) -> &'static str {
        match self {
            Flag::Rate => "-r",
            Flag::Deposits => "-d",
            Flag::Time => "-t",
            Flag::Name => "-n",
            Flag::Input => "-i",
            Flag::Sort => "-s",
            Flag::Output => "-o",
            Flag::Graph => "-g",
            Flag::Help => "-h",
        }
    }

    pub fn long(&self) -> &'static str {
        match self {
            Flag::Rate => "--rate",
            Flag::Deposits => "--deposits",
            Flag::Time => "--time",
            Flag::Name => "--name",
            Flag::Input => "--input",
            Flag::Sort => "--sort",
            Flag::Output => "--output",
            Flag::Graph => "--graph",
            Flag::Help => "--help",
        }
    }

    /// Look up a flag by its short or long spelling
    pub fn from_token(token: &str) -> Option<Flag> {
        Flag::ALL
            .iter()
            .copied()
            .find(|flag| flag.short() == token || flag.long() == token)
    }
}

/// Raw scenario expressions, keyed by flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioLine {
    pub rate: Option<String>,
    pub deposits: Option<String>,
    pub time: Option<String>,
    pub name: Option<String>,
}

impl ScenarioLine {
    fn slot_mut(&mut self, flag: Flag) -> Option<&mut Option<String>> {
        match flag {
            Flag::Rate => Some(&mut self.rate),
            Flag::Deposits => Some(&mut self.deposits),
            Flag::Time => Some(&mut self.time),
            Flag::Name => Some(&mut self.name),
            _ => None,
        }
    }

    /// Fetch a required expression or report the flag as missing
    pub fn require(&self, flag: Flag) -> CalcResult<&str> {
        let value = match flag {
            Flag::Rate => self.rate.as_deref(),
            Flag::Deposits => self.deposits.as_deref(),
            Flag::Time => self.time.as_deref(),
            Flag::Name => self.name.as_deref(),
            _ => None,
        };
        value.ok_or_else(|| {
            CalcError::MissingArgument(format!("{} ({})", flag.short(), flag.long()))
        })
    }
}

/// Group tokens by flag into a scenario line.
///
/// `-r`, `-d` and `-t` must carry exactly one value. `-n` keeps its first value and
/// falls back to the default name when it has none. The last occurrence of a
/// repeated flag wins. Values of batch-level flags are ignored.
pub fn parse_line<S: AsRef<str>>(tokens: &[S]) -> CalcResult<ScenarioLine> {
    let mut grouped: Vec<(Flag, Vec<&str>)> = Vec::new();

    for token in tokens.iter().map(|token| token.as_ref()) {
        if let Some(flag) = Flag::from_token(token) {
            grouped.retain(|(seen, _)| *seen != flag);
            grouped.push((flag, Vec::new()));
        } else if let Some((_, values)) = grouped.last_mut() {
            values.push(token);
        } else {
            return Err(CalcError::parse(format!("unrecognized command {:?}", token)));
        }
    }

    let mut line = ScenarioLine::default();
    for (flag, values) in grouped {
        let Some(slot) = line.slot_mut(flag) else {
            debug!("Ignoring {} on a scenario line", flag.long());
            continue;
        };
        match (flag, values.as_slice()) {
            (Flag::Name, values) => *slot = values.first().map(|v| v.to_string()),
            (_, [value]) => *slot = Some((*value).to_string()),
            _ => {
                return Err(CalcError::parse(format!(
                    "{} expects exactly one value, got {}",
                    flag.long(),
                    values.len()
                )))
            }
        }
    }

    Ok(line)
}

/// Analysis horizon, e.g. `14:Y` for fourteen years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonSpec {
    pub units: u32,
    pub period: Period,
}

impl HorizonSpec {
    pub fn total_days(&self) -> u64 {
        self.units as u64 * self.period.days() as u64
    }
}

/// Parse `count:Period`
pub fn parse_time(expr: &str) -> CalcResult<HorizonSpec> {
    let fields: Vec<&str> = expr.split(':').collect();
    let [units, period] = fields.as_slice() else {
        return Err(CalcError::parse(format!(
            "must provide nperiods:Period for the time scope of the analysis, got {:?}",
            expr
        )));
    };

    let units: u32 = units.parse().map_err(|_| {
        CalcError::parse(format!(
            "could not interpret units for the time scope \
             (must be a non-negative integer), given {:?}",
            units
        ))
    })?;

    Ok(HorizonSpec {
        units,
        period: resolve_period(period)?,
    })
}
