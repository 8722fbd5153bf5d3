//! Compounding periods and their textual aliases

use crate::error::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed length of time used as compounding or measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Day,
    Month,
    Bimester,
    Trimester,
    Quadmester,
    Semester,
    Year,
    /// Two years
    Zear,
}

impl Period {
    /// All periods, shortest first
    pub const ALL: [Period; 8] = [
        Period::Day,
        Period::Month,
        Period::Bimester,
        Period::Trimester,
        Period::Quadmester,
        Period::Semester,
        Period::Year,
        Period::Zear,
    ];

    /// Length of the period in days
    pub fn days(&self) -> u32 {
        match self {
            Period::Day => 1,
            Period::Month => 30,
            Period::Bimester => 60,
            Period::Trimester => 90,
            Period::Quadmester => 120,
            Period::Semester => 180,
            Period::Year => 365,
            Period::Zear => 730,
        }
    }

    /// Single-letter code, also used in default scenario names
    pub fn short_code(&self) -> &'static str {
        match self {
            Period::Day => "D",
            Period::Month => "M",
            Period::Bimester => "B",
            Period::Trimester => "T",
            Period::Quadmester => "Q",
            Period::Semester => "S",
            Period::Year => "Y",
            Period::Zear => "Z",
        }
    }

    pub fn long_code(&self) -> &'static str {
        match self {
            Period::Day => "DAY",
            Period::Month => "MONTH",
            Period::Bimester => "BIMESTER",
            Period::Trimester => "TRIMESTER",
            Period::Quadmester => "QUADMESTER",
            Period::Semester => "SEMESTER",
            Period::Year => "YEAR",
            Period::Zear => "ZEAR",
        }
    }

    /// Whether `token` names this period (short code, long code or day count)
    pub fn matches(&self, token: &str) -> bool {
        token == self.short_code() || token == self.long_code() || token == self.days().to_string()
    }
}

/// Resolve a period token, case-sensitive
pub fn resolve_period(token: &str) -> CalcResult<Period> {
    Period::ALL
        .iter()
        .copied()
        .find(|p| p.matches(token))
        .ok_or_else(|| CalcError::parse(format!("unknown period: {:?}", token)))
}

impl FromStr for Period {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_period(s)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_code())
    }
}
