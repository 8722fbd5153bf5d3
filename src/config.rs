//! Parsing configuration shared by every scenario line

use log::debug;
use std::env;

/// Environment variable overriding the nested deposit separator
pub const NESTED_SEPARATOR_ENV: &str = "INTEREST_COMPARE_NESTED_SEPARATOR";

/// Environment variable overriding the fill keyword
pub const FILL_TOKEN_ENV: &str = "INTEREST_COMPARE_FILL_TOKEN";

/// Environment variable overriding the largest schedule a scenario may expand to
pub const MAX_PERIODS_ENV: &str = "INTEREST_COMPARE_MAX_PERIODS";

/// Default cap on schedule entries per scenario (about 8 MB of balances)
pub const DEFAULT_MAX_PERIODS: usize = 1_000_000;

/// Constant configuration passed into the line processor
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    /// Separator marking a nested sub-account deposit expression (`balance%rate%deposits`)
    pub nested_separator: char,

    /// Trailing deposit keyword that repeats the last deposit until the horizon ends
    pub fill_token: String,

    /// Largest number of schedule entries a single scenario may expand to.
    /// Larger scenarios are rejected instead of allocated.
    pub max_periods: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            nested_separator: '%',
            fill_token: "fill".to_string(),
            max_periods: DEFAULT_MAX_PERIODS,
        }
    }
}

/// A separator must not be able to appear inside a number or a rate expression
fn valid_separator(c: char) -> bool {
    c.is_ascii_punctuation() && !matches!(c, ':' | '.' | '-' | '+')
}

impl CompareConfig {
    /// Defaults, overridden by environment variables when set
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each variable name.
    /// Invalid overrides are ignored.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(NESTED_SEPARATOR_ENV) {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if valid_separator(c) => config.nested_separator = c,
                _ => debug!("Ignoring {}={:?}", NESTED_SEPARATOR_ENV, value),
            }
        }

        if let Some(value) = lookup(FILL_TOKEN_ENV) {
            let usable = !value.is_empty()
                && !value.contains(':')
                && !value.contains(config.nested_separator)
                && value.parse::<f64>().is_err();
            if usable {
                config.fill_token = value;
            } else {
                debug!("Ignoring {}={:?}", FILL_TOKEN_ENV, value);
            }
        }

        if let Some(value) = lookup(MAX_PERIODS_ENV) {
            match value.parse::<usize>() {
                Ok(max) if max > 0 => config.max_periods = max,
                _ => debug!("Ignoring {}={:?}", MAX_PERIODS_ENV, value),
            }
        }

        config
    }
}
