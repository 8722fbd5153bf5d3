//! Error types for scenario parsing and evaluation

use thiserror::Error;

/// Result type used throughout the calculator
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while parsing or evaluating a scenario
#[derive(Error, Debug)]
pub enum CalcError {
    /// Malformed rate, deposit, time or period token
    #[error("Parse error: {0}")]
    Parse(String),

    /// Well-formed input describing an impossible configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required flag is absent
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// Percent returned is undefined for zero net investment
    #[error("Division error: {0}")]
    Division(String),

    /// Reading scenario lines failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing results failed
    #[error("Output error: {0}")]
    Output(String),
}

impl CalcError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        CalcError::Parse(message.into())
    }
}

impl From<csv::Error> for CalcError {
    fn from(err: csv::Error) -> Self {
        CalcError::Output(err.to_string())
    }
}
