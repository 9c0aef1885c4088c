use thiserror::Error;

/// Errors that can occur while validating staking inputs or computing yields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum YieldError {
    #[error("invalid input: {field} = {value} is outside its accepted domain")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("undefined ratio: {divisor} is zero at the point of division")]
    UndefinedRatio { divisor: &'static str },

    #[error("invalid policy state: gamma {gamma} leaves the reward split undefined")]
    InvalidPolicyState { gamma: f64 },

    #[error("invalid split policy: {field} = {value}")]
    InvalidPolicy { field: &'static str, value: f64 },
}
