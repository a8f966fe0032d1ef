use thiserror::Error;

pub type HxResult<T> = Result<T, HxError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HxError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value} (must be > 0)")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
