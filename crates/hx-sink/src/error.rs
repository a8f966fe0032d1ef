//! Error types for heat-sink construction and evaluation.

use hx_core::HxError;
use hx_materials::MaterialError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a heat sink.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Invalid coefficient {what} = {value} (must be finite and > 0)")]
    InvalidCoefficient { what: &'static str, value: f64 },

    #[error("Invalid geometry: {what} = {value} ({constraint})")]
    InvalidGeometry {
        what: &'static str,
        value: f64,
        constraint: String,
    },

    #[error("Invalid temperatures: base {base_k} K must be above environment {env_k} K")]
    InvalidTemperature { base_k: f64, env_k: f64 },

    #[error("Not supported: {what}")]
    NotSupported { what: String },

    #[error(transparent)]
    Material(#[from] MaterialError),
}

pub type SinkResult<T> = Result<T, SinkError>;

impl From<SinkError> for HxError {
    fn from(e: SinkError) -> Self {
        match e {
            SinkError::InvalidCoefficient { what, value } => HxError::InvalidArg {
                what: format!("coefficient {what} = {value}"),
            },
            SinkError::Material(inner) => inner.into(),
            other => HxError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
