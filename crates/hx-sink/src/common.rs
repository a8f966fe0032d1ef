//! Shared validation helpers and thresholds.

use crate::error::{SinkError, SinkResult};
use hx_core::numeric::ensure_positive;

/// Fin gaps narrower than this are flagged (m).
pub const MIN_FIN_GAP_M: f64 = 1e-4;

/// Fin efficiencies below this are flagged. Sits under the efficiency of any
/// length the advisor suggests.
pub const LOW_EFFICIENCY: f64 = 0.2;

/// Below this `mL` the efficiency kernels switch to their series limit.
pub const EPSILON_ML: f64 = 1e-4;

/// Finite and > 0, reported as a coefficient error.
pub fn check_coefficient(value: f64, what: &'static str) -> SinkResult<f64> {
    ensure_positive(value, what).map_err(|_| SinkError::InvalidCoefficient { what, value })
}

/// Finite and > 0, reported as a geometry error.
pub fn check_length(value: f64, what: &'static str) -> SinkResult<f64> {
    ensure_positive(value, what).map_err(|_| SinkError::InvalidGeometry {
        what,
        value,
        constraint: "must be finite and > 0".into(),
    })
}

/// Central difference of `f` at `x` with a step scaled to `x`.
pub fn derivative(f: impl Fn(f64) -> f64, x: f64) -> f64 {
    let step = 1e-6 * x.abs().max(1.0);
    (f(x + step) - f(x - step)) / (2.0 * step)
}
