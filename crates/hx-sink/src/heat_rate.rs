//! Heat-rate result shapes and the temperature-difference policy.

use hx_core::units::{Power, w};
use serde::Serialize;

/// Shape of the value returned by [`HeatSink::hx`](crate::HeatSink::hx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultMode {
    /// Total heat rate of the assembly only.
    #[default]
    Total,
    /// Per-fin, all-fins, exposed-base and total rates.
    Breakdown,
}

/// How `hx` treats `T_base <= T_env`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaTPolicy {
    /// Fail with `InvalidTemperature`.
    #[default]
    Reject,
    /// Return the signed rate (zero or negative: heat flows into the sink).
    AllowReverse,
}

/// Heat transfer split of one evaluation. All rates in W.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatRateBreakdown {
    /// `T_base - T_env` in K.
    pub delta_t_k: f64,
    /// One fin.
    pub per_fin_w: f64,
    /// All fins.
    pub fins_w: f64,
    /// Exposed base between fins.
    pub base_w: f64,
    pub total_w: f64,
}

impl HeatRateBreakdown {
    pub fn total(&self) -> Power {
        w(self.total_w)
    }
}

/// Return value of `hx`, selected by [`ResultMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatRate {
    Total(Power),
    Breakdown(HeatRateBreakdown),
}

impl HeatRate {
    /// Total rate regardless of mode.
    pub fn total(&self) -> Power {
        match self {
            HeatRate::Total(q) => *q,
            HeatRate::Breakdown(b) => b.total(),
        }
    }

    pub fn breakdown(&self) -> Option<&HeatRateBreakdown> {
        match self {
            HeatRate::Total(_) => None,
            HeatRate::Breakdown(b) => Some(b),
        }
    }
}

/// Derived parameters of one heat sink, independent of temperatures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatSinkReport {
    pub profile: &'static str,
    pub contour: &'static str,
    pub fin_count: u32,
    pub conductivity_w_mk: f64,
    pub h_w_m2k: f64,
    /// Fin parameter `m` in 1/m.
    pub fin_parameter_per_m: f64,
    pub corrected_length_m: f64,
    pub perimeter_m: f64,
    pub cross_section_m2: f64,
    pub fin_area_m2: f64,
    pub total_fin_area_m2: f64,
    pub base_area_m2: f64,
    pub exposed_base_area_m2: f64,
    pub fin_gap_m: Option<f64>,
    pub efficiency: f64,
    pub effectiveness: f64,
    pub overall_effectiveness: f64,
}
