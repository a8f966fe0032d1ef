//! Straight fin of constant thickness.

use crate::coefficients::ThermalCoefficients;
use crate::geometry::StraightFinGeometry;
use crate::profile::FinProfileKind;
use crate::traits::HeatSink;
use hx_core::Real;
use hx_core::special::tanh_over_x;
use hx_core::units::{Area, m2};

/// `eta = tanh(m Lc) / (m Lc)`.
pub fn efficiency(ml: Real) -> Real {
    tanh_over_x(ml)
}

/// Adiabatic-tip correction `Lc = L + t/2`.
pub fn corrected_length(l: Real, t: Real) -> Real {
    l + 0.5 * t
}

/// Straight rectangular fins. The convective tip is folded into the
/// corrected length, so the tip is treated as adiabatic.
#[derive(Debug, Clone, PartialEq)]
pub struct RectangularFin {
    geometry: StraightFinGeometry,
    coefficients: ThermalCoefficients,
}

impl RectangularFin {
    pub fn new(geometry: StraightFinGeometry, coefficients: ThermalCoefficients) -> Self {
        Self {
            geometry,
            coefficients,
        }
    }
}

impl HeatSink for RectangularFin {
    fn profile(&self) -> FinProfileKind {
        FinProfileKind::Rectangular
    }

    fn geometry(&self) -> &StraightFinGeometry {
        &self.geometry
    }

    fn coefficients(&self) -> &ThermalCoefficients {
        &self.coefficients
    }

    /// `2 w Lc`
    fn fin_surface_area(&self) -> Area {
        m2(2.0 * self.geometry.fin_width().value * self.corrected_length().value)
    }
}
