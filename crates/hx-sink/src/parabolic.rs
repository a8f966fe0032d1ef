//! Straight fin with a concave parabolic profile.

use crate::coefficients::ThermalCoefficients;
use crate::geometry::StraightFinGeometry;
use crate::profile::FinProfileKind;
use crate::traits::HeatSink;
use hx_core::Real;
use hx_core::units::{Area, Length, m, m2};

/// `eta = 2 / (1 + sqrt((2 m L)^2 + 1))`.
pub fn efficiency(ml: Real) -> Real {
    let two_ml = 2.0 * ml;
    2.0 / (1.0 + (two_ml * two_ml + 1.0).sqrt())
}

/// Straight fins whose half-thickness follows `(t/2)(1 - x/L)^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParabolicFin {
    geometry: StraightFinGeometry,
    coefficients: ThermalCoefficients,
}

impl ParabolicFin {
    pub fn new(geometry: StraightFinGeometry, coefficients: ThermalCoefficients) -> Self {
        Self {
            geometry,
            coefficients,
        }
    }

    pub fn half_thickness_at(&self, x: Length) -> Length {
        let l = self.geometry.fin_length().value;
        let t = self.geometry.fin_thickness().value;
        let s = 1.0 - x.value.clamp(0.0, l) / l;
        m(0.5 * t * s * s)
    }
}

impl HeatSink for ParabolicFin {
    fn profile(&self) -> FinProfileKind {
        FinProfileKind::Parabolic
    }

    fn geometry(&self) -> &StraightFinGeometry {
        &self.geometry
    }

    fn coefficients(&self) -> &ThermalCoefficients {
        &self.coefficients
    }

    /// `w L [C1 + (L/t) ln(t/L + C1)]`, `C1 = sqrt(1 + (t/L)^2)`
    fn fin_surface_area(&self) -> Area {
        let l = self.geometry.fin_length().value;
        let t = self.geometry.fin_thickness().value;
        let c1 = (1.0 + (t / l).powi(2)).sqrt();
        m2(self.geometry.fin_width().value * l * (c1 + (l / t) * (t / l + c1).ln()))
    }
}
