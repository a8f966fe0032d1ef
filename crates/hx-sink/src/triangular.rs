//! Straight fin with a linear (triangular) taper to a sharp tip.

use crate::coefficients::ThermalCoefficients;
use crate::common::EPSILON_ML;
use crate::geometry::StraightFinGeometry;
use crate::profile::FinProfileKind;
use crate::traits::HeatSink;
use hx_core::Real;
use hx_core::special::bessel_i1_over_i0;
use hx_core::units::{Area, Length, m, m2};

/// `eta = I1(2 m L) / (m L I0(2 m L))`.
pub fn efficiency(ml: Real) -> Real {
    if ml.abs() < EPSILON_ML {
        // I1(2x)/I0(2x) = x - x^3/2 + ...
        return 1.0 - 0.5 * ml * ml;
    }
    bessel_i1_over_i0(2.0 * ml) / ml
}

/// Straight triangular fins, root thickness `t`, zero tip thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularFin {
    geometry: StraightFinGeometry,
    coefficients: ThermalCoefficients,
}

impl TriangularFin {
    pub fn new(geometry: StraightFinGeometry, coefficients: ThermalCoefficients) -> Self {
        Self {
            geometry,
            coefficients,
        }
    }

    /// Half-thickness at distance `x` from the base, `(t/2)(1 - x/L)`.
    /// `x` is clamped to `[0, L]`.
    pub fn half_thickness_at(&self, x: Length) -> Length {
        let l = self.geometry.fin_length().value;
        let t = self.geometry.fin_thickness().value;
        let x = x.value.clamp(0.0, l);
        m(0.5 * t * (1.0 - x / l))
    }
}

impl HeatSink for TriangularFin {
    fn profile(&self) -> FinProfileKind {
        FinProfileKind::Triangular
    }

    fn geometry(&self) -> &StraightFinGeometry {
        &self.geometry
    }

    fn coefficients(&self) -> &ThermalCoefficients {
        &self.coefficients
    }

    /// `2 w sqrt(L^2 + (t/2)^2)`
    fn fin_surface_area(&self) -> Area {
        let l = self.geometry.fin_length().value;
        let half_t = 0.5 * self.geometry.fin_thickness().value;
        m2(2.0 * self.geometry.fin_width().value * l.hypot(half_t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_core::special::{bessel_i0, bessel_i1};
    use hx_core::{Tolerances, nearly_equal};

    #[test]
    fn kernel_matches_bessel_definition() {
        for ml in [0.1, 0.5, 1.0, 2.0, 5.0] {
            let direct = bessel_i1(2.0 * ml) / (ml * bessel_i0(2.0 * ml));
            let tol = Tolerances {
                abs: 1e-12,
                rel: 1e-9,
            };
            assert!(nearly_equal(efficiency(ml), direct, tol), "mL = {ml}");
        }
    }

    #[test]
    fn kernel_is_continuous_at_series_switch() {
        let below = efficiency(EPSILON_ML * 0.999_999);
        let above = efficiency(EPSILON_ML * 1.000_001);
        assert!((below - above).abs() < 1e-12);
    }

    #[test]
    fn large_ml_stays_finite() {
        let eta = efficiency(500.0);
        assert!(eta.is_finite() && eta > 0.0);
        assert!((eta - 1.0 / 500.0).abs() < 1e-5);
    }

    #[test]
    fn area_and_contour() {
        let g = StraightFinGeometry::from_si(1, 0.03, 0.05, 0.008, 0.01).unwrap();
        let f = TriangularFin::new(g, ThermalCoefficients::from_si(200.0, 30.0).unwrap());
        let expected = 2.0 * 0.05 * (0.03_f64.powi(2) + 0.004_f64.powi(2)).sqrt();
        assert!(nearly_equal(f.fin_surface_area().value, expected, Tolerances::default()));

        assert!(nearly_equal(f.half_thickness_at(m(0.0)).value, 0.004, Tolerances::default()));
        assert!(nearly_equal(f.half_thickness_at(m(0.015)).value, 0.002, Tolerances::default()));
        assert_eq!(f.half_thickness_at(m(1.0)).value, 0.0);
    }
}
