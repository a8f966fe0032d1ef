//! Straight-fin array geometry.
//!
//! `fin_count` parallel fins of length `L`, thickness `t` (at the root) and
//! width `w`, spread evenly along a base of height `H` and the same width:
//!
//! ```text
//!   |<- L ->|
//!   +-------+  t
//!   |  gap
//!   +-------+
//!   H (base height, fins stacked along it)
//! ```

use crate::common::{MIN_FIN_GAP_M, check_length};
use crate::error::{SinkError, SinkResult};
use hx_core::units::{Area, Length, m, m2};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightFinGeometry {
    fin_count: u32,
    fin_length: Length,
    fin_width: Length,
    fin_thickness: Length,
    base_height: Length,
}

impl StraightFinGeometry {
    /// Validates every dimension and the footprint constraint
    /// `fin_count * t * w <= base_height * w`.
    pub fn new(
        fin_count: u32,
        fin_length: Length,
        fin_width: Length,
        fin_thickness: Length,
        base_height: Length,
    ) -> SinkResult<Self> {
        if fin_count == 0 {
            return Err(SinkError::InvalidGeometry {
                what: "fin count",
                value: 0.0,
                constraint: "must be >= 1".into(),
            });
        }
        check_length(fin_length.value, "fin length")?;
        check_length(fin_width.value, "fin width")?;
        let t = check_length(fin_thickness.value, "fin thickness")?;
        let base = check_length(base_height.value, "base height")?;

        let stacked = fin_count as f64 * t;
        // small relative slack so an exactly-full base is accepted
        if stacked > base * (1.0 + 1e-12) {
            return Err(SinkError::InvalidGeometry {
                what: "total fin thickness",
                value: stacked,
                constraint: format!("{fin_count} fins x {t} m exceed the base height {base} m"),
            });
        }

        let geometry = Self {
            fin_count,
            fin_length,
            fin_width,
            fin_thickness,
            base_height,
        };
        if let Some(gap) = geometry.fin_gap().filter(|g| g.value < MIN_FIN_GAP_M) {
            warn!(gap_m = gap.value, fin_count, "fin gap is below 0.1 mm");
        }
        Ok(geometry)
    }

    /// Same as [`new`](Self::new) with every length in metres.
    pub fn from_si(
        fin_count: u32,
        fin_length: f64,
        fin_width: f64,
        fin_thickness: f64,
        base_height: f64,
    ) -> SinkResult<Self> {
        Self::new(
            fin_count,
            m(fin_length),
            m(fin_width),
            m(fin_thickness),
            m(base_height),
        )
    }

    pub fn fin_count(&self) -> u32 {
        self.fin_count
    }

    pub fn fin_length(&self) -> Length {
        self.fin_length
    }

    pub fn fin_width(&self) -> Length {
        self.fin_width
    }

    pub fn fin_thickness(&self) -> Length {
        self.fin_thickness
    }

    pub fn base_height(&self) -> Length {
        self.base_height
    }

    /// Heat-conducting perimeter of the fin cross-section, `P = 2w` (edges neglected).
    pub fn perimeter(&self) -> Length {
        m(2.0 * self.fin_width.value)
    }

    /// Fin root cross-section, `Ac = w t`. Also the footprint one fin takes on the base.
    pub fn cross_section(&self) -> Area {
        m2(self.fin_width.value * self.fin_thickness.value)
    }

    /// Total base area `H w`.
    pub fn base_area(&self) -> Area {
        m2(self.base_height.value * self.fin_width.value)
    }

    /// Base area left bare between fins.
    pub fn exposed_base_area(&self) -> Area {
        let covered = self.fin_count as f64 * self.cross_section().value;
        m2((self.base_area().value - covered).max(0.0))
    }

    /// Spacing between adjacent fins; `None` for a single fin.
    pub fn fin_gap(&self) -> Option<Length> {
        if self.fin_count < 2 {
            return None;
        }
        let n = self.fin_count as f64;
        let free = self.base_height.value - n * self.fin_thickness.value;
        Some(m(free.max(0.0) / (n - 1.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_core::{Tolerances, nearly_equal};

    #[test]
    fn derived_areas() {
        let g = StraightFinGeometry::from_si(10, 0.02, 0.05, 0.001, 0.05).unwrap();
        let tol = Tolerances::default();
        assert!(nearly_equal(g.perimeter().value, 0.1, tol));
        assert!(nearly_equal(g.cross_section().value, 5e-5, tol));
        assert!(nearly_equal(g.base_area().value, 2.5e-3, tol));
        assert!(nearly_equal(g.exposed_base_area().value, 2.0e-3, tol));
        assert!(nearly_equal(g.fin_gap().unwrap().value, 0.04 / 9.0, tol));
    }

    #[test]
    fn single_fin_has_no_gap() {
        let g = StraightFinGeometry::from_si(1, 0.02, 0.05, 0.001, 0.01).unwrap();
        assert!(g.fin_gap().is_none());
    }

    #[test]
    fn rejects_zero_fins_and_bad_lengths() {
        assert!(StraightFinGeometry::from_si(0, 0.02, 0.05, 0.001, 0.05).is_err());
        assert!(StraightFinGeometry::from_si(1, 0.0, 0.05, 0.001, 0.05).is_err());
        assert!(StraightFinGeometry::from_si(1, 0.02, -0.05, 0.001, 0.05).is_err());
        assert!(StraightFinGeometry::from_si(1, 0.02, 0.05, f64::NAN, 0.05).is_err());
        assert!(StraightFinGeometry::from_si(1, 0.02, 0.05, 0.001, 0.0).is_err());
    }

    #[test]
    fn footprint_must_fit_base() {
        // exactly full is allowed
        let full = StraightFinGeometry::from_si(10, 0.02, 0.05, 0.005, 0.05).unwrap();
        assert!(full.exposed_base_area().value < 1e-15);

        let err = StraightFinGeometry::from_si(11, 0.02, 0.05, 0.005, 0.05).unwrap_err();
        match err {
            SinkError::InvalidGeometry { what, .. } => assert_eq!(what, "total fin thickness"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
