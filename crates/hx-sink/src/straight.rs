//! Closed set of straight-fin heat sinks behind one value type.

use crate::coefficients::ThermalCoefficients;
use crate::geometry::StraightFinGeometry;
use crate::parabolic::ParabolicFin;
use crate::profile::FinProfileKind;
use crate::rectangular::RectangularFin;
use crate::traits::HeatSink;
use crate::triangular::TriangularFin;
use hx_core::units::Area;

/// Any straight-fin heat sink, dispatched by profile.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum StraightHeatSink {
    Rectangular(RectangularFin),
    Triangular(TriangularFin),
    Parabolic(ParabolicFin),
}

impl StraightHeatSink {
    pub fn new(
        profile: FinProfileKind,
        geometry: StraightFinGeometry,
        coefficients: ThermalCoefficients,
    ) -> Self {
        match profile {
            FinProfileKind::Rectangular => {
                StraightHeatSink::Rectangular(RectangularFin::new(geometry, coefficients))
            }
            FinProfileKind::Triangular => {
                StraightHeatSink::Triangular(TriangularFin::new(geometry, coefficients))
            }
            FinProfileKind::Parabolic => {
                StraightHeatSink::Parabolic(ParabolicFin::new(geometry, coefficients))
            }
        }
    }

    fn inner(&self) -> &dyn HeatSink {
        match self {
            StraightHeatSink::Rectangular(s) => s,
            StraightHeatSink::Triangular(s) => s,
            StraightHeatSink::Parabolic(s) => s,
        }
    }
}

impl HeatSink for StraightHeatSink {
    fn profile(&self) -> FinProfileKind {
        self.inner().profile()
    }

    fn geometry(&self) -> &StraightFinGeometry {
        self.inner().geometry()
    }

    fn coefficients(&self) -> &ThermalCoefficients {
        self.inner().coefficients()
    }

    fn fin_surface_area(&self) -> Area {
        self.inner().fin_surface_area()
    }
}

impl From<RectangularFin> for StraightHeatSink {
    fn from(s: RectangularFin) -> Self {
        StraightHeatSink::Rectangular(s)
    }
}

impl From<TriangularFin> for StraightHeatSink {
    fn from(s: TriangularFin) -> Self {
        StraightHeatSink::Triangular(s)
    }
}

impl From<ParabolicFin> for StraightHeatSink {
    fn from(s: ParabolicFin) -> Self {
        StraightHeatSink::Parabolic(s)
    }
}
