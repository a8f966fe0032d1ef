//! hx-sink: finned heat-sink models.
//!
//! Provides:
//! - `ThermalCoefficients` pairing fin conductivity `k` with convection `h`
//! - `StraightFinGeometry` for arrays of straight fins on a flat base
//! - the `HeatSink` capability interface and the straight rectangular,
//!   triangular and parabolic profiles
//! - `suggest_lengths`, a fin length advisor over a range of `h`
//!
//! All models assume one-dimensional conduction along the fin, uniform `h`
//! and an isothermal base.
//!
//! # Example
//!
//! ```no_run
//! use hx_core::units::{k, w_per_m2k};
//! use hx_materials::MaterialPropertyTable;
//! use hx_sink::{
//!     FinProfileKind, HeatSink, ResultMode, StraightFinGeometry, StraightHeatSink,
//!     ThermalCoefficients,
//! };
//!
//! let table = MaterialPropertyTable::builtin();
//! let coeffs =
//!     ThermalCoefficients::from_material(table, "Aluminum 2024-T6", k(300.0), w_per_m2k(40.0))
//!         .unwrap();
//! let geometry = StraightFinGeometry::from_si(10, 0.02, 0.05, 0.001, 0.05).unwrap();
//! let sink = StraightHeatSink::new(FinProfileKind::Rectangular, geometry, coeffs);
//!
//! let q = sink.hx(k(350.0), k(300.0), ResultMode::Total).unwrap();
//! println!("eta = {:.4}, Q = {:.2} W", sink.fin_efficiency(), q.total().value);
//! ```

pub mod advisor;
pub mod coefficients;
pub mod common;
pub mod error;
pub mod geometry;
pub mod heat_rate;
pub mod parabolic;
pub mod profile;
pub mod rectangular;
pub mod straight;
pub mod traits;
pub mod triangular;

// Re-exports
pub use advisor::{
    AdvisorStep, LengthSuggestion, ReferencePoint, SuggestionRequest, suggest_lengths,
};
pub use coefficients::ThermalCoefficients;
pub use error::{SinkError, SinkResult};
pub use geometry::StraightFinGeometry;
pub use heat_rate::{DeltaTPolicy, HeatRate, HeatRateBreakdown, HeatSinkReport, ResultMode};
pub use parabolic::ParabolicFin;
pub use profile::FinProfileKind;
pub use rectangular::RectangularFin;
pub use straight::StraightHeatSink;
pub use traits::HeatSink;
pub use triangular::TriangularFin;
