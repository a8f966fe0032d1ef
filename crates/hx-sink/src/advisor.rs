//! Fin length suggestions by diminishing thermal return.
//!
//! For a fixed material, profile and root thickness, the heat a single fin
//! rejects per unit width and temperature difference is proportional to
//! `eta(m Lc) * Lc`. Its slope with respect to length is the thermal return of
//! adding material. The slope is largest for a short fin and decays as the
//! efficiency curve flattens; the suggested length is where it falls below
//! [`MARGINAL_RETURN_FRACTION`] of its value at the reference length
//! `0.05 / m`.
//!
//! Every `h` sample is independent, so samples are evaluated in parallel and
//! returned in request order.

use crate::coefficients::ThermalCoefficients;
use crate::common::{check_coefficient, check_length, derivative};
use crate::error::SinkResult;
use crate::profile::FinProfileKind;
use hx_core::Real;
use hx_core::units::{Length, Temperature, m, w_per_m2k};
use hx_materials::MaterialPropertyTable;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Stop once the marginal return drops below this share of its reference value.
pub const MARGINAL_RETURN_FRACTION: Real = 0.05;

/// `m L` of the reference (short) fin.
pub const REFERENCE_ML: Real = 0.05;

/// Upper end of the search, as `m L`.
pub const MAX_ML: Real = 10.0;

/// `m L` grid of the reference table.
pub const REFERENCE_ML_GRID: [Real; 10] = [0.1, 0.2, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 4.0, 5.0];

const MAX_BISECTIONS: usize = 80;
const LENGTH_RTOL: Real = 1e-9;

/// Inputs of [`suggest_lengths`].
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionRequest {
    pub material: String,
    /// Temperature at which the material conductivity is taken.
    pub temperature: Temperature,
    pub profile: FinProfileKind,
    pub fin_thickness: Length,
    /// Convection coefficients in W/(m²·K), in presentation order.
    pub h_values: Vec<Real>,
    /// Attach the decision and reference tables to every suggestion.
    pub verbose: bool,
}

impl SuggestionRequest {
    pub fn new(
        material: impl Into<String>,
        temperature: Temperature,
        profile: FinProfileKind,
        fin_thickness: Length,
        h_values: Vec<Real>,
    ) -> Self {
        Self {
            material: material.into(),
            temperature,
            profile,
            fin_thickness,
            h_values,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// One evaluated candidate length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdvisorStep {
    pub length_m: Real,
    pub efficiency: Real,
    /// `d(eta Lc)/dL`, dimensionless.
    pub marginal_return: Real,
}

/// One row of the fixed `m L` reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferencePoint {
    pub ml: Real,
    pub length_m: Real,
    /// Heat through the fin over heat through an infinitely long fin.
    pub heat_ratio: Real,
    pub efficiency: Real,
}

/// Suggested length for one `h` sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthSuggestion {
    pub h_w_m2k: Real,
    pub conductivity_w_mk: Real,
    pub fin_parameter_per_m: Real,
    pub length_m: Real,
    pub ml: Real,
    pub efficiency: Real,
    pub heat_ratio: Real,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_table: Option<Vec<AdvisorStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_table: Option<Vec<ReferencePoint>>,
}

impl LengthSuggestion {
    pub fn length(&self) -> Length {
        m(self.length_m)
    }
}

/// Suggests one fin length per `h` in `request.h_values`.
///
/// Fails on an unknown material or out-of-range temperature, a non-positive
/// thickness, or any non-positive `h`.
pub fn suggest_lengths(
    table: &MaterialPropertyTable,
    request: &SuggestionRequest,
) -> SinkResult<Vec<LengthSuggestion>> {
    let t = check_length(request.fin_thickness.value, "fin thickness")?;
    let k = table.resolve(&request.material, request.temperature)?;

    request
        .h_values
        .par_iter()
        .map(|&h| -> SinkResult<LengthSuggestion> {
            let coefficients = ThermalCoefficients::new(k, w_per_m2k(check_coefficient(h, "h")?))?;
            Ok(suggest_one(request.profile, &coefficients, t, request.verbose))
        })
        .collect()
}

/// Straight fins: `m = sqrt(2 h / (k t))`, independent of width.
fn fin_parameter(coefficients: &ThermalCoefficients, t: Real) -> Real {
    (2.0 * coefficients.h().value / (coefficients.k().value * t)).sqrt()
}

fn suggest_one(
    profile: FinProfileKind,
    coefficients: &ThermalCoefficients,
    t: Real,
    verbose: bool,
) -> LengthSuggestion {
    let m_fin = fin_parameter(coefficients, t);
    let active = |l: Real| profile.corrected_length(l, t);
    // heat per unit (h w dT / m) is x eta(x) with x = m Lc; d/dL of (eta Lc) is its x-slope
    let slope = |l: Real| derivative(|x| profile.heat_ratio(x), m_fin * active(l));

    let l_ref = REFERENCE_ML / m_fin;
    let threshold = MARGINAL_RETURN_FRACTION * slope(l_ref);

    let mut steps = Vec::new();
    let mut record = |l: Real, s: Real| {
        if verbose {
            steps.push(AdvisorStep {
                length_m: l,
                efficiency: profile.efficiency_kernel(m_fin * active(l)),
                marginal_return: s,
            });
        }
    };

    let mut lo = l_ref;
    let mut hi = MAX_ML / m_fin;
    let s_hi = slope(hi);
    record(l_ref, threshold / MARGINAL_RETURN_FRACTION);
    record(hi, s_hi);

    let length = if s_hi > threshold {
        hi
    } else {
        // slope is decreasing in L: keep slope(lo) > threshold >= slope(hi)
        for _ in 0..MAX_BISECTIONS {
            if hi - lo <= LENGTH_RTOL * hi {
                break;
            }
            let mid = 0.5 * (lo + hi);
            let s_mid = slope(mid);
            record(mid, s_mid);
            if s_mid > threshold {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    };

    let x = m_fin * active(length);
    let efficiency = profile.efficiency_kernel(x);
    debug!(
        profile = profile.name(),
        h = coefficients.h().value,
        m = m_fin,
        length_m = length,
        efficiency,
        "suggested fin length"
    );

    LengthSuggestion {
        h_w_m2k: coefficients.h().value,
        conductivity_w_mk: coefficients.k().value,
        fin_parameter_per_m: m_fin,
        length_m: length,
        ml: m_fin * length,
        efficiency,
        heat_ratio: profile.heat_ratio(x),
        decision_table: verbose.then_some(steps),
        reference_table: verbose.then(|| reference_table(profile, m_fin)),
    }
}

/// Length, heat ratio and efficiency at each point of [`REFERENCE_ML_GRID`].
pub fn reference_table(profile: FinProfileKind, m_fin: Real) -> Vec<ReferencePoint> {
    REFERENCE_ML_GRID
        .iter()
        .map(|&ml| ReferencePoint {
            ml,
            length_m: ml / m_fin,
            heat_ratio: profile.heat_ratio(ml),
            efficiency: profile.efficiency_kernel(ml),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SinkError;
    use crate::common::LOW_EFFICIENCY;
    use hx_core::units::k;

    fn request(profile: FinProfileKind, h_values: Vec<Real>) -> SuggestionRequest {
        SuggestionRequest::new("Aluminum 2024-T6", k(300.0), profile, m(0.002), h_values)
    }

    #[test]
    fn forced_convection_suggests_shorter_fins() {
        let table = MaterialPropertyTable::builtin();
        for profile in FinProfileKind::ALL {
            let out = suggest_lengths(table, &request(profile, vec![10.0, 150.0])).unwrap();
            assert_eq!(out.len(), 2);
            assert_eq!(out[0].h_w_m2k, 10.0);
            assert_eq!(out[1].h_w_m2k, 150.0);
            assert!(out[1].length_m < out[0].length_m, "{profile}");
        }
    }

    #[test]
    fn rectangular_stops_where_return_falls_to_five_percent() {
        let table = MaterialPropertyTable::builtin();
        let req = request(FinProfileKind::Rectangular, vec![40.0]);
        let out = suggest_lengths(table, &req).unwrap();
        let s = &out[0];
        // d(eta Lc)/dL = sech^2(m Lc)
        let x_ref = s.fin_parameter_per_m * (REFERENCE_ML / s.fin_parameter_per_m + 0.001);
        let target = MARGINAL_RETURN_FRACTION / x_ref.cosh().powi(2);
        let x = s.fin_parameter_per_m * (s.length_m + 0.001);
        let sech2 = 1.0 / x.cosh().powi(2);
        assert!((sech2 - target).abs() < 1e-6, "{sech2} vs {target}");
        assert!(s.ml > 1.5 && s.ml < 2.5, "mL = {}", s.ml);
    }

    #[test]
    fn suggested_fins_are_not_flagged_as_inefficient() {
        let table = MaterialPropertyTable::builtin();
        for profile in FinProfileKind::ALL {
            for t in [0.0005, 0.002, 0.006] {
                let mut req = request(profile, vec![5.0, 25.0, 150.0, 250.0]);
                req.fin_thickness = m(t);
                for s in suggest_lengths(table, &req).unwrap() {
                    assert!(
                        s.efficiency > LOW_EFFICIENCY,
                        "{profile} t={t} h={}: eta={}",
                        s.h_w_m2k,
                        s.efficiency
                    );
                }
            }
        }
    }

    #[test]
    fn preserves_request_order() {
        let table = MaterialPropertyTable::builtin();
        let hs = vec![250.0, 5.0, 60.0, 25.0, 120.0];
        let out = suggest_lengths(table, &request(FinProfileKind::Parabolic, hs.clone())).unwrap();
        let got: Vec<_> = out.iter().map(|s| s.h_w_m2k).collect();
        assert_eq!(got, hs);
    }

    #[test]
    fn verbose_attaches_tables() {
        let table = MaterialPropertyTable::builtin();
        let quiet =
            suggest_lengths(table, &request(FinProfileKind::Triangular, vec![20.0])).unwrap();
        assert!(quiet[0].decision_table.is_none());
        assert!(quiet[0].reference_table.is_none());

        let loud = suggest_lengths(
            table,
            &request(FinProfileKind::Triangular, vec![20.0]).verbose(true),
        )
        .unwrap();
        let steps = loud[0].decision_table.as_ref().unwrap();
        assert!(steps.len() > 2);
        assert!(steps.iter().all(|s| s.efficiency > 0.0 && s.efficiency <= 1.0));
        let refs = loud[0].reference_table.as_ref().unwrap();
        assert_eq!(refs.len(), REFERENCE_ML_GRID.len());
        assert!(refs.windows(2).all(|w| w[0].heat_ratio < w[1].heat_ratio));
        assert_eq!(loud[0].length_m, quiet[0].length_m);
    }

    #[test]
    fn reference_table_matches_tanh_for_rectangular() {
        let refs = reference_table(FinProfileKind::Rectangular, 20.0);
        for p in refs {
            assert!((p.heat_ratio - p.ml.tanh()).abs() < 1e-12);
            assert!((p.length_m - p.ml / 20.0).abs() < 1e-15);
        }
    }

    #[test]
    fn input_errors() {
        let table = MaterialPropertyTable::builtin();

        let mut bad_t = request(FinProfileKind::Rectangular, vec![10.0]);
        bad_t.fin_thickness = m(0.0);
        assert!(matches!(
            suggest_lengths(table, &bad_t),
            Err(SinkError::InvalidGeometry { .. })
        ));

        let mut bad_material = request(FinProfileKind::Rectangular, vec![10.0]);
        bad_material.material = "Unobtainium".into();
        assert!(matches!(
            suggest_lengths(table, &bad_material),
            Err(SinkError::Material(_))
        ));

        let mut cold = request(FinProfileKind::Rectangular, vec![10.0]);
        cold.temperature = k(20.0);
        assert!(matches!(
            suggest_lengths(table, &cold),
            Err(SinkError::Material(_))
        ));

        assert!(matches!(
            suggest_lengths(table, &request(FinProfileKind::Rectangular, vec![10.0, -1.0])),
            Err(SinkError::InvalidCoefficient { .. })
        ));
    }
}
