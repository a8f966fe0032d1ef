//! The heat-sink capability interface.

use crate::coefficients::ThermalCoefficients;
use crate::common::LOW_EFFICIENCY;
use crate::error::{SinkError, SinkResult};
use crate::geometry::StraightFinGeometry;
use crate::heat_rate::{DeltaTPolicy, HeatRate, HeatRateBreakdown, HeatSinkReport, ResultMode};
use crate::profile::FinProfileKind;
use hx_core::Real;
use hx_core::units::{Area, Length, Temperature, m, m2, w};
use tracing::warn;

/// A finned heat sink evaluated with one-dimensional fin conduction.
///
/// Profiles supply their kind, geometry, coefficients and fin surface area.
/// The efficiency kernel and corrected length come from [`FinProfileKind`],
/// and every derived quantity is provided here once for all profiles.
/// Implementations are immutable, so each query is a pure function of the
/// construction inputs.
pub trait HeatSink: Send + Sync {
    /// Which fin profile this is.
    fn profile(&self) -> FinProfileKind;

    fn geometry(&self) -> &StraightFinGeometry;

    fn coefficients(&self) -> &ThermalCoefficients;

    /// Convective surface area of a single fin.
    fn fin_surface_area(&self) -> Area;

    /// Length `Lc` fed to the efficiency kernel as `m Lc`.
    fn corrected_length(&self) -> Length {
        let g = self.geometry();
        m(self.profile().corrected_length(g.fin_length().value, g.fin_thickness().value))
    }

    /// Fin efficiency as a function of `m Lc`.
    fn efficiency_kernel(&self, ml: Real) -> Real {
        self.profile().efficiency_kernel(ml)
    }

    fn fin_count(&self) -> u32 {
        self.geometry().fin_count()
    }

    fn perimeter(&self) -> Length {
        self.geometry().perimeter()
    }

    fn cross_section(&self) -> Area {
        self.geometry().cross_section()
    }

    /// Fin parameter `m = sqrt(h P / (k Ac))` in 1/m.
    fn fin_parameter_m(&self) -> Real {
        let c = self.coefficients();
        let hp = c.h().value * self.perimeter().value;
        let kac = c.k().value * self.cross_section().value;
        (hp / kac).sqrt()
    }

    /// Actual over ideal (isothermal) fin heat transfer, in (0, 1].
    fn fin_efficiency(&self) -> Real {
        let ml = self.fin_parameter_m() * self.corrected_length().value;
        self.efficiency_kernel(ml)
    }

    /// Heat through one fin over heat through its bare footprint.
    fn fin_effectiveness(&self) -> Real {
        self.fin_efficiency() * self.fin_surface_area().value / self.cross_section().value
    }

    fn total_fin_area(&self) -> Area {
        m2(self.fin_count() as f64 * self.fin_surface_area().value)
    }

    /// Heat through the finned base over heat through the same base unfinned.
    fn overall_fin_effectiveness(&self) -> Real {
        let g = self.geometry();
        let finned =
            g.exposed_base_area().value + self.fin_efficiency() * self.total_fin_area().value;
        finned / g.base_area().value
    }

    /// Heat rate with [`DeltaTPolicy::Reject`].
    fn hx(
        &self,
        temp_base: Temperature,
        temp_env: Temperature,
        mode: ResultMode,
    ) -> SinkResult<HeatRate> {
        self.hx_with_policy(temp_base, temp_env, mode, DeltaTPolicy::Reject)
    }

    fn hx_with_policy(
        &self,
        temp_base: Temperature,
        temp_env: Temperature,
        mode: ResultMode,
        policy: DeltaTPolicy,
    ) -> SinkResult<HeatRate> {
        let breakdown = self.heat_rate_breakdown(temp_base, temp_env, policy)?;
        Ok(match mode {
            ResultMode::Total => HeatRate::Total(w(breakdown.total_w)),
            ResultMode::Breakdown => HeatRate::Breakdown(breakdown),
        })
    }

    /// Per-fin, fin-array, exposed-base and total heat rates.
    fn heat_rate_breakdown(
        &self,
        temp_base: Temperature,
        temp_env: Temperature,
        policy: DeltaTPolicy,
    ) -> SinkResult<HeatRateBreakdown> {
        let base_k = temp_base.value;
        let env_k = temp_env.value;
        if !base_k.is_finite() || !env_k.is_finite() {
            return Err(SinkError::InvalidTemperature { base_k, env_k });
        }
        if policy == DeltaTPolicy::Reject && base_k <= env_k {
            return Err(SinkError::InvalidTemperature { base_k, env_k });
        }

        let dt = base_k - env_k;
        let h = self.coefficients().h().value;
        let eta = self.fin_efficiency();
        if eta < LOW_EFFICIENCY {
            warn!(
                profile = self.profile().name(),
                efficiency = eta,
                threshold = LOW_EFFICIENCY,
                "low fin efficiency; most of the fin length adds little heat"
            );
        }

        let per_fin_w = eta * h * self.fin_surface_area().value * dt;
        let fins_w = self.fin_count() as f64 * per_fin_w;
        let base_w = h * self.geometry().exposed_base_area().value * dt;
        Ok(HeatRateBreakdown {
            delta_t_k: dt,
            per_fin_w,
            fins_w,
            base_w,
            total_w: fins_w + base_w,
        })
    }

    fn report(&self) -> HeatSinkReport {
        let g = self.geometry();
        let c = self.coefficients();
        HeatSinkReport {
            profile: self.profile().name(),
            contour: self.profile().contour(),
            fin_count: self.fin_count(),
            conductivity_w_mk: c.k().value,
            h_w_m2k: c.h().value,
            fin_parameter_per_m: self.fin_parameter_m(),
            corrected_length_m: self.corrected_length().value,
            perimeter_m: self.perimeter().value,
            cross_section_m2: self.cross_section().value,
            fin_area_m2: self.fin_surface_area().value,
            total_fin_area_m2: self.total_fin_area().value,
            base_area_m2: g.base_area().value,
            exposed_base_area_m2: g.exposed_base_area().value,
            fin_gap_m: g.fin_gap().map(|gap| gap.value),
            efficiency: self.fin_efficiency(),
            effectiveness: self.fin_effectiveness(),
            overall_effectiveness: self.overall_fin_effectiveness(),
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::straight::StraightHeatSink;
    use hx_core::units::k;
    use hx_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn profile() -> impl Strategy<Value = FinProfileKind> {
        prop::sample::select(FinProfileKind::ALL.to_vec())
    }

    fn sink(
        kind: FinProfileKind,
        length: f64,
        thickness: f64,
        k_fin: f64,
        h: f64,
    ) -> StraightHeatSink {
        let geometry = StraightFinGeometry::from_si(4, length, 0.05, thickness, 8.0 * thickness)
            .unwrap();
        let coefficients = ThermalCoefficients::from_si(k_fin, h).unwrap();
        StraightHeatSink::new(kind, geometry, coefficients)
    }

    proptest! {
        #[test]
        fn efficiency_in_unit_interval(
            kind in profile(),
            length in 1e-4_f64..0.5,
            thickness in 1e-4_f64..0.01,
            k_fin in 1.0_f64..500.0,
            h in 1e-3_f64..1000.0,
        ) {
            let eta = sink(kind, length, thickness, k_fin, h).fin_efficiency();
            prop_assert!(eta > 0.0 && eta <= 1.0, "{kind}: eta = {eta}");
        }

        #[test]
        fn efficiency_decreases_with_length(
            kind in profile(),
            length in 1e-3_f64..0.2,
            stretch in 1.01_f64..3.0,
            h in 1.0_f64..300.0,
        ) {
            let short = sink(kind, length, 0.002, 177.0, h).fin_efficiency();
            let long = sink(kind, length * stretch, 0.002, 177.0, h).fin_efficiency();
            prop_assert!(long < short, "{kind}: {long} !< {short}");
        }

        #[test]
        fn effectiveness_independent_of_temperatures(
            kind in profile(),
            t_env in 250.0_f64..350.0,
            dt1 in 0.1_f64..200.0,
            dt2 in 0.1_f64..200.0,
        ) {
            let s = sink(kind, 0.03, 0.002, 200.0, 35.0);
            let eps = s.fin_effectiveness();

            for dt in [dt1, dt2] {
                let b = s
                    .heat_rate_breakdown(k(t_env + dt), k(t_env), DeltaTPolicy::Reject)
                    .unwrap();
                let bare = s.coefficients().h().value * s.cross_section().value * b.delta_t_k;
                let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
                prop_assert!(nearly_equal(b.per_fin_w / bare, eps, tol));
            }
            prop_assert_eq!(s.fin_effectiveness(), eps);
        }

        #[test]
        fn overall_effectiveness_matches_heat_rates(
            kind in profile(),
            dt in 1.0_f64..100.0,
        ) {
            let s = sink(kind, 0.04, 0.001, 150.0, 12.0);
            let b = s.heat_rate_breakdown(k(300.0 + dt), k(300.0), DeltaTPolicy::Reject).unwrap();
            let bare = s.coefficients().h().value * s.geometry().base_area().value * b.delta_t_k;
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(b.total_w / bare, s.overall_fin_effectiveness(), tol));
        }
    }
}
