//! Conductivity and convection coefficient pair.

use crate::common::check_coefficient;
use crate::error::SinkResult;
use hx_core::units::{Conductivity, HeatTransferCoeff, Temperature, w_per_m2k, w_per_mk};
use hx_materials::MaterialPropertyTable;

/// Fin conductivity `k` and surface convection coefficient `h`.
///
/// Both are validated finite and positive on construction and never change
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalCoefficients {
    k: Conductivity,
    h: HeatTransferCoeff,
}

impl ThermalCoefficients {
    pub fn new(k: Conductivity, h: HeatTransferCoeff) -> SinkResult<Self> {
        check_coefficient(k.value, "k")?;
        check_coefficient(h.value, "h")?;
        Ok(Self { k, h })
    }

    /// Plain SI values: `k` in W/(m·K), `h` in W/(m²·K).
    pub fn from_si(k: f64, h: f64) -> SinkResult<Self> {
        Self::new(w_per_mk(k), w_per_m2k(h))
    }

    /// Resolves `k` for `material` at `temperature` and pairs it with `h`.
    pub fn from_material(
        table: &MaterialPropertyTable,
        material: &str,
        temperature: Temperature,
        h: HeatTransferCoeff,
    ) -> SinkResult<Self> {
        let k = table.resolve(material, temperature)?;
        Self::new(k, h)
    }

    pub fn k(&self) -> Conductivity {
        self.k
    }

    pub fn h(&self) -> HeatTransferCoeff {
        self.h
    }
}
