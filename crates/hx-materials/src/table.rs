//! Tabulated conductivity curves and the interpolating resolver.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use hx_core::units::{Conductivity, Temperature, w_per_mk};
use hx_core::{Real, lerp};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MaterialError, MaterialResult};

const BUILTIN_YAML: &str = include_str!("../data/materials.yaml");

static BUILTIN: OnceLock<MaterialPropertyTable> = OnceLock::new();

/// One tabulated row: `(material, T, k)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub material: String,
    pub temperature_k: Real,
    pub conductivity_w_mk: Real,
}

impl MaterialEntry {
    pub fn new(material: impl Into<String>, temperature_k: Real, conductivity_w_mk: Real) -> Self {
        Self {
            material: material.into(),
            temperature_k,
            conductivity_w_mk,
        }
    }
}

/// A single `(T [K], k [W/(m·K)])` sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub temperature_k: Real,
    pub conductivity_w_mk: Real,
}

/// Ordered samples for one material.
#[derive(Clone, Debug, Serialize)]
pub struct MaterialCurve {
    name: String,
    aliases: Vec<String>,
    samples: Vec<Sample>,
}

impl MaterialCurve {
    /// Builds a curve, sorting samples by temperature and checking the table invariants.
    pub fn new(
        name: impl Into<String>,
        aliases: Vec<String>,
        mut samples: Vec<Sample>,
    ) -> MaterialResult<Self> {
        let name = name.into();
        let invalid = |what: String| MaterialError::InvalidTable {
            material: name.clone(),
            what,
        };

        if name.trim().is_empty() {
            return Err(invalid("material name is empty".into()));
        }
        if samples.len() < 2 {
            return Err(invalid(format!(
                "needs at least 2 samples for interpolation, got {}",
                samples.len()
            )));
        }
        for s in &samples {
            if !s.temperature_k.is_finite() || s.temperature_k <= 0.0 {
                return Err(invalid(format!(
                    "temperature {} K must be finite and > 0",
                    s.temperature_k
                )));
            }
            if !s.conductivity_w_mk.is_finite() || s.conductivity_w_mk <= 0.0 {
                return Err(invalid(format!(
                    "conductivity {} W/(m·K) at {} K must be finite and > 0",
                    s.conductivity_w_mk, s.temperature_k
                )));
            }
        }

        samples.sort_by(|a, b| a.temperature_k.total_cmp(&b.temperature_k));
        if let Some(pair) = samples
            .windows(2)
            .find(|pair| pair[0].temperature_k >= pair[1].temperature_k)
        {
            return Err(invalid(format!(
                "duplicate temperature sample at {} K",
                pair[1].temperature_k
            )));
        }

        Ok(Self {
            name,
            aliases,
            samples,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Inclusive `(min, max)` tabulated temperature in K.
    pub fn bounds(&self) -> (Real, Real) {
        // samples.len() >= 2 is enforced by `new`
        let first = self.samples[0].temperature_k;
        let last = self.samples[self.samples.len() - 1].temperature_k;
        (first, last)
    }

    /// Linear interpolation between the bracketing samples. No extrapolation.
    pub fn conductivity_at(&self, temperature_k: Real) -> MaterialResult<Real> {
        let (min_k, max_k) = self.bounds();
        if !temperature_k.is_finite() || temperature_k < min_k || temperature_k > max_k {
            return Err(MaterialError::TemperatureOutOfRange {
                material: self.name.clone(),
                temperature_k,
                min_k,
                max_k,
            });
        }

        // first sample with T >= query
        let idx = self
            .samples
            .partition_point(|s| s.temperature_k < temperature_k);
        let hi = self.samples[idx];
        if hi.temperature_k == temperature_k {
            return Ok(hi.conductivity_w_mk);
        }
        let lo = self.samples[idx - 1];
        Ok(lerp(
            lo.temperature_k,
            lo.conductivity_w_mk,
            hi.temperature_k,
            hi.conductivity_w_mk,
            temperature_k,
        ))
    }

    fn summary(&self) -> MaterialSummary {
        let (min_k, max_k) = self.bounds();
        MaterialSummary {
            name: self.name.clone(),
            aliases: self.aliases.clone(),
            min_k,
            max_k,
            sample_count: self.samples.len(),
        }
    }
}

/// Listing row for one material.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialSummary {
    pub name: String,
    pub aliases: Vec<String>,
    pub min_k: Real,
    pub max_k: Real,
    pub sample_count: usize,
}

#[derive(Debug, Deserialize)]
struct MaterialsDocument {
    materials: Vec<MaterialSpec>,
}

#[derive(Debug, Deserialize)]
struct MaterialSpec {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    samples: Vec<[Real; 2]>,
}

/// Immutable collection of material conductivity curves.
///
/// Name lookup is case-insensitive and accepts aliases. The table is never
/// mutated after construction and can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct MaterialPropertyTable {
    curves: Vec<MaterialCurve>,
    index: HashMap<String, usize>,
}

impl MaterialPropertyTable {
    /// Reference dataset shipped with the crate, parsed on first use.
    pub fn builtin() -> &'static MaterialPropertyTable {
        BUILTIN.get_or_init(|| {
            Self::from_yaml_str(BUILTIN_YAML).expect("embedded material dataset must be valid")
        })
    }

    pub fn from_curves(curves: Vec<MaterialCurve>) -> MaterialResult<Self> {
        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, curve) in curves.iter().enumerate() {
            let keys = std::iter::once(curve.name.as_str())
                .chain(curve.aliases.iter().map(String::as_str));
            for key in keys {
                let key = normalize(key);
                if let Some(&prev) = index.get(&key) {
                    if prev != i {
                        return Err(MaterialError::InvalidTable {
                            material: curve.name.clone(),
                            what: format!(
                                "name or alias '{key}' already used by '{}'",
                                curves[prev].name
                            ),
                        });
                    }
                    continue;
                }
                index.insert(key, i);
            }
        }
        Ok(Self { curves, index })
    }

    /// Groups flat rows by material name, keeping first-appearance order.
    pub fn from_entries(entries: impl IntoIterator<Item = MaterialEntry>) -> MaterialResult<Self> {
        let mut order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, Vec<Sample>> = HashMap::new();
        for entry in entries {
            let samples = grouped.entry(entry.material.clone()).or_insert_with(|| {
                order.push(entry.material.clone());
                Vec::new()
            });
            samples.push(Sample {
                temperature_k: entry.temperature_k,
                conductivity_w_mk: entry.conductivity_w_mk,
            });
        }

        let curves = order
            .into_iter()
            .map(|name| {
                let samples = grouped.remove(&name).unwrap_or_default();
                MaterialCurve::new(name, Vec::new(), samples)
            })
            .collect::<MaterialResult<Vec<_>>>()?;
        Self::from_curves(curves)
    }

    pub fn from_yaml_str(src: &str) -> MaterialResult<Self> {
        let doc: MaterialsDocument = serde_yaml::from_str(src)?;
        let curves = doc
            .materials
            .into_iter()
            .map(|spec| {
                let samples = spec
                    .samples
                    .into_iter()
                    .map(|[temperature_k, conductivity_w_mk]| Sample {
                        temperature_k,
                        conductivity_w_mk,
                    })
                    .collect();
                MaterialCurve::new(spec.name, spec.aliases, samples)
            })
            .collect::<MaterialResult<Vec<_>>>()?;
        Self::from_curves(curves)
    }

    pub fn load_yaml(path: &Path) -> MaterialResult<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&src)
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Canonical names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.name.as_str())
    }

    pub fn summaries(&self) -> Vec<MaterialSummary> {
        self.curves.iter().map(MaterialCurve::summary).collect()
    }

    pub fn curve(&self, material: &str) -> MaterialResult<&MaterialCurve> {
        self.index
            .get(&normalize(material))
            .map(|&i| &self.curves[i])
            .ok_or_else(|| MaterialError::UnknownMaterial {
                name: material.to_string(),
                known: self.curves.iter().map(|c| c.name.clone()).collect(),
            })
    }

    pub fn bounds(&self, material: &str) -> MaterialResult<(Temperature, Temperature)> {
        let (lo, hi) = self.curve(material)?.bounds();
        Ok((hx_core::units::k(lo), hx_core::units::k(hi)))
    }

    /// Thermal conductivity of `material` at `temperature`.
    pub fn resolve(
        &self,
        material: &str,
        temperature: Temperature,
    ) -> MaterialResult<Conductivity> {
        self.resolve_k(material, temperature.value).map(w_per_mk)
    }

    /// Same as [`resolve`](Self::resolve) with the temperature in Kelvin and the
    /// result in W/(m·K).
    pub fn resolve_k(&self, material: &str, temperature_k: Real) -> MaterialResult<Real> {
        let curve = self.curve(material)?;
        let k = curve.conductivity_at(temperature_k)?;
        debug!(
            material = curve.name(),
            temperature_k,
            conductivity_w_mk = k,
            "resolved conductivity"
        );
        Ok(k)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interpolated_value_stays_within_bracket(frac in 0.0f64..=1.0) {
            let table = MaterialPropertyTable::builtin();
            for curve in &table.curves {
                for pair in curve.samples().windows(2) {
                    let (t0, t1) = (pair[0].temperature_k, pair[1].temperature_k);
                    let t = t0 + frac * (t1 - t0);
                    let v = curve.conductivity_at(t).unwrap();
                    let lo = pair[0].conductivity_w_mk.min(pair[1].conductivity_w_mk);
                    let hi = pair[0].conductivity_w_mk.max(pair[1].conductivity_w_mk);
                    prop_assert!(v >= lo - 1e-9 && v <= hi + 1e-9);
                }
            }
        }

        #[test]
        fn outside_bounds_always_fails(offset in 1e-6f64..500.0) {
            let table = MaterialPropertyTable::builtin();
            for curve in &table.curves {
                let (lo, hi) = curve.bounds();
                let below = curve.conductivity_at(lo - offset);
                let above = curve.conductivity_at(hi + offset);
                prop_assert!(
                    matches!(below, Err(MaterialError::TemperatureOutOfRange { .. })),
                    "{} accepted {} K",
                    curve.name(),
                    lo - offset
                );
                prop_assert!(
                    matches!(above, Err(MaterialError::TemperatureOutOfRange { .. })),
                    "{} accepted {} K",
                    curve.name(),
                    hi + offset
                );
            }
        }
    }
}
