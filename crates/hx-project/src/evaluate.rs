//! Builds heat sinks from a validated design and evaluates them.

use std::borrow::Cow;
use std::path::Path;

use crate::ProjectResult;
use crate::schema::{AdvisorDef, Design, SinkDef};
use crate::validate::parse_profile;
use hx_core::units::{k, m, w_per_m2k};
use hx_materials::MaterialPropertyTable;
use hx_sink::{
    DeltaTPolicy, HeatRateBreakdown, HeatSink, HeatSinkReport, LengthSuggestion,
    StraightFinGeometry, StraightHeatSink, SuggestionRequest, ThermalCoefficients,
    suggest_lengths,
};
use serde::Serialize;
use tracing::{debug, info};

/// One built sink with its design id.
#[derive(Debug, Clone)]
pub struct BuiltSink {
    pub id: String,
    pub name: String,
    pub sink: StraightHeatSink,
}

#[derive(Debug, Clone, Serialize)]
pub struct SinkEvaluation {
    pub id: String,
    pub name: String,
    pub material: String,
    pub report: HeatSinkReport,
    pub heat_rate: HeatRateBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignEvaluation {
    pub name: String,
    pub base_temperature_k: f64,
    pub ambient_temperature_k: f64,
    pub sinks: Vec<SinkEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor: Option<Vec<LengthSuggestion>>,
}

/// Material table for `design`: the custom table at `materials_path`
/// (resolved against `base_dir`) or the built-in one.
pub fn material_table(
    design: &Design,
    base_dir: &Path,
) -> ProjectResult<Cow<'static, MaterialPropertyTable>> {
    match &design.materials_path {
        Some(rel) => {
            let path = base_dir.join(rel);
            debug!(path = %path.display(), "loading custom material table");
            Ok(Cow::Owned(MaterialPropertyTable::load_yaml(&path)?))
        }
        None => Ok(Cow::Borrowed(MaterialPropertyTable::builtin())),
    }
}

pub fn build_sink(
    def: &SinkDef,
    default_temperature_k: f64,
    table: &MaterialPropertyTable,
) -> ProjectResult<BuiltSink> {
    let profile = parse_profile("profile", &def.profile)?;
    let material_t = def.material_temperature_k.unwrap_or(default_temperature_k);
    let coefficients = ThermalCoefficients::from_material(
        table,
        &def.material,
        k(material_t),
        w_per_m2k(def.h_w_m2k),
    )?;
    let geometry = StraightFinGeometry::new(
        def.fin_count,
        m(def.fin_length_m),
        m(def.fin_width_m),
        m(def.fin_thickness_m),
        m(def.base_height_m),
    )?;
    Ok(BuiltSink {
        id: def.id.clone(),
        name: def.name.clone(),
        sink: StraightHeatSink::new(profile, geometry, coefficients),
    })
}

pub fn build_sinks(
    design: &Design,
    table: &MaterialPropertyTable,
) -> ProjectResult<Vec<BuiltSink>> {
    design
        .sinks
        .iter()
        .map(|def| build_sink(def, design.conditions.base_temperature_k, table))
        .collect()
}

pub fn advisor_request(def: &AdvisorDef) -> ProjectResult<SuggestionRequest> {
    let profile = parse_profile("advisor.profile", &def.profile)?;
    Ok(SuggestionRequest::new(
        def.material.clone(),
        k(def.temperature_k),
        profile,
        m(def.fin_thickness_m),
        def.h_values.clone(),
    )
    .verbose(def.verbose))
}

/// Evaluates every sink under the design conditions and runs the advisor if present.
pub fn evaluate(design: &Design, table: &MaterialPropertyTable) -> ProjectResult<DesignEvaluation> {
    let conditions = &design.conditions;
    let policy = if conditions.allow_reverse {
        DeltaTPolicy::AllowReverse
    } else {
        DeltaTPolicy::Reject
    };
    let t_base = k(conditions.base_temperature_k);
    let t_env = k(conditions.ambient_temperature_k);

    let mut sinks = Vec::with_capacity(design.sinks.len());
    for (def, built) in design.sinks.iter().zip(build_sinks(design, table)?) {
        let heat_rate = built.sink.heat_rate_breakdown(t_base, t_env, policy)?;
        info!(id = %built.id, total_w = heat_rate.total_w, "evaluated heat sink");
        sinks.push(SinkEvaluation {
            id: built.id,
            name: built.name,
            material: def.material.clone(),
            report: built.sink.report(),
            heat_rate,
        });
    }

    let advisor = match &design.advisor {
        Some(def) => Some(suggest_lengths(table, &advisor_request(def)?)?),
        None => None,
    };

    Ok(DesignEvaluation {
        name: design.name.clone(),
        base_temperature_k: conditions.base_temperature_k,
        ambient_temperature_k: conditions.ambient_temperature_k,
        sinks,
        advisor,
    })
}
