//! Design file schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// A heat-sink design file: shared boundary conditions, the sinks to evaluate
/// under them, and an optional fin length study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Design {
    pub version: u32,
    #[serde(default)]
    pub name: String,
    /// Custom material table, relative to the design file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials_path: Option<PathBuf>,
    pub conditions: ConditionsDef,
    #[serde(default)]
    pub sinks: Vec<SinkDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor: Option<AdvisorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionsDef {
    pub base_temperature_k: f64,
    pub ambient_temperature_k: f64,
    /// Report a signed heat rate instead of failing when base <= ambient.
    #[serde(default)]
    pub allow_reverse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SinkDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// `rectangular`, `triangular` or `parabolic`.
    pub profile: String,
    pub material: String,
    /// Temperature for the conductivity lookup; defaults to the base temperature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material_temperature_k: Option<f64>,
    pub h_w_m2k: f64,
    pub fin_count: u32,
    pub fin_length_m: f64,
    pub fin_width_m: f64,
    pub fin_thickness_m: f64,
    pub base_height_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdvisorDef {
    pub material: String,
    pub temperature_k: f64,
    pub profile: String,
    pub fin_thickness_m: f64,
    pub h_values: Vec<f64>,
    #[serde(default)]
    pub verbose: bool,
}
