//! hx-project: heat-sink design files, validation and evaluation.

pub mod evaluate;
pub mod schema;
pub mod validate;

pub use evaluate::{
    BuiltSink, DesignEvaluation, SinkEvaluation, advisor_request, build_sink, build_sinks,
    evaluate, material_table,
};
pub use schema::*;
pub use validate::{ValidationError, validate_design};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Heat sink error: {0}")]
    Sink(#[from] hx_sink::SinkError),

    #[error("Material error: {0}")]
    Material(#[from] hx_materials::MaterialError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(src: &str) -> ProjectResult<Design> {
    let design: Design = serde_yaml::from_str(src)?;
    validate_design(&design)?;
    Ok(design)
}

pub fn load_yaml(path: &Path) -> ProjectResult<Design> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, design: &Design) -> ProjectResult<()> {
    validate_design(design)?;
    let content = serde_yaml::to_string(design)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Loads `path`, resolves its material table and evaluates it.
pub fn evaluate_file(path: &Path) -> ProjectResult<DesignEvaluation> {
    let design = load_yaml(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let table = material_table(&design, base_dir)?;
    evaluate(&design, &table)
}
