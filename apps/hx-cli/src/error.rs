//! Error type for the command-line front end.

use hx_materials::MaterialError;
use hx_project::ProjectError;
use hx_sink::SinkError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Design error: {0}")]
    Project(#[from] ProjectError),

    #[error("Heat sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("Material error: {0}")]
    Material(#[from] MaterialError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
