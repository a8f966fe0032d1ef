//! Material lookup errors.

use hx_core::HxError;
use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur while loading or querying a material table.
#[derive(Error, Debug)]
pub enum MaterialError {
    /// Material name (or alias) is not in the table.
    #[error("Unknown material '{name}'; known materials: {}", .known.join(", "))]
    UnknownMaterial { name: String, known: Vec<String> },

    /// Query temperature outside the tabulated range; no extrapolation.
    #[error("Temperature {temperature_k} K out of range for '{material}' ({min_k} K to {max_k} K)")]
    TemperatureOutOfRange {
        material: String,
        temperature_k: f64,
        min_k: f64,
        max_k: f64,
    },

    /// Tabulated data violates a table invariant.
    #[error("Invalid table data for '{material}': {what}")]
    InvalidTable { material: String, what: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MaterialError> for HxError {
    fn from(err: MaterialError) -> Self {
        match err {
            MaterialError::UnknownMaterial { .. }
            | MaterialError::TemperatureOutOfRange { .. } => HxError::InvalidArg {
                what: err.to_string(),
            },
            other => HxError::Invariant {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reports_bounds() {
        let err = MaterialError::TemperatureOutOfRange {
            material: "Gold".into(),
            temperature_k: 1300.0,
            min_k: 100.0,
            max_k: 1200.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Gold"));
        assert!(msg.contains("100 K"));
        assert!(msg.contains("1200 K"));
    }

    #[test]
    fn error_to_hx_error() {
        let err = MaterialError::UnknownMaterial {
            name: "Unobtainium".into(),
            known: vec!["Gold".into(), "Silver".into()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown material 'Unobtainium'; known materials: Gold, Silver"
        );
        let hx: HxError = err.into();
        assert!(matches!(hx, HxError::InvalidArg { .. }));

        let err = MaterialError::InvalidTable {
            material: "Gold".into(),
            what: "needs 2 samples".into(),
        };
        let hx: HxError = err.into();
        assert!(matches!(hx, HxError::Invariant { .. }));
    }
}
