//! Design validation logic.

use crate::schema::{AdvisorDef, ConditionsDef, Design, LATEST_VERSION, SinkDef};
use hx_sink::{FinProfileKind, SinkError};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_design(design: &Design) -> Result<(), ValidationError> {
    if design.version == 0 || design.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: design.version,
        });
    }

    validate_conditions(&design.conditions)?;

    let mut ids = HashSet::new();
    for sink in &design.sinks {
        if !ids.insert(&sink.id) {
            return Err(ValidationError::DuplicateId {
                id: sink.id.clone(),
                context: "sinks".to_string(),
            });
        }
        validate_sink(sink)?;
    }

    if let Some(advisor) = &design.advisor {
        validate_advisor(advisor)?;
    }

    Ok(())
}

/// Parses a profile name, mapping unknown and pin profiles to validation errors.
pub fn parse_profile(field: &str, profile: &str) -> Result<FinProfileKind, ValidationError> {
    profile.parse().map_err(|e| match e {
        SinkError::NotSupported { what } => ValidationError::Unsupported {
            feature: field.to_string(),
            reason: what,
        },
        other => ValidationError::InvalidValue {
            field: field.to_string(),
            value: profile.to_string(),
            reason: other.to_string(),
        },
    })
}

fn validate_conditions(conditions: &ConditionsDef) -> Result<(), ValidationError> {
    positive("conditions.base_temperature_k", conditions.base_temperature_k)?;
    positive(
        "conditions.ambient_temperature_k",
        conditions.ambient_temperature_k,
    )?;
    if !conditions.allow_reverse
        && conditions.base_temperature_k <= conditions.ambient_temperature_k
    {
        return Err(ValidationError::InvalidValue {
            field: "conditions.base_temperature_k".to_string(),
            value: conditions.base_temperature_k.to_string(),
            reason: format!(
                "must exceed ambient {} K unless allow_reverse is set",
                conditions.ambient_temperature_k
            ),
        });
    }
    Ok(())
}

fn validate_sink(sink: &SinkDef) -> Result<(), ValidationError> {
    if sink.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "sinks.id".to_string(),
            value: sink.id.clone(),
            reason: "must not be empty".to_string(),
        });
    }
    let ctx = |field: &str| format!("sinks[{}].{field}", sink.id);

    parse_profile(&ctx("profile"), &sink.profile)?;
    non_empty(&ctx("material"), &sink.material)?;
    if let Some(t) = sink.material_temperature_k {
        positive(&ctx("material_temperature_k"), t)?;
    }
    positive(&ctx("h_w_m2k"), sink.h_w_m2k)?;
    if sink.fin_count == 0 {
        return Err(ValidationError::InvalidValue {
            field: ctx("fin_count"),
            value: "0".to_string(),
            reason: "must be >= 1".to_string(),
        });
    }
    positive(&ctx("fin_length_m"), sink.fin_length_m)?;
    positive(&ctx("fin_width_m"), sink.fin_width_m)?;
    positive(&ctx("fin_thickness_m"), sink.fin_thickness_m)?;
    positive(&ctx("base_height_m"), sink.base_height_m)?;

    let stacked = sink.fin_count as f64 * sink.fin_thickness_m;
    if stacked > sink.base_height_m * (1.0 + 1e-12) {
        return Err(ValidationError::InvalidValue {
            field: ctx("fin_count"),
            value: sink.fin_count.to_string(),
            reason: format!(
                "{stacked} m of fin thickness does not fit on a {} m base",
                sink.base_height_m
            ),
        });
    }
    Ok(())
}

fn validate_advisor(advisor: &AdvisorDef) -> Result<(), ValidationError> {
    parse_profile("advisor.profile", &advisor.profile)?;
    non_empty("advisor.material", &advisor.material)?;
    positive("advisor.temperature_k", advisor.temperature_k)?;
    positive("advisor.fin_thickness_m", advisor.fin_thickness_m)?;
    if advisor.h_values.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "advisor.h_values".to_string(),
            value: "[]".to_string(),
            reason: "needs at least one value".to_string(),
        });
    }
    for (i, &h) in advisor.h_values.iter().enumerate() {
        positive(&format!("advisor.h_values[{i}]"), h)?;
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite and > 0".to_string(),
        })
    }
}

fn non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must not be empty".to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sink(id: &str) -> SinkDef {
        SinkDef {
            id: id.to_string(),
            name: String::new(),
            profile: "rectangular".to_string(),
            material: "Aluminum 2024-T6".to_string(),
            material_temperature_k: None,
            h_w_m2k: 25.0,
            fin_count: 10,
            fin_length_m: 0.02,
            fin_width_m: 0.05,
            fin_thickness_m: 0.001,
            base_height_m: 0.05,
        }
    }

    fn design() -> Design {
        Design {
            version: LATEST_VERSION,
            name: "test".to_string(),
            materials_path: None,
            conditions: ConditionsDef {
                base_temperature_k: 350.0,
                ambient_temperature_k: 300.0,
                allow_reverse: false,
            },
            sinks: vec![sink("a"), sink("b")],
            advisor: None,
        }
    }

    #[test]
    fn valid_design_passes() {
        validate_design(&design()).unwrap();
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut d = design();
        d.sinks[1].id = "a".to_string();
        assert!(matches!(
            validate_design(&d),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn pin_profile_is_unsupported() {
        let mut d = design();
        d.sinks[0].profile = "pin rectangular".to_string();
        assert!(matches!(
            validate_design(&d),
            Err(ValidationError::Unsupported { .. })
        ));
    }

    #[test]
    fn overfull_base_rejected() {
        let mut d = design();
        d.sinks[0].fin_count = 51;
        let err = validate_design(&d).unwrap_err();
        assert!(err.to_string().contains("sinks[a].fin_count"));
    }

    #[test]
    fn reversed_temperatures_need_opt_in() {
        let mut d = design();
        d.conditions.base_temperature_k = 290.0;
        assert!(validate_design(&d).is_err());
        d.conditions.allow_reverse = true;
        validate_design(&d).unwrap();
    }

    #[test]
    fn advisor_checks() {
        let mut d = design();
        d.advisor = Some(AdvisorDef {
            material: "Copper".to_string(),
            temperature_k: 300.0,
            profile: "triangular".to_string(),
            fin_thickness_m: 0.002,
            h_values: vec![],
            verbose: false,
        });
        assert!(validate_design(&d).is_err());

        if let Some(advisor) = d.advisor.as_mut() {
            advisor.h_values = vec![10.0, -1.0];
        }
        let err = validate_design(&d).unwrap_err();
        assert!(err.to_string().contains("advisor.h_values[1]"));
    }

    #[test]
    fn version_checked() {
        let mut d = design();
        d.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_design(&d),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }
}
