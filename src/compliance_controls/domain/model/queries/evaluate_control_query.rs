use serde_json::Value;

use crate::compliance_controls::domain::model::{
    enums::compliance_controls_domain_error::ComplianceControlsDomainError,
    value_objects::{control_id::ControlId, control_value::ControlValue},
};

#[derive(Clone, Debug)]
pub struct EvaluateControlQuery {
    control_id: ControlId,
    observed: ControlValue,
}

impl EvaluateControlQuery {
    pub fn new(control_id: String, observed: &Value) -> Result<Self, ComplianceControlsDomainError> {
        let control_id = ControlId::new(control_id.clone())
            .map_err(|_| ComplianceControlsDomainError::ControlNotFound(control_id))?;
        let observed = ControlValue::from_json(observed).ok_or_else(|| {
            ComplianceControlsDomainError::ValueTypeMismatch {
                control_id: control_id.value().to_string(),
                expected: "boolean, number or string",
            }
        })?;
        Ok(Self {
            control_id,
            observed,
        })
    }

    pub fn control_id(&self) -> &ControlId {
        &self.control_id
    }
    pub fn observed(&self) -> &ControlValue {
        &self.observed
    }
}
