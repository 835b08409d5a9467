use serde_json::Value;

use crate::compliance_controls::domain::model::{
    enums::compliance_controls_domain_error::ComplianceControlsDomainError,
    value_objects::control_id::ControlId,
};

#[derive(Clone, Debug)]
pub struct ValidateExpressionQuery {
    control_id: ControlId,
    expression: Value,
}

impl ValidateExpressionQuery {
    pub fn new(control_id: String, expression: Value) -> Result<Self, ComplianceControlsDomainError> {
        let control_id = ControlId::new(control_id.clone())
            .map_err(|_| ComplianceControlsDomainError::ControlNotFound(control_id))?;
        if !expression.is_object() {
            return Err(ComplianceControlsDomainError::ExpressionMismatch);
        }
        Ok(Self {
            control_id,
            expression,
        })
    }

    pub fn control_id(&self) -> &ControlId {
        &self.control_id
    }
    pub fn expression(&self) -> &Value {
        &self.expression
    }
}
