use serde::Deserialize;
use serde_json::Value;

use crate::compliance_controls::domain::model::{
    enums::{
        compliance_controls_domain_error::ComplianceControlsDomainError,
        control_operator::ControlOperator,
    },
    value_objects::control_value::ControlValue,
};

#[derive(Deserialize)]
struct RawExpression {
    field: String,
    operator: String,
    value: Value,
}

/// `{ "field": ..., "operator": ..., "value": ... }` as stored on a requirement control.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlExpression {
    pub field: String,
    pub operator: ControlOperator,
    pub value: ControlValue,
}

impl ControlExpression {
    pub fn from_json(value: &Value) -> Result<Self, ComplianceControlsDomainError> {
        let raw: RawExpression = serde_json::from_value(value.clone())
            .map_err(|_| ComplianceControlsDomainError::ExpressionMismatch)?;

        Ok(Self {
            field: raw.field,
            operator: raw
                .operator
                .parse()
                .map_err(|_| ComplianceControlsDomainError::ExpressionMismatch)?,
            value: ControlValue::from_json(&raw.value)
                .ok_or(ComplianceControlsDomainError::ExpressionMismatch)?,
        })
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "field": self.field,
            "operator": self.operator.as_str(),
            "value": self.value.to_json(),
        })
    }
}
