use crate::compliance_controls::domain::model::{
    enums::{control_operator::ControlOperator, control_type::ControlType},
    value_objects::{
        control_expression::ControlExpression, control_id::ControlId, control_value::ControlValue,
    },
};

/// One predefined compliance control.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDefinition {
    id: ControlId,
    name: String,
    control_type: ControlType,
    field_id: Option<ControlId>,
    operator: ControlOperator,
    compliant_value: ControlValue,
    enum_value: u32,
}

impl ControlDefinition {
    pub fn new(
        id: ControlId,
        name: String,
        control_type: ControlType,
        field_id: Option<ControlId>,
        operator: ControlOperator,
        compliant_value: ControlValue,
        enum_value: u32,
    ) -> Self {
        Self {
            id,
            name,
            control_type,
            field_id,
            operator,
            compliant_value,
            enum_value,
        }
    }

    /// Field the expression reads; the control id when no field is declared.
    pub fn field(&self) -> &str {
        self.field_id
            .as_ref()
            .map(ControlId::value)
            .unwrap_or_else(|| self.id.value())
    }

    pub fn expression(&self) -> ControlExpression {
        ControlExpression {
            field: self.field().to_string(),
            operator: self.operator,
            value: self.compliant_value.clone(),
        }
    }

    pub fn id(&self) -> &ControlId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn control_type(&self) -> ControlType {
        self.control_type
    }
    pub fn field_id(&self) -> Option<&ControlId> {
        self.field_id.as_ref()
    }
    pub fn operator(&self) -> ControlOperator {
        self.operator
    }
    pub fn compliant_value(&self) -> &ControlValue {
        &self.compliant_value
    }
    pub fn enum_value(&self) -> u32 {
        self.enum_value
    }
}
