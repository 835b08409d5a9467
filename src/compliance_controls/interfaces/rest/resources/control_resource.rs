use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::compliance_controls::domain::model::entities::control_definition::ControlDefinition;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ControlExpressionResource {
    pub field: String,
    pub operator: String,
    #[schema(value_type = Object)]
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ControlResource {
    pub id: String,
    pub name: String,
    pub control_type: String,
    pub field_id: Option<String>,
    pub enum_value: u32,
    pub expression: ControlExpressionResource,
}

impl From<&ControlDefinition> for ControlResource {
    fn from(control: &ControlDefinition) -> Self {
        let expression = control.expression();
        Self {
            id: control.id().value().to_string(),
            name: control.name().to_string(),
            control_type: control.control_type().as_str().to_string(),
            field_id: control.field_id().map(|field| field.value().to_string()),
            enum_value: control.enum_value(),
            expression: ControlExpressionResource {
                field: expression.field,
                operator: expression.operator.as_str().to_string(),
                value: expression.value.to_json(),
            },
        }
    }
}
