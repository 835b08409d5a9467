use serde::Deserialize;
use serde_json::Value;

use crate::compliance_controls::domain::model::{
    entities::control_definition::ControlDefinition,
    enums::{control_operator::ControlOperator, control_type::ControlType},
    value_objects::{control_id::ControlId, control_value::ControlValue},
};

/// Shape of the YAML control manifest.
#[derive(Debug, Deserialize)]
pub struct ControlManifest {
    pub controls: Vec<ControlManifestEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ControlManifestEntry {
    pub id: String,
    pub name: String,
    pub control_type: String,
    #[serde(default)]
    pub field_id: Option<String>,
    pub operator: String,
    pub compliant_value: Value,
    pub enum_value: u32,
}

impl ControlManifest {
    /// Converts every entry, collecting one message per malformed entry.
    pub fn into_definitions(self) -> (Vec<ControlDefinition>, Vec<String>) {
        let mut definitions = Vec::with_capacity(self.controls.len());
        let mut errors = Vec::new();

        for entry in self.controls {
            match entry.into_definition() {
                Ok(definition) => definitions.push(definition),
                Err(message) => errors.push(message),
            }
        }

        (definitions, errors)
    }
}

impl ControlManifestEntry {
    fn into_definition(self) -> Result<ControlDefinition, String> {
        let label = format!("Control '{}'", self.name);

        let id = ControlId::new(self.id.clone())
            .map_err(|_| format!("{label} has an invalid id '{}'", self.id))?;
        let control_type: ControlType = self
            .control_type
            .parse()
            .map_err(|_| format!("{label} has an unknown type '{}'", self.control_type))?;
        let operator: ControlOperator = self
            .operator
            .parse()
            .map_err(|_| format!("{label} has an unknown operator '{}'", self.operator))?;
        let compliant_value = ControlValue::from_json(&self.compliant_value)
            .filter(|value| value.control_type() == control_type)
            .ok_or_else(|| {
                format!(
                    "{label} has a compliant value that is not a {}",
                    control_type.as_str()
                )
            })?;
        let field_id = match self.field_id {
            Some(field_id) => Some(
                ControlId::new(field_id.clone())
                    .map_err(|_| format!("{label} has an invalid field id '{field_id}'"))?,
            ),
            None => None,
        };

        Ok(ControlDefinition::new(
            id,
            self.name,
            control_type,
            field_id,
            operator,
            compliant_value,
            self.enum_value,
        ))
    }
}
