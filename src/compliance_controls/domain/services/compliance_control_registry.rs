use std::collections::{BTreeMap, HashMap};

use serde_json::{Value, json};

use crate::compliance_controls::domain::model::{
    entities::control_definition::ControlDefinition,
    enums::{
        compliance_controls_domain_error::ComplianceControlsDomainError,
        compliance_status::ComplianceStatus, control_type::ControlType,
    },
    value_objects::{
        control_expression::ControlExpression, control_id::ControlId,
        control_manifest::ControlManifest, control_value::ControlValue,
    },
};

/// Controls handled outside the manifest, with their reserved enum values.
pub const SPECIAL_CONTROLS: [(&str, u32); 1] = [("external_control", 10000)];

/// Immutable, validated set of predefined compliance controls.
#[derive(Clone, Debug)]
pub struct ComplianceControlRegistry {
    controls: BTreeMap<ControlId, ControlDefinition>,
}

impl ComplianceControlRegistry {
    pub fn load(manifest_yaml: &str) -> Result<Self, ComplianceControlsDomainError> {
        let manifest: ControlManifest = serde_yaml::from_str(manifest_yaml)
            .map_err(|e| ComplianceControlsDomainError::InvalidManifest(e.to_string()))?;

        let (definitions, mut errors) = manifest.into_definitions();
        errors.extend(validate_registry(&definitions));

        if !errors.is_empty() {
            return Err(ComplianceControlsDomainError::InvalidRegistry(errors));
        }

        Ok(Self::collect(definitions))
    }

    pub fn from_definitions(
        definitions: Vec<ControlDefinition>,
    ) -> Result<Self, ComplianceControlsDomainError> {
        let violations = validate_registry(&definitions);
        if !violations.is_empty() {
            return Err(ComplianceControlsDomainError::InvalidRegistry(violations));
        }
        Ok(Self::collect(definitions))
    }

    fn collect(definitions: Vec<ControlDefinition>) -> Self {
        let controls = definitions
            .into_iter()
            .map(|definition| (definition.id().clone(), definition))
            .collect();
        Self { controls }
    }

    pub fn controls(&self) -> &BTreeMap<ControlId, ControlDefinition> {
        &self.controls
    }

    pub fn find(&self, control_id: &str) -> Result<&ControlDefinition, ComplianceControlsDomainError> {
        ControlId::new(control_id.to_string())
            .ok()
            .and_then(|id| self.controls.get(&id))
            .ok_or_else(|| ComplianceControlsDomainError::ControlNotFound(control_id.to_string()))
    }

    pub fn enum_definitions(&self) -> BTreeMap<String, u32> {
        let mut definitions: BTreeMap<String, u32> = self
            .controls
            .values()
            .map(|control| (control.id().value().to_string(), control.enum_value()))
            .collect();

        for (name, value) in SPECIAL_CONTROLS {
            definitions.insert(name.to_string(), value);
        }

        definitions
    }

    pub fn field_mappings(&self) -> BTreeMap<String, ControlType> {
        self.controls
            .values()
            .filter_map(|control| {
                control
                    .field_id()
                    .map(|field| (field.value().to_string(), control.control_type()))
            })
            .collect()
    }

    pub fn expression_schema(&self) -> Value {
        let variants: Vec<Value> = self
            .controls
            .values()
            .map(|control| {
                let expression = control.expression();
                json!({
                    "type": "object",
                    "title": control.name(),
                    "properties": {
                        "field": { "const": expression.field },
                        "operator": { "const": expression.operator.as_str() },
                        "value": {
                            "type": control.control_type().as_str(),
                            "const": expression.value.to_json(),
                        },
                    },
                    "required": ["field", "operator", "value"],
                    "additionalProperties": false,
                })
            })
            .collect();

        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "oneOf": variants,
        })
    }

    pub fn validate_expression(
        &self,
        control_id: &str,
        expression: &Value,
    ) -> Result<(), ComplianceControlsDomainError> {
        let control = self.find(control_id)?;
        let submitted = ControlExpression::from_json(expression)?;

        if submitted != control.expression() {
            return Err(ComplianceControlsDomainError::ExpressionMismatch);
        }
        Ok(())
    }

    pub fn evaluate(
        &self,
        control_id: &str,
        observed: &ControlValue,
    ) -> Result<ComplianceStatus, ComplianceControlsDomainError> {
        let control = self.find(control_id)?;

        if observed.control_type() != control.control_type() {
            return Err(ComplianceControlsDomainError::ValueTypeMismatch {
                control_id: control.id().value().to_string(),
                expected: control.control_type().as_str(),
            });
        }

        let passes = observed
            .compare(control.compliant_value())
            .is_some_and(|ordering| control.operator().holds(ordering));

        Ok(if passes {
            ComplianceStatus::Pass
        } else {
            ComplianceStatus::Fail
        })
    }
}

/// Returns every violation found in `definitions`, in manifest order.
pub fn validate_registry(definitions: &[ControlDefinition]) -> Vec<String> {
    let mut violations = Vec::new();
    let mut ids: HashMap<&str, &str> = HashMap::new();
    let mut enum_values: HashMap<u32, &str> = HashMap::new();
    let mut fields: HashMap<&str, (ControlType, &str)> = HashMap::new();

    for control in definitions {
        let name = control.name();

        if let Some(first) = ids.insert(control.id().value(), name) {
            violations.push(format!(
                "Duplicate id '{}' used by controls '{first}' and '{name}'",
                control.id().value()
            ));
        }

        if let Some((special, _)) = SPECIAL_CONTROLS
            .iter()
            .find(|(_, reserved)| *reserved == control.enum_value())
        {
            violations.push(format!(
                "Enum value {} of control '{name}' is reserved by special control '{special}'",
                control.enum_value()
            ));
        } else if let Some(first) = enum_values.insert(control.enum_value(), name) {
            violations.push(format!(
                "Duplicate enum value {} used by controls '{first}' and '{name}'",
                control.enum_value()
            ));
        }

        match fields.get(control.field()) {
            Some((declared, first)) if *declared != control.control_type() => {
                violations.push(format!(
                    "Field '{}' is declared as {} by control '{first}' and as {} by control '{name}'",
                    control.field(),
                    declared.as_str(),
                    control.control_type().as_str()
                ));
            }
            Some(_) => {}
            None => {
                fields.insert(control.field(), (control.control_type(), name));
            }
        }
    }

    violations
}
