use std::str::FromStr;

use super::compliance_controls_domain_error::ComplianceControlsDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ControlType {
    Boolean,
    Number,
    String,
}

impl ControlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
        }
    }
}

impl FromStr for ControlType {
    type Err = ComplianceControlsDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "boolean" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            other => Err(ComplianceControlsDomainError::InvalidManifest(format!(
                "unknown control type '{other}'"
            ))),
        }
    }
}
