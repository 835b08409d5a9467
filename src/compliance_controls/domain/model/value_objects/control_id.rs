use lazy_static::lazy_static;
use regex::Regex;

use crate::compliance_controls::domain::model::enums::compliance_controls_domain_error::ComplianceControlsDomainError;

lazy_static! {
    static ref CONTROL_ID_REGEX: Regex = Regex::new(r"^[a-z][a-z0-9_]{0,254}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(value: String) -> Result<Self, ComplianceControlsDomainError> {
        let trimmed = value.trim();
        if !CONTROL_ID_REGEX.is_match(trimmed) {
            return Err(ComplianceControlsDomainError::InvalidControlId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
