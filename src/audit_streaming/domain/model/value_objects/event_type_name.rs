use lazy_static::lazy_static;
use regex::Regex;

use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

lazy_static! {
    static ref EVENT_TYPE_NAME_REGEX: Regex = Regex::new(r"^[a-z0-9_]+$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EventTypeName(String);

impl EventTypeName {
    pub fn new(value: String) -> Result<Self, AuditStreamingDomainError> {
        let trimmed = value.trim();
        if trimmed.len() > 255 || !EVENT_TYPE_NAME_REGEX.is_match(trimmed) {
            return Err(AuditStreamingDomainError::InvalidEventType);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
