use uuid::Uuid;

use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

const MAXIMUM_NAME_LENGTH: usize = 72;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DestinationName(String);

impl DestinationName {
    pub fn new(value: String) -> Result<Self, AuditStreamingDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAXIMUM_NAME_LENGTH {
            return Err(AuditStreamingDomainError::InvalidDestinationName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn generate() -> Self {
        Self(format!("Destination_{}", Uuid::new_v4()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
