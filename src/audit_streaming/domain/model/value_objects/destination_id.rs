use uuid::Uuid;

use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DestinationId(Uuid);

impl DestinationId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn parse(value: &str) -> Result<Self, AuditStreamingDomainError> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| AuditStreamingDomainError::DestinationNotFound)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}
