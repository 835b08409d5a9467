use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

/// User performing a recorded change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuditActor {
    id: i64,
    name: String,
}

impl AuditActor {
    pub fn new(id: i64, name: String) -> Result<Self, AuditStreamingDomainError> {
        let trimmed = name.trim();
        if id <= 0 || trimmed.is_empty() {
            return Err(AuditStreamingDomainError::InvalidAuditEvent(
                "author is invalid".to_string(),
            ));
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}
