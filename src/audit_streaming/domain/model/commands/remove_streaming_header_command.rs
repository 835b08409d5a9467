use crate::audit_streaming::domain::model::{
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
    value_objects::{audit_actor::AuditActor, destination_id::DestinationId},
};

#[derive(Clone, Debug)]
pub struct RemoveStreamingHeaderCommand {
    destination_id: DestinationId,
    key: String,
    actor: AuditActor,
}

impl RemoveStreamingHeaderCommand {
    pub fn new(
        destination_id: DestinationId,
        key: String,
        actor: AuditActor,
    ) -> Result<Self, AuditStreamingDomainError> {
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(AuditStreamingDomainError::HeaderNotFound);
        }
        Ok(Self {
            destination_id,
            key,
            actor,
        })
    }

    pub fn destination_id(&self) -> DestinationId {
        self.destination_id
    }
    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }
}
