use crate::audit_streaming::domain::model::{
    entities::streaming_header::StreamingHeader,
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
    value_objects::{audit_actor::AuditActor, destination_id::DestinationId},
};

#[derive(Clone, Debug)]
pub struct AddStreamingHeaderCommand {
    destination_id: DestinationId,
    header: StreamingHeader,
    actor: AuditActor,
}

impl AddStreamingHeaderCommand {
    pub fn new(
        destination_id: DestinationId,
        key: String,
        value: String,
        active: bool,
        actor: AuditActor,
    ) -> Result<Self, AuditStreamingDomainError> {
        Ok(Self {
            destination_id,
            header: StreamingHeader::new(key, value, active)?,
            actor,
        })
    }

    pub fn destination_id(&self) -> DestinationId {
        self.destination_id
    }
    pub fn header(&self) -> &StreamingHeader {
        &self.header
    }
    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }
}
