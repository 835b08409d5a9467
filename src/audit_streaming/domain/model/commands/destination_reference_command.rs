use crate::audit_streaming::domain::model::value_objects::{
    audit_actor::AuditActor, destination_id::DestinationId,
};

/// Targets a destination as a whole: deleting it or dropping its namespace filter.
#[derive(Clone, Debug)]
pub struct DestinationReferenceCommand {
    destination_id: DestinationId,
    actor: AuditActor,
}

impl DestinationReferenceCommand {
    pub fn new(destination_id: DestinationId, actor: AuditActor) -> Self {
        Self {
            destination_id,
            actor,
        }
    }

    pub fn destination_id(&self) -> DestinationId {
        self.destination_id
    }
    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }
}
