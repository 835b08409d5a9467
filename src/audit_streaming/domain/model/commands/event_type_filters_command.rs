use crate::audit_streaming::domain::model::{
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
    value_objects::{
        audit_actor::AuditActor, destination_id::DestinationId, event_type_name::EventTypeName,
    },
};

/// Event type filters to add to or remove from a destination.
#[derive(Clone, Debug)]
pub struct EventTypeFiltersCommand {
    destination_id: DestinationId,
    event_types: Vec<EventTypeName>,
    actor: AuditActor,
}

impl EventTypeFiltersCommand {
    pub fn new(
        destination_id: DestinationId,
        event_types: Vec<String>,
        actor: AuditActor,
    ) -> Result<Self, AuditStreamingDomainError> {
        if event_types.is_empty() {
            return Err(AuditStreamingDomainError::InvalidEventType);
        }

        let mut parsed: Vec<EventTypeName> = Vec::with_capacity(event_types.len());
        for event_type in event_types {
            let event_type = EventTypeName::new(event_type)?;
            if !parsed.contains(&event_type) {
                parsed.push(event_type);
            }
        }

        Ok(Self {
            destination_id,
            event_types: parsed,
            actor,
        })
    }

    pub fn destination_id(&self) -> DestinationId {
        self.destination_id
    }
    pub fn event_types(&self) -> &[EventTypeName] {
        &self.event_types
    }
    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }
}
