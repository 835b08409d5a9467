use crate::audit_streaming::domain::model::{
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
    value_objects::{
        audit_actor::AuditActor, destination_id::DestinationId, destination_name::DestinationName,
        destination_url::DestinationUrl,
    },
};

#[derive(Clone, Debug)]
pub struct UpdateDestinationCommand {
    destination_id: DestinationId,
    name: Option<DestinationName>,
    destination_url: Option<DestinationUrl>,
    active: Option<bool>,
    actor: AuditActor,
}

impl UpdateDestinationCommand {
    pub fn new(
        destination_id: DestinationId,
        name: Option<String>,
        destination_url: Option<String>,
        active: Option<bool>,
        actor: AuditActor,
    ) -> Result<Self, AuditStreamingDomainError> {
        Ok(Self {
            destination_id,
            name: name.map(DestinationName::new).transpose()?,
            destination_url: destination_url.map(DestinationUrl::new).transpose()?,
            active,
            actor,
        })
    }

    pub fn destination_id(&self) -> DestinationId {
        self.destination_id
    }
    pub fn name(&self) -> Option<&DestinationName> {
        self.name.as_ref()
    }
    pub fn destination_url(&self) -> Option<&DestinationUrl> {
        self.destination_url.as_ref()
    }
    pub fn active(&self) -> Option<bool> {
        self.active
    }
    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }
}
