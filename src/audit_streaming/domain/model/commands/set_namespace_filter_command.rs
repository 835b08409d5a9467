use crate::audit_streaming::domain::model::{
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
    value_objects::{
        audit_actor::AuditActor, destination_id::DestinationId, namespace_filter::NamespaceFilter,
    },
};

#[derive(Clone, Debug)]
pub struct SetNamespaceFilterCommand {
    destination_id: DestinationId,
    filter: NamespaceFilter,
    actor: AuditActor,
}

impl SetNamespaceFilterCommand {
    pub fn new(
        destination_id: DestinationId,
        group_id: Option<i64>,
        project_id: Option<i64>,
        actor: AuditActor,
    ) -> Result<Self, AuditStreamingDomainError> {
        let filter = match (group_id, project_id) {
            (Some(group_id), None) if group_id > 0 => NamespaceFilter::Group(group_id),
            (None, Some(project_id)) if project_id > 0 => NamespaceFilter::Project(project_id),
            _ => return Err(AuditStreamingDomainError::NamespaceFilterNotFound),
        };

        Ok(Self {
            destination_id,
            filter,
            actor,
        })
    }

    pub fn destination_id(&self) -> DestinationId {
        self.destination_id
    }
    pub fn filter(&self) -> NamespaceFilter {
        self.filter
    }
    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }
}
