use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    entities::audit_event::AuditEvent,
    enums::{
        audit_event_model_class::AuditEventModelClass,
        audit_streaming_domain_error::AuditStreamingDomainError,
    },
    value_objects::event_type_name::EventTypeName,
};

#[async_trait]
pub trait AuditEventRepository: Send + Sync {
    /// Stores the event and returns its persisted id.
    async fn save(
        &self,
        event: &AuditEvent,
        event_type: &EventTypeName,
    ) -> Result<i64, AuditStreamingDomainError>;

    async fn find_by_id(
        &self,
        model_class: AuditEventModelClass,
        audit_event_id: i64,
    ) -> Result<Option<AuditEvent>, AuditStreamingDomainError>;
}
