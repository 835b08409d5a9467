use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    commands::record_audit_event_command::RecordAuditEventCommand,
    entities::audit_event::AuditEvent,
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
};

#[async_trait]
pub trait AuditEventCommandService: Send + Sync {
    async fn handle_record(
        &self,
        command: RecordAuditEventCommand,
    ) -> Result<AuditEvent, AuditStreamingDomainError>;
}
