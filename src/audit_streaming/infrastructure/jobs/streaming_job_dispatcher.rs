use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    commands::stream_audit_event_command::StreamAuditEventCommand,
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
};

#[async_trait]
pub trait StreamingJobDispatcher: Send + Sync {
    /// Enqueues one streaming job without waiting for it to run.
    async fn dispatch(
        &self,
        command: StreamAuditEventCommand,
    ) -> Result<(), AuditStreamingDomainError>;
}
