use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    commands::stream_audit_event_command::StreamAuditEventCommand,
    enums::{
        audit_streaming_domain_error::AuditStreamingDomainError,
        streaming_outcome::StreamingOutcome,
    },
};

#[async_trait]
pub trait AuditEventStreamingService: Send + Sync {
    /// Fans one audit event out to its eligible destinations.
    ///
    /// Resolution and delivery failures are logged and reported through the outcome;
    /// `Err` is reserved for infrastructure failures worth retrying.
    async fn handle_stream(
        &self,
        command: StreamAuditEventCommand,
    ) -> Result<StreamingOutcome, AuditStreamingDomainError>;
}
