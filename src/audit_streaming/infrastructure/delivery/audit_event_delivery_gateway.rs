use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    entities::external_destination::ExternalDestination,
    enums::audit_event_delivery_error::AuditEventDeliveryError,
};

pub const EVENT_TYPE_HEADER: &str = "x-gitlab-audit-event-type";
pub const STREAMING_TOKEN_HEADER: &str = "x-gitlab-event-streaming-token";
pub const STREAMING_SIGNATURE_HEADER: &str = "x-gitlab-event-streaming-signature";

#[async_trait]
pub trait AuditEventDeliveryGateway: Send + Sync {
    /// Posts one serialized audit event to one destination. Exactly one attempt is made.
    async fn deliver(
        &self,
        destination: &ExternalDestination,
        event_type: &str,
        body: &[u8],
    ) -> Result<(), AuditEventDeliveryError>;
}
