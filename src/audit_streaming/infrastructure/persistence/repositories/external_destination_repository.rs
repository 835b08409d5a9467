use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    entities::external_destination::ExternalDestination,
    enums::{
        audit_streaming_domain_error::AuditStreamingDomainError, destination_level::DestinationLevel,
    },
    value_objects::destination_id::DestinationId,
};

#[async_trait]
pub trait ExternalDestinationRepository: Send + Sync {
    /// Inserts or replaces the destination together with its headers and filters.
    async fn save(&self, destination: &ExternalDestination)
    -> Result<(), AuditStreamingDomainError>;

    async fn delete(&self, destination_id: DestinationId) -> Result<bool, AuditStreamingDomainError>;

    async fn find_by_id(
        &self,
        destination_id: DestinationId,
    ) -> Result<Option<ExternalDestination>, AuditStreamingDomainError>;

    async fn list_by_level(
        &self,
        level: DestinationLevel,
    ) -> Result<Vec<ExternalDestination>, AuditStreamingDomainError>;
}
