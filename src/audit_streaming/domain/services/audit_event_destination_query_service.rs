use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    entities::external_destination::ExternalDestination,
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
    queries::list_destinations_query::ListDestinationsQuery,
    value_objects::destination_id::DestinationId,
};

#[async_trait]
pub trait AuditEventDestinationQueryService: Send + Sync {
    async fn handle_list(
        &self,
        query: ListDestinationsQuery,
    ) -> Result<Vec<ExternalDestination>, AuditStreamingDomainError>;

    async fn handle_find(
        &self,
        destination_id: DestinationId,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;
}
