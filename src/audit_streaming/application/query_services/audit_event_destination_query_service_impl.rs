use std::sync::Arc;

use async_trait::async_trait;

use crate::audit_streaming::{
    domain::{
        model::{
            entities::external_destination::ExternalDestination,
            enums::audit_streaming_domain_error::AuditStreamingDomainError,
            queries::list_destinations_query::ListDestinationsQuery,
            value_objects::destination_id::DestinationId,
        },
        services::audit_event_destination_query_service::AuditEventDestinationQueryService,
    },
    infrastructure::persistence::repositories::external_destination_repository::ExternalDestinationRepository,
};

pub struct AuditEventDestinationQueryServiceImpl {
    destination_repository: Arc<dyn ExternalDestinationRepository>,
}

impl AuditEventDestinationQueryServiceImpl {
    pub fn new(destination_repository: Arc<dyn ExternalDestinationRepository>) -> Self {
        Self {
            destination_repository,
        }
    }
}

#[async_trait]
impl AuditEventDestinationQueryService for AuditEventDestinationQueryServiceImpl {
    async fn handle_list(
        &self,
        query: ListDestinationsQuery,
    ) -> Result<Vec<ExternalDestination>, AuditStreamingDomainError> {
        self.destination_repository
            .list_by_level(query.level())
            .await
    }

    async fn handle_find(
        &self,
        destination_id: DestinationId,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        self.destination_repository
            .find_by_id(destination_id)
            .await?
            .ok_or(AuditStreamingDomainError::DestinationNotFound)
    }
}
