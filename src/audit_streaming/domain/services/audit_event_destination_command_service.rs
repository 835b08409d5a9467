use async_trait::async_trait;

use crate::audit_streaming::domain::model::{
    commands::{
        add_streaming_header_command::AddStreamingHeaderCommand,
        create_destination_command::CreateDestinationCommand,
        destination_reference_command::DestinationReferenceCommand,
        event_type_filters_command::EventTypeFiltersCommand,
        remove_streaming_header_command::RemoveStreamingHeaderCommand,
        set_namespace_filter_command::SetNamespaceFilterCommand,
        update_destination_command::UpdateDestinationCommand,
    },
    entities::external_destination::ExternalDestination,
    enums::audit_streaming_domain_error::AuditStreamingDomainError,
};

#[async_trait]
pub trait AuditEventDestinationCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateDestinationCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;

    async fn handle_update(
        &self,
        command: UpdateDestinationCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;

    async fn handle_delete(
        &self,
        command: DestinationReferenceCommand,
    ) -> Result<(), AuditStreamingDomainError>;

    async fn handle_add_header(
        &self,
        command: AddStreamingHeaderCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;

    async fn handle_remove_header(
        &self,
        command: RemoveStreamingHeaderCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;

    async fn handle_add_event_type_filters(
        &self,
        command: EventTypeFiltersCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;

    async fn handle_remove_event_type_filters(
        &self,
        command: EventTypeFiltersCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;

    async fn handle_set_namespace_filter(
        &self,
        command: SetNamespaceFilterCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;

    async fn handle_remove_namespace_filter(
        &self,
        command: DestinationReferenceCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError>;
}
