use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::warn;

use crate::audit_streaming::{
    domain::{
        model::{
            commands::{
                add_streaming_header_command::AddStreamingHeaderCommand,
                create_destination_command::CreateDestinationCommand,
                destination_reference_command::DestinationReferenceCommand,
                event_type_filters_command::EventTypeFiltersCommand,
                record_audit_event_command::{
                    RecordAuditEventCommand, RecordAuditEventCommandParts,
                },
                remove_streaming_header_command::RemoveStreamingHeaderCommand,
                set_namespace_filter_command::SetNamespaceFilterCommand,
                update_destination_command::UpdateDestinationCommand,
            },
            entities::external_destination::ExternalDestination,
            enums::{
                audit_event_scope::AuditEventScope,
                audit_streaming_domain_error::AuditStreamingDomainError,
                destination_level::DestinationLevel,
            },
            value_objects::{
                audit_actor::AuditActor, destination_id::DestinationId,
                namespace_filter::NamespaceFilter,
            },
        },
        services::{
            audit_event_command_service::AuditEventCommandService,
            audit_event_destination_command_service::AuditEventDestinationCommandService,
        },
    },
    infrastructure::persistence::repositories::{
        external_destination_repository::ExternalDestinationRepository,
        namespace_repository::NamespaceRepository,
    },
};

pub const MAXIMUM_DESTINATIONS_PER_OWNER: usize = 5;

pub struct AuditEventDestinationCommandServiceImpl {
    destination_repository: Arc<dyn ExternalDestinationRepository>,
    namespace_repository: Arc<dyn NamespaceRepository>,
    audit_event_command_service: Arc<dyn AuditEventCommandService>,
}

impl AuditEventDestinationCommandServiceImpl {
    pub fn new(
        destination_repository: Arc<dyn ExternalDestinationRepository>,
        namespace_repository: Arc<dyn NamespaceRepository>,
        audit_event_command_service: Arc<dyn AuditEventCommandService>,
    ) -> Self {
        Self {
            destination_repository,
            namespace_repository,
            audit_event_command_service,
        }
    }

    async fn find_destination(
        &self,
        destination_id: DestinationId,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        self.destination_repository
            .find_by_id(destination_id)
            .await?
            .ok_or(AuditStreamingDomainError::DestinationNotFound)
    }

    async fn ensure_root_group(&self, group_id: i64) -> Result<(), AuditStreamingDomainError> {
        let ancestry = self
            .namespace_repository
            .find_group_ancestry(group_id)
            .await?
            .ok_or(AuditStreamingDomainError::GroupNotFound)?;
        if ancestry.len() != 1 {
            return Err(AuditStreamingDomainError::GroupIsNotRootGroup);
        }
        Ok(())
    }

    async fn ensure_url_available(
        &self,
        destination: &ExternalDestination,
    ) -> Result<(), AuditStreamingDomainError> {
        let siblings = self
            .destination_repository
            .list_by_level(destination.level())
            .await?;
        let taken = siblings.iter().any(|other| {
            other.id() != destination.id()
                && other.destination_url().value() == destination.destination_url().value()
        });
        if taken {
            return Err(AuditStreamingDomainError::DestinationUrlTaken);
        }
        Ok(())
    }

    /// Checks that a namespace filter exists and, for group destinations, sits under the root group.
    async fn ensure_filter_in_hierarchy(
        &self,
        level: DestinationLevel,
        filter: NamespaceFilter,
    ) -> Result<(), AuditStreamingDomainError> {
        let ancestry = match filter {
            NamespaceFilter::Group(group_id) => {
                self.namespace_repository.find_group_ancestry(group_id).await?
            }
            NamespaceFilter::Project(project_id) => {
                self.namespace_repository
                    .find_project_group_ancestry(project_id)
                    .await?
            }
        }
        .ok_or(AuditStreamingDomainError::NamespaceFilterNotFound)?;

        match level {
            DestinationLevel::Instance => Ok(()),
            DestinationLevel::Group(root_group_id) if ancestry.contains(&root_group_id) => Ok(()),
            DestinationLevel::Group(_) => {
                Err(AuditStreamingDomainError::NamespaceFilterOutsideHierarchy)
            }
        }
    }

    async fn record_change(
        &self,
        actor: &AuditActor,
        destination: &ExternalDestination,
        event_type: &str,
        message: String,
        extra_details: Value,
    ) {
        let (scope, target_type) = match destination.level() {
            DestinationLevel::Instance => (
                AuditEventScope::Instance,
                "AuditEvents::InstanceExternalAuditEventDestination",
            ),
            DestinationLevel::Group(group_id) => (
                AuditEventScope::Group(group_id),
                "AuditEvents::ExternalAuditEventDestination",
            ),
        };

        let mut details = json!({
            "custom_message": message,
            "destination_id": destination.id().value().to_string(),
        });
        if let (Value::Object(base), Value::Object(extra)) = (&mut details, extra_details) {
            base.extend(extra);
        }

        let command = RecordAuditEventCommand::new(RecordAuditEventCommandParts {
            event_type: event_type.to_string(),
            scope,
            author_id: actor.id(),
            author_name: actor.name().to_string(),
            entity_path: None,
            target_id: None,
            target_type: Some(target_type.to_string()),
            target_details: Some(destination.name().value().to_string()),
            ip_address: None,
            details,
            stream_only: false,
        });

        let result = match command {
            Ok(command) => self
                .audit_event_command_service
                .handle_record(command)
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(record_error) = result {
            warn!(
                audit_event_type = event_type,
                destination_id = %destination.id().value(),
                error = %record_error,
                "failed to record destination audit event"
            );
        }
    }
}

#[async_trait]
impl AuditEventDestinationCommandService for AuditEventDestinationCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateDestinationCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        if let DestinationLevel::Group(group_id) = command.level() {
            self.ensure_root_group(group_id).await?;
        }

        let existing = self
            .destination_repository
            .list_by_level(command.level())
            .await?;
        if existing.len() >= MAXIMUM_DESTINATIONS_PER_OWNER {
            return Err(AuditStreamingDomainError::DestinationLimitExceeded);
        }

        let destination = ExternalDestination::new(
            command.level(),
            command.name().cloned(),
            command.destination_url().clone(),
            command.verification_token().cloned(),
            Utc::now(),
        );
        self.ensure_url_available(&destination).await?;

        self.destination_repository.save(&destination).await?;
        self.record_change(
            command.actor(),
            &destination,
            "audit_event_destination_created",
            format!(
                "Create event streaming destination {}",
                destination.destination_url().value()
            ),
            json!({}),
        )
        .await;

        Ok(destination)
    }

    async fn handle_update(
        &self,
        command: UpdateDestinationCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let mut destination = self.find_destination(command.destination_id()).await?;

        destination.update(
            command.name().cloned(),
            command.destination_url().cloned(),
            command.active(),
        );
        if command.destination_url().is_some() {
            self.ensure_url_available(&destination).await?;
        }

        self.destination_repository.save(&destination).await?;
        self.record_change(
            command.actor(),
            &destination,
            "audit_event_destination_updated",
            format!(
                "Updated event streaming destination {}",
                destination.name().value()
            ),
            json!({ "active": destination.active() }),
        )
        .await;

        Ok(destination)
    }

    async fn handle_delete(
        &self,
        command: DestinationReferenceCommand,
    ) -> Result<(), AuditStreamingDomainError> {
        let destination = self.find_destination(command.destination_id()).await?;

        if !self
            .destination_repository
            .delete(command.destination_id())
            .await?
        {
            return Err(AuditStreamingDomainError::DestinationNotFound);
        }

        self.record_change(
            command.actor(),
            &destination,
            "audit_event_destination_destroyed",
            format!(
                "Destroy event streaming destination {}",
                destination.destination_url().value()
            ),
            json!({}),
        )
        .await;

        Ok(())
    }

    async fn handle_add_header(
        &self,
        command: AddStreamingHeaderCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let mut destination = self.find_destination(command.destination_id()).await?;

        destination.add_header(command.header().clone())?;
        self.destination_repository.save(&destination).await?;
        self.record_change(
            command.actor(),
            &destination,
            "audit_event_streaming_header_created",
            format!(
                "Created custom HTTP header with key {}.",
                command.header().key()
            ),
            json!({ "header_key": command.header().key() }),
        )
        .await;

        Ok(destination)
    }

    async fn handle_remove_header(
        &self,
        command: RemoveStreamingHeaderCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let mut destination = self.find_destination(command.destination_id()).await?;

        let removed = destination.remove_header(command.key())?;
        self.destination_repository.save(&destination).await?;
        self.record_change(
            command.actor(),
            &destination,
            "audit_event_streaming_header_destroyed",
            format!("Destroyed a custom HTTP header with key {}.", removed.key()),
            json!({ "header_key": removed.key() }),
        )
        .await;

        Ok(destination)
    }

    async fn handle_add_event_type_filters(
        &self,
        command: EventTypeFiltersCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let mut destination = self.find_destination(command.destination_id()).await?;

        let added = destination.add_event_type_filters(command.event_types().to_vec());
        if added.is_empty() {
            return Ok(destination);
        }

        self.destination_repository.save(&destination).await?;
        let added: Vec<&str> = added.iter().map(|event_type| event_type.value()).collect();
        self.record_change(
            command.actor(),
            &destination,
            "event_type_filters_created",
            format!(
                "Created audit event type filter(s): {}",
                added.join(", ")
            ),
            json!({ "event_type_filters": added }),
        )
        .await;

        Ok(destination)
    }

    async fn handle_remove_event_type_filters(
        &self,
        command: EventTypeFiltersCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let mut destination = self.find_destination(command.destination_id()).await?;

        destination.remove_event_type_filters(command.event_types())?;
        self.destination_repository.save(&destination).await?;

        let removed: Vec<&str> = command
            .event_types()
            .iter()
            .map(|event_type| event_type.value())
            .collect();
        self.record_change(
            command.actor(),
            &destination,
            "event_type_filters_deleted",
            format!(
                "Deleted audit event type filter(s): {}",
                removed.join(", ")
            ),
            json!({ "event_type_filters": removed }),
        )
        .await;

        Ok(destination)
    }

    async fn handle_set_namespace_filter(
        &self,
        command: SetNamespaceFilterCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let mut destination = self.find_destination(command.destination_id()).await?;

        self.ensure_filter_in_hierarchy(destination.level(), command.filter())
            .await?;
        destination.set_namespace_filter(command.filter());
        self.destination_repository.save(&destination).await?;

        let filter = command.filter();
        self.record_change(
            command.actor(),
            &destination,
            "audit_event_namespace_filter_created",
            format!(
                "Create namespace filter for event streaming destination {}",
                destination.name().value()
            ),
            json!({
                "namespace_type": filter.namespace_type(),
                "namespace_id": filter.namespace_id(),
            }),
        )
        .await;

        Ok(destination)
    }

    async fn handle_remove_namespace_filter(
        &self,
        command: DestinationReferenceCommand,
    ) -> Result<ExternalDestination, AuditStreamingDomainError> {
        let mut destination = self.find_destination(command.destination_id()).await?;

        let removed = destination.clear_namespace_filter()?;
        self.destination_repository.save(&destination).await?;
        self.record_change(
            command.actor(),
            &destination,
            "audit_event_namespace_filter_deleted",
            format!(
                "Delete namespace filter for event streaming destination {}",
                destination.name().value()
            ),
            json!({
                "namespace_type": removed.namespace_type(),
                "namespace_id": removed.namespace_id(),
            }),
        )
        .await;

        Ok(destination)
    }
}
