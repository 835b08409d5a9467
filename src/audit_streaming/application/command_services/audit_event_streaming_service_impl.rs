use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::audit_streaming::{
    application::processors::audit_event_processor::AuditEventProcessor,
    domain::{
        model::{
            commands::stream_audit_event_command::StreamAuditEventCommand,
            enums::{
                audit_event_delivery_error::AuditEventDeliveryError,
                audit_streaming_domain_error::AuditStreamingDomainError,
                destination_level::DestinationLevel,
                streaming_outcome::{SkipReason, StreamingOutcome},
            },
            value_objects::streaming_feature_toggles::StreamingFeatureToggles,
        },
        services::{
            audit_event_streaming_service::AuditEventStreamingService,
            destination_eligibility::eligible_destinations,
        },
    },
    infrastructure::{
        delivery::audit_event_delivery_gateway::AuditEventDeliveryGateway,
        persistence::repositories::external_destination_repository::ExternalDestinationRepository,
    },
};

pub struct AuditEventStreamingServiceImpl {
    processor: AuditEventProcessor,
    destination_repository: Arc<dyn ExternalDestinationRepository>,
    delivery_gateway: Arc<dyn AuditEventDeliveryGateway>,
    toggles: StreamingFeatureToggles,
}

impl AuditEventStreamingServiceImpl {
    pub fn new(
        processor: AuditEventProcessor,
        destination_repository: Arc<dyn ExternalDestinationRepository>,
        delivery_gateway: Arc<dyn AuditEventDeliveryGateway>,
        toggles: StreamingFeatureToggles,
    ) -> Self {
        Self {
            processor,
            destination_repository,
            delivery_gateway,
            toggles,
        }
    }

    fn skip_reason(&self) -> Option<SkipReason> {
        if self.toggles.silent_mode_enabled {
            Some(SkipReason::SilentMode)
        } else if !self.toggles.streaming_enabled {
            Some(SkipReason::StreamingDisabled)
        } else if !self.toggles.licensed {
            Some(SkipReason::Unlicensed)
        } else {
            None
        }
    }
}

#[async_trait]
impl AuditEventStreamingService for AuditEventStreamingServiceImpl {
    async fn handle_stream(
        &self,
        command: StreamAuditEventCommand,
    ) -> Result<StreamingOutcome, AuditStreamingDomainError> {
        let event_type = command.event_type().value();

        if let Some(reason) = self.skip_reason() {
            info!(
                audit_event_type = event_type,
                reason = reason.as_str(),
                "audit event streaming skipped"
            );
            return Ok(StreamingOutcome::Skipped(reason));
        }

        let resolved = match self.processor.fetch(command.source()).await {
            Ok(resolved) => resolved,
            Err(AuditStreamingDomainError::InfrastructureError(message)) => {
                return Err(AuditStreamingDomainError::InfrastructureError(message));
            }
            Err(fetch_error) => {
                error!(
                    error = "Failed to fetch audit event",
                    reason = %fetch_error,
                    audit_event_type = event_type
                );
                return Ok(StreamingOutcome::Unresolved);
            }
        };

        let mut destinations = self
            .destination_repository
            .list_by_level(DestinationLevel::Instance)
            .await?;
        if let Some(root_group_id) = resolved.ancestry.root_group_id {
            destinations.extend(
                self.destination_repository
                    .list_by_level(DestinationLevel::Group(root_group_id))
                    .await?,
            );
        }

        let eligible = eligible_destinations(event_type, &resolved.ancestry, &destinations);
        if eligible.is_empty() {
            info!(
                audit_event_type = event_type,
                audit_event_id = %resolved.event.id(),
                "no eligible audit event destinations"
            );
            return Ok(StreamingOutcome::Delivered {
                attempted: 0,
                succeeded: 0,
                failed: 0,
            });
        }

        let body = serde_json::to_vec(&resolved.event.streaming_payload(event_type))
            .map_err(|e| AuditStreamingDomainError::InfrastructureError(e.to_string()))?;

        let results = join_all(
            eligible
                .iter()
                .map(|destination| self.delivery_gateway.deliver(destination, event_type, &body)),
        )
        .await;

        let mut failed = 0;
        for (destination, result) in eligible.iter().zip(results) {
            let Err(delivery_error) = result else {
                continue;
            };
            failed += 1;
            match &delivery_error {
                AuditEventDeliveryError::InvalidUri(_) => error!(
                    destination_id = %destination.id().value(),
                    audit_event_type = event_type,
                    error = %delivery_error,
                    "audit event destination has an invalid uri"
                ),
                _ => warn!(
                    destination_id = %destination.id().value(),
                    audit_event_type = event_type,
                    error = %delivery_error,
                    "audit event delivery failed"
                ),
            }
        }

        let attempted = eligible.len();
        info!(
            audit_event_type = event_type,
            audit_event_id = %resolved.event.id(),
            attempted,
            failed,
            "audit event streamed"
        );

        Ok(StreamingOutcome::Delivered {
            attempted,
            succeeded: attempted - failed,
            failed,
        })
    }
}
