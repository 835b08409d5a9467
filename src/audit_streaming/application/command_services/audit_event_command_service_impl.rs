use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use crate::audit_streaming::{
    domain::{
        model::{
            commands::{
                record_audit_event_command::RecordAuditEventCommand,
                stream_audit_event_command::StreamAuditEventCommand,
            },
            entities::audit_event::{AuditEvent, AuditEventParts},
            enums::{
                audit_event_model_class::AuditEventModelClass,
                audit_streaming_domain_error::AuditStreamingDomainError,
            },
        },
        services::audit_event_command_service::AuditEventCommandService,
    },
    infrastructure::{
        jobs::streaming_job_dispatcher::StreamingJobDispatcher,
        persistence::repositories::audit_event_repository::AuditEventRepository,
    },
};

pub struct AuditEventCommandServiceImpl {
    audit_event_repository: Arc<dyn AuditEventRepository>,
    job_dispatcher: Arc<dyn StreamingJobDispatcher>,
}

impl AuditEventCommandServiceImpl {
    pub fn new(
        audit_event_repository: Arc<dyn AuditEventRepository>,
        job_dispatcher: Arc<dyn StreamingJobDispatcher>,
    ) -> Self {
        Self {
            audit_event_repository,
            job_dispatcher,
        }
    }
}

#[async_trait]
impl AuditEventCommandService for AuditEventCommandServiceImpl {
    async fn handle_record(
        &self,
        command: RecordAuditEventCommand,
    ) -> Result<AuditEvent, AuditStreamingDomainError> {
        let event = AuditEvent::draft(AuditEventParts {
            scope: command.scope(),
            author_id: command.author().id(),
            author_name: command.author().name().to_string(),
            entity_path: command.entity_path().map(str::to_string),
            target_id: command.target_id(),
            target_type: command.target_type().map(str::to_string),
            target_details: command.target_details().map(str::to_string),
            ip_address: command.ip_address().map(str::to_string),
            details: command.details().clone(),
            created_at: Utc::now(),
        })?;

        let event_type = command.event_type().clone();
        let (event, job) = if command.stream_only() {
            let job = StreamAuditEventCommand::for_event_json(event_type, event.to_json_value());
            (event, job)
        } else {
            let id = self.audit_event_repository.save(&event, &event_type).await?;
            let job = StreamAuditEventCommand::for_event_id(
                event_type,
                id,
                AuditEventModelClass::AuditEvent,
            );
            (event.mark_persisted(id), job)
        };

        if let Err(dispatch_error) = self.job_dispatcher.dispatch(job).await {
            warn!(
                audit_event_id = %event.id(),
                audit_event_type = command.event_type().value(),
                error = %dispatch_error,
                "audit event recorded but not queued for streaming"
            );
        }

        Ok(event)
    }
}
