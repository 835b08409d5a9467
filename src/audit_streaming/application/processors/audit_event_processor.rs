use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::audit_streaming::{
    domain::model::{
        commands::stream_audit_event_command::AuditEventSource,
        entities::audit_event::{AuditEvent, AuditEventParts},
        enums::{
            audit_event_model_class::AuditEventModelClass, audit_event_scope::AuditEventScope,
            audit_streaming_domain_error::AuditStreamingDomainError,
        },
        value_objects::{audit_event_id::AuditEventId, event_ancestry::EventAncestry},
    },
    infrastructure::persistence::repositories::{
        audit_event_repository::AuditEventRepository, namespace_repository::NamespaceRepository,
    },
};

/// An audit event together with the namespaces it belongs to.
#[derive(Clone, Debug)]
pub struct ResolvedAuditEvent {
    pub event: AuditEvent,
    pub ancestry: EventAncestry,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AuditEventJson {
    id: Option<Value>,
    author_id: Option<i64>,
    author_name: Option<String>,
    entity_id: Option<i64>,
    entity_type: Option<String>,
    entity_path: Option<String>,
    group_id: Option<i64>,
    project_id: Option<i64>,
    user_id: Option<i64>,
    target_id: Option<i64>,
    target_type: Option<String>,
    target_details: Option<String>,
    ip_address: Option<String>,
    details: Option<Value>,
    created_at: Option<DateTime<Utc>>,
    root_group_entity_id: Option<i64>,
}

impl AuditEventJson {
    fn scope(&self) -> AuditEventScope {
        if let Some(group_id) = self.group_id {
            return AuditEventScope::Group(group_id);
        }
        if let Some(project_id) = self.project_id {
            return AuditEventScope::Project(project_id);
        }
        if let Some(user_id) = self.user_id {
            return AuditEventScope::User(user_id);
        }
        match self.entity_type.as_deref() {
            Some(entity_type) => AuditEventScope::from_entity(entity_type, self.entity_id)
                .unwrap_or(AuditEventScope::Instance),
            None => AuditEventScope::Instance,
        }
    }

    fn event_id(&self) -> AuditEventId {
        match &self.id {
            Some(Value::Number(number)) => number
                .as_i64()
                .map(AuditEventId::Persisted)
                .unwrap_or_else(AuditEventId::new_stream_only),
            Some(Value::String(raw)) => match raw.parse::<i64>() {
                Ok(id) => AuditEventId::Persisted(id),
                Err(_) => Uuid::parse_str(raw)
                    .map(AuditEventId::StreamOnly)
                    .unwrap_or_else(|_| AuditEventId::new_stream_only()),
            },
            _ => AuditEventId::new_stream_only(),
        }
    }
}

/// Resolves the event referenced by a streaming job.
pub struct AuditEventProcessor {
    audit_event_repository: Arc<dyn AuditEventRepository>,
    namespace_repository: Arc<dyn NamespaceRepository>,
}

impl AuditEventProcessor {
    pub fn new(
        audit_event_repository: Arc<dyn AuditEventRepository>,
        namespace_repository: Arc<dyn NamespaceRepository>,
    ) -> Self {
        Self {
            audit_event_repository,
            namespace_repository,
        }
    }

    pub async fn fetch(
        &self,
        source: &AuditEventSource,
    ) -> Result<ResolvedAuditEvent, AuditStreamingDomainError> {
        let (event, root_group_override) = match source {
            AuditEventSource::Id {
                audit_event_id,
                model_class,
            } => {
                let model_class: AuditEventModelClass = model_class.parse()?;
                let event = self
                    .audit_event_repository
                    .find_by_id(model_class, *audit_event_id)
                    .await?
                    .ok_or_else(|| {
                        AuditStreamingDomainError::InvalidAuditEvent(format!(
                            "{} {} not found",
                            model_class.as_str(),
                            audit_event_id
                        ))
                    })?;
                (event, None)
            }
            AuditEventSource::Json(json) => Self::parse_json(json)?,
        };

        let ancestry = self
            .resolve_ancestry(event.scope())
            .await?
            .with_root_group_override(root_group_override);

        Ok(ResolvedAuditEvent { event, ancestry })
    }

    fn parse_json(json: &Value) -> Result<(AuditEvent, Option<i64>), AuditStreamingDomainError> {
        // Jobs may carry the event already serialized to a string.
        let parsed: AuditEventJson = match json {
            Value::String(raw) => serde_json::from_str(raw),
            other => serde_json::from_value(other.clone()),
        }
        .map_err(|e| AuditStreamingDomainError::InvalidAuditEvent(e.to_string()))?;

        let details = match parsed.details.clone() {
            Some(Value::String(raw)) => serde_json::from_str::<Value>(&raw)
                .ok()
                .filter(Value::is_object)
                .unwrap_or_else(|| serde_json::json!({ "custom_message": raw })),
            Some(other) => other,
            None => Value::Null,
        };

        let event = AuditEvent::restore(
            parsed.event_id(),
            AuditEventParts {
                scope: parsed.scope(),
                author_id: parsed.author_id.unwrap_or(-1),
                author_name: parsed.author_name.clone().unwrap_or_default(),
                entity_path: parsed.entity_path.clone(),
                target_id: parsed.target_id,
                target_type: parsed.target_type.clone(),
                target_details: parsed.target_details.clone(),
                ip_address: parsed.ip_address.clone(),
                details,
                created_at: parsed.created_at.unwrap_or_else(Utc::now),
            },
        )?;

        Ok((event, parsed.root_group_entity_id))
    }

    async fn resolve_ancestry(
        &self,
        scope: AuditEventScope,
    ) -> Result<EventAncestry, AuditStreamingDomainError> {
        match scope {
            AuditEventScope::Instance | AuditEventScope::User(_) => Ok(EventAncestry::instance()),
            AuditEventScope::Group(group_id) => Ok(self
                .namespace_repository
                .find_group_ancestry(group_id)
                .await?
                .map(EventAncestry::for_group)
                .unwrap_or_default()),
            AuditEventScope::Project(project_id) => {
                let group_ids = self
                    .namespace_repository
                    .find_project_group_ancestry(project_id)
                    .await?
                    .unwrap_or_default();
                Ok(EventAncestry::for_project(project_id, group_ids))
            }
        }
    }
}
