use serde_json::Value;

use crate::audit_streaming::domain::model::{
    enums::{
        audit_event_model_class::AuditEventModelClass,
        audit_streaming_domain_error::AuditStreamingDomainError,
    },
    value_objects::event_type_name::EventTypeName,
};

/// Where a streaming job finds its event. The model class stays raw until resolution.
#[derive(Clone, Debug)]
pub enum AuditEventSource {
    Id {
        audit_event_id: i64,
        model_class: String,
    },
    Json(Value),
}

/// One fan-out job: an event reference plus the type it is streamed as.
#[derive(Clone, Debug)]
pub struct StreamAuditEventCommand {
    event_type: EventTypeName,
    source: AuditEventSource,
}

impl StreamAuditEventCommand {
    pub fn new(
        event_type: String,
        audit_event_id: Option<i64>,
        audit_event_json: Option<Value>,
        model_class: Option<String>,
    ) -> Result<Self, AuditStreamingDomainError> {
        let source = match (audit_event_id, audit_event_json) {
            (Some(_), Some(_)) => return Err(AuditStreamingDomainError::AmbiguousAuditEventSource),
            (None, None) => return Err(AuditStreamingDomainError::MissingAuditEventSource),
            (Some(audit_event_id), None) => AuditEventSource::Id {
                audit_event_id,
                model_class: model_class
                    .unwrap_or_else(|| AuditEventModelClass::default().as_str().to_string()),
            },
            (None, Some(json)) => AuditEventSource::Json(json),
        };

        Ok(Self {
            event_type: EventTypeName::new(event_type)?,
            source,
        })
    }

    pub fn for_event_id(
        event_type: EventTypeName,
        audit_event_id: i64,
        model_class: AuditEventModelClass,
    ) -> Self {
        Self {
            event_type,
            source: AuditEventSource::Id {
                audit_event_id,
                model_class: model_class.as_str().to_string(),
            },
        }
    }

    pub fn for_event_json(event_type: EventTypeName, audit_event_json: Value) -> Self {
        Self {
            event_type,
            source: AuditEventSource::Json(audit_event_json),
        }
    }

    pub fn event_type(&self) -> &EventTypeName {
        &self.event_type
    }
    pub fn source(&self) -> &AuditEventSource {
        &self.source
    }
}
