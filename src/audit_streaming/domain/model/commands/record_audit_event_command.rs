use serde_json::Value;

use crate::audit_streaming::domain::model::{
    enums::{
        audit_event_scope::AuditEventScope, audit_streaming_domain_error::AuditStreamingDomainError,
    },
    value_objects::{audit_actor::AuditActor, event_type_name::EventTypeName},
};

#[derive(Clone, Debug)]
pub struct RecordAuditEventCommand {
    event_type: EventTypeName,
    scope: AuditEventScope,
    author: AuditActor,
    entity_path: Option<String>,
    target_id: Option<i64>,
    target_type: Option<String>,
    target_details: Option<String>,
    ip_address: Option<String>,
    details: Value,
    stream_only: bool,
}

pub struct RecordAuditEventCommandParts {
    pub event_type: String,
    pub scope: AuditEventScope,
    pub author_id: i64,
    pub author_name: String,
    pub entity_path: Option<String>,
    pub target_id: Option<i64>,
    pub target_type: Option<String>,
    pub target_details: Option<String>,
    pub ip_address: Option<String>,
    pub details: Value,
    pub stream_only: bool,
}

impl RecordAuditEventCommand {
    pub fn new(parts: RecordAuditEventCommandParts) -> Result<Self, AuditStreamingDomainError> {
        if !matches!(parts.details, Value::Object(_) | Value::Null) {
            return Err(AuditStreamingDomainError::InvalidAuditEvent(
                "details must be a JSON object".to_string(),
            ));
        }

        Ok(Self {
            event_type: EventTypeName::new(parts.event_type)?,
            scope: parts.scope,
            author: AuditActor::new(parts.author_id, parts.author_name)?,
            entity_path: parts.entity_path,
            target_id: parts.target_id,
            target_type: parts.target_type,
            target_details: parts.target_details,
            ip_address: parts.ip_address,
            details: parts.details,
            stream_only: parts.stream_only,
        })
    }

    pub fn event_type(&self) -> &EventTypeName {
        &self.event_type
    }
    pub fn scope(&self) -> AuditEventScope {
        self.scope
    }
    pub fn author(&self) -> &AuditActor {
        &self.author
    }
    pub fn entity_path(&self) -> Option<&str> {
        self.entity_path.as_deref()
    }
    pub fn target_id(&self) -> Option<i64> {
        self.target_id
    }
    pub fn target_type(&self) -> Option<&str> {
        self.target_type.as_deref()
    }
    pub fn target_details(&self) -> Option<&str> {
        self.target_details.as_deref()
    }
    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }
    pub fn details(&self) -> &Value {
        &self.details
    }
    pub fn stream_only(&self) -> bool {
        self.stream_only
    }
}
