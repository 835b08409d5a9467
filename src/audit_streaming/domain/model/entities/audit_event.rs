use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value, json};

use crate::audit_streaming::domain::model::{
    enums::{
        audit_event_scope::AuditEventScope, audit_streaming_domain_error::AuditStreamingDomainError,
    },
    value_objects::audit_event_id::AuditEventId,
};

pub struct AuditEventParts {
    pub scope: AuditEventScope,
    pub author_id: i64,
    pub author_name: String,
    pub entity_path: Option<String>,
    pub target_id: Option<i64>,
    pub target_type: Option<String>,
    pub target_details: Option<String>,
    pub ip_address: Option<String>,
    pub details: Value,
    pub created_at: DateTime<Utc>,
}

/// Immutable record of one tracked action.
#[derive(Clone, Debug)]
pub struct AuditEvent {
    id: AuditEventId,
    scope: AuditEventScope,
    author_id: i64,
    author_name: String,
    entity_path: Option<String>,
    target_id: Option<i64>,
    target_type: Option<String>,
    target_details: Option<String>,
    ip_address: Option<String>,
    details: Value,
    created_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Builds an event that has not been stored yet.
    pub fn draft(parts: AuditEventParts) -> Result<Self, AuditStreamingDomainError> {
        Self::restore(AuditEventId::new_stream_only(), parts)
    }

    pub fn restore(
        id: AuditEventId,
        parts: AuditEventParts,
    ) -> Result<Self, AuditStreamingDomainError> {
        let details = match parts.details {
            Value::Null => Value::Object(Map::new()),
            Value::Object(map) => Value::Object(map),
            _ => {
                return Err(AuditStreamingDomainError::InvalidAuditEvent(
                    "details must be a JSON object".to_string(),
                ));
            }
        };

        Ok(Self {
            id,
            scope: parts.scope,
            author_id: parts.author_id,
            author_name: parts.author_name,
            entity_path: parts.entity_path,
            target_id: parts.target_id,
            target_type: parts.target_type,
            target_details: parts.target_details,
            ip_address: parts.ip_address,
            details,
            created_at: parts.created_at,
        })
    }

    pub fn mark_persisted(self, id: i64) -> Self {
        Self {
            id: AuditEventId::Persisted(id),
            ..self
        }
    }

    pub fn id(&self) -> AuditEventId {
        self.id
    }
    pub fn scope(&self) -> AuditEventScope {
        self.scope
    }
    pub fn author_id(&self) -> i64 {
        self.author_id
    }
    pub fn author_name(&self) -> &str {
        &self.author_name
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
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn to_json_value(&self) -> Value {
        let mut payload = json!({
            "id": self.id.to_json_value(),
            "author_id": self.author_id,
            "author_name": self.author_name,
            "entity_id": self.scope.entity_id(),
            "entity_type": self.scope.entity_type(),
            "entity_path": self.entity_path,
            "target_id": self.target_id,
            "target_type": self.target_type,
            "target_details": self.target_details,
            "ip_address": self.ip_address,
            "details": self.details,
            "created_at": self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        });

        let scope_key = match self.scope {
            AuditEventScope::Group(id) => Some(("group_id", id)),
            AuditEventScope::Project(id) => Some(("project_id", id)),
            AuditEventScope::User(id) => Some(("user_id", id)),
            AuditEventScope::Instance => None,
        };
        if let (Some((key, id)), Value::Object(map)) = (scope_key, &mut payload) {
            map.insert(key.to_string(), Value::from(id));
        }

        payload
    }

    /// Body posted to external destinations.
    pub fn streaming_payload(&self, event_type: &str) -> Value {
        let mut payload = self.to_json_value();
        if let Value::Object(map) = &mut payload {
            map.insert(
                "event_type".to_string(),
                Value::String(event_type.to_string()),
            );
        }
        payload
    }
}
