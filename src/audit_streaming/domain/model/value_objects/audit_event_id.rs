use std::fmt;

use uuid::Uuid;

/// Identity of an audit event. Stream-only events are never persisted and carry a random UUID.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AuditEventId {
    Persisted(i64),
    StreamOnly(Uuid),
}

impl AuditEventId {
    pub fn new_stream_only() -> Self {
        Self::StreamOnly(Uuid::new_v4())
    }

    pub fn persisted_value(&self) -> Option<i64> {
        match self {
            Self::Persisted(id) => Some(*id),
            Self::StreamOnly(_) => None,
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::Persisted(id) => serde_json::Value::from(*id),
            Self::StreamOnly(uuid) => serde_json::Value::String(uuid.to_string()),
        }
    }
}

impl fmt::Display for AuditEventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persisted(id) => write!(f, "{id}"),
            Self::StreamOnly(uuid) => write!(f, "{uuid}"),
        }
    }
}
