use super::audit_streaming_domain_error::AuditStreamingDomainError;

/// Entity an audit event is attached to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AuditEventScope {
    Instance,
    Group(i64),
    Project(i64),
    User(i64),
}

impl AuditEventScope {
    pub fn entity_type(&self) -> &'static str {
        match self {
            Self::Instance => "Gitlab::Audit::InstanceScope",
            Self::Group(_) => "Group",
            Self::Project(_) => "Project",
            Self::User(_) => "User",
        }
    }

    pub fn entity_id(&self) -> Option<i64> {
        match self {
            Self::Instance => None,
            Self::Group(id) | Self::Project(id) | Self::User(id) => Some(*id),
        }
    }

    pub fn from_entity(
        entity_type: &str,
        entity_id: Option<i64>,
    ) -> Result<Self, AuditStreamingDomainError> {
        match (entity_type, entity_id) {
            ("Group", Some(id)) => Ok(Self::Group(id)),
            ("Project", Some(id)) => Ok(Self::Project(id)),
            ("User", Some(id)) => Ok(Self::User(id)),
            ("Gitlab::Audit::InstanceScope", _) => Ok(Self::Instance),
            _ => Err(AuditStreamingDomainError::InvalidAuditEvent(format!(
                "unsupported entity type '{entity_type}'"
            ))),
        }
    }
}
