use std::str::FromStr;

use super::audit_streaming_domain_error::AuditStreamingDomainError;

/// Store an audit event id refers to.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum AuditEventModelClass {
    #[default]
    AuditEvent,
    GroupAuditEvent,
    ProjectAuditEvent,
    UserAuditEvent,
    InstanceAuditEvent,
}

impl AuditEventModelClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AuditEvent => "AuditEvent",
            Self::GroupAuditEvent => "AuditEvents::GroupAuditEvent",
            Self::ProjectAuditEvent => "AuditEvents::ProjectAuditEvent",
            Self::UserAuditEvent => "AuditEvents::UserAuditEvent",
            Self::InstanceAuditEvent => "AuditEvents::InstanceAuditEvent",
        }
    }

    /// Scope column value required for the scoped stores, `None` for the unified one.
    pub fn required_entity_type(&self) -> Option<&'static str> {
        match self {
            Self::AuditEvent => None,
            Self::GroupAuditEvent => Some("Group"),
            Self::ProjectAuditEvent => Some("Project"),
            Self::UserAuditEvent => Some("User"),
            Self::InstanceAuditEvent => Some("Gitlab::Audit::InstanceScope"),
        }
    }
}

impl FromStr for AuditEventModelClass {
    type Err = AuditStreamingDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "AuditEvent" => Ok(Self::AuditEvent),
            "AuditEvents::GroupAuditEvent" => Ok(Self::GroupAuditEvent),
            "AuditEvents::ProjectAuditEvent" => Ok(Self::ProjectAuditEvent),
            "AuditEvents::UserAuditEvent" => Ok(Self::UserAuditEvent),
            "AuditEvents::InstanceAuditEvent" => Ok(Self::InstanceAuditEvent),
            other => Err(AuditStreamingDomainError::InvalidModelClass(
                other.to_string(),
            )),
        }
    }
}
