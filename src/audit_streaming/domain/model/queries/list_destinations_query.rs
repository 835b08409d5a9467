use crate::audit_streaming::domain::model::enums::{
    audit_streaming_domain_error::AuditStreamingDomainError, destination_level::DestinationLevel,
};

#[derive(Clone, Debug)]
pub struct ListDestinationsQuery {
    level: DestinationLevel,
}

impl ListDestinationsQuery {
    pub fn for_instance() -> Self {
        Self {
            level: DestinationLevel::Instance,
        }
    }

    pub fn for_group(group_id: i64) -> Result<Self, AuditStreamingDomainError> {
        if group_id <= 0 {
            return Err(AuditStreamingDomainError::GroupNotFound);
        }
        Ok(Self {
            level: DestinationLevel::Group(group_id),
        })
    }

    pub fn level(&self) -> DestinationLevel {
        self.level
    }
}
