use async_trait::async_trait;

use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

/// Read access to the group hierarchy.
///
/// Ancestries are ordered from the closest group up to the root group.
#[async_trait]
pub trait NamespaceRepository: Send + Sync {
    /// `None` when the group does not exist.
    async fn find_group_ancestry(
        &self,
        group_id: i64,
    ) -> Result<Option<Vec<i64>>, AuditStreamingDomainError>;

    /// `None` when the project does not exist. Projects in a personal namespace have no groups.
    async fn find_project_group_ancestry(
        &self,
        project_id: i64,
    ) -> Result<Option<Vec<i64>>, AuditStreamingDomainError>;
}
