use async_trait::async_trait;

use crate::compliance_controls::domain::model::enums::compliance_controls_domain_error::ComplianceControlsDomainError;

/// Supplies the raw YAML the registry is built from.
#[async_trait]
pub trait ControlManifestSource: Send + Sync {
    async fn load_manifest(&self) -> Result<String, ComplianceControlsDomainError>;
}
