use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::compliance_controls::{
    domain::model::enums::compliance_controls_domain_error::ComplianceControlsDomainError,
    infrastructure::manifest::control_manifest_source::ControlManifestSource,
};

pub const BUILT_IN_MANIFEST: &str = include_str!("../../../../../config/compliance_controls.yml");

pub struct FileControlManifestSourceImpl {
    path: Option<PathBuf>,
}

impl FileControlManifestSourceImpl {
    /// Reads `path` when given, otherwise serves the manifest compiled into the binary.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ControlManifestSource for FileControlManifestSourceImpl {
    async fn load_manifest(&self) -> Result<String, ComplianceControlsDomainError> {
        match &self.path {
            Some(path) => {
                info!(path = %path.display(), "loading compliance controls manifest");
                tokio::fs::read_to_string(path).await.map_err(|e| {
                    ComplianceControlsDomainError::InfrastructureError(format!(
                        "failed to read {}: {e}",
                        path.display()
                    ))
                })
            }
            None => Ok(BUILT_IN_MANIFEST.to_string()),
        }
    }
}
