use std::sync::Arc;

use axum::Router;
use tracing::info;

use crate::{
    compliance_controls::{
        application::query_services::compliance_control_query_service_impl::ComplianceControlQueryServiceImpl,
        domain::services::compliance_control_registry::ComplianceControlRegistry,
        infrastructure::manifest::{
            control_manifest_source::ControlManifestSource,
            file::file_control_manifest_source_impl::FileControlManifestSourceImpl,
        },
        interfaces::rest::controllers::compliance_controls_rest_controller::{
            ComplianceControlsRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Loads and validates the control manifest once; an invalid manifest aborts startup.
pub async fn build_compliance_controls_router(config: &AppConfig) -> Result<Router, String> {
    let source = FileControlManifestSourceImpl::new(config.compliance_controls_manifest.clone());
    let manifest = source.load_manifest().await.map_err(|e| e.to_string())?;
    let registry = ComplianceControlRegistry::load(&manifest).map_err(|e| e.to_string())?;

    info!(
        controls = registry.controls().len(),
        "compliance controls registry loaded"
    );

    Ok(router(ComplianceControlsRestControllerState {
        query_service: Arc::new(ComplianceControlQueryServiceImpl::new(Arc::new(registry))),
    }))
}
