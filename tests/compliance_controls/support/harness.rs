use std::sync::Arc;

use audit_stream_service::compliance_controls::{
    application::query_services::compliance_control_query_service_impl::ComplianceControlQueryServiceImpl,
    domain::services::compliance_control_registry::ComplianceControlRegistry,
    infrastructure::manifest::file::file_control_manifest_source_impl::BUILT_IN_MANIFEST,
};

pub fn built_in_registry() -> ComplianceControlRegistry {
    ComplianceControlRegistry::load(BUILT_IN_MANIFEST).expect("built-in manifest is valid")
}

pub fn create_query_service() -> ComplianceControlQueryServiceImpl {
    ComplianceControlQueryServiceImpl::new(Arc::new(built_in_registry()))
}
