pub mod compliance_control_registry;
pub mod compliance_control_query_service;
