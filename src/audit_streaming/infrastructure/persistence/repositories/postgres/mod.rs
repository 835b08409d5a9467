pub mod sqlx_audit_event_repository_impl;
pub mod sqlx_external_destination_repository_impl;
pub mod sqlx_namespace_repository_impl;
