pub mod audit_event_repository;
pub mod external_destination_repository;
pub mod namespace_repository;
pub mod postgres;
