pub mod audit_event_command_service;
pub mod audit_event_destination_command_service;
pub mod audit_event_destination_query_service;
pub mod audit_event_streaming_service;
pub mod destination_eligibility;
