pub mod audit_event_command_service_impl;
pub mod audit_event_destination_command_service_impl;
pub mod audit_event_streaming_service_impl;
