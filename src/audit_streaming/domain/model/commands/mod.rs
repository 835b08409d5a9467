pub mod add_streaming_header_command;
pub mod create_destination_command;
pub mod destination_reference_command;
pub mod event_type_filters_command;
pub mod record_audit_event_command;
pub mod remove_streaming_header_command;
pub mod set_namespace_filter_command;
pub mod stream_audit_event_command;
pub mod update_destination_command;
