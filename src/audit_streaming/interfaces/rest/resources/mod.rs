pub mod audit_event_resource;
pub mod audit_streaming_error_response_resource;
pub mod destination_request_resources;
pub mod destination_resource;
pub mod record_audit_event_request_resource;
pub mod stream_audit_event_request_resource;
