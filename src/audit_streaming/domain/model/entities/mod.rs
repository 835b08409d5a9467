pub mod audit_event;
pub mod external_destination;
pub mod streaming_header;
