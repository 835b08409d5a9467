pub mod audit_event_delivery_error;
pub mod audit_event_model_class;
pub mod audit_event_scope;
pub mod audit_streaming_domain_error;
pub mod destination_level;
pub mod streaming_outcome;
