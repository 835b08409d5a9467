pub mod audit_event_processor;
