pub mod audit_event_delivery_gateway;
pub mod http;
