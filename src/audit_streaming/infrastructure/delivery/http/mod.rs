pub mod reqwest_audit_event_delivery_gateway_impl;
