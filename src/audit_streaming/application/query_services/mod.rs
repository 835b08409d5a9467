pub mod audit_event_destination_query_service_impl;
